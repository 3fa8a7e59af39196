use iced::widget::Space;
use iced::{Alignment, Length};

use bancro_ui::component::{button, card, code, form, notification, text};
use bancro_ui::theme;
use bancro_ui::widget::*;

use crate::auth::code::VerificationCode;
use crate::auth::message::{
    Message, PasswordField, ResetMessage, ResetPasswordMessage, SignInField, SignInMessage,
    SignUpField, SignUpMessage, VerificationMessage,
};
use crate::auth::page::sign_up::AccountType;
use crate::auth::page::{reset_password, sign_in, sign_up};
use crate::auth::route::Route;
use crate::auth::Notice;

const CARD_WIDTH: f32 = 400.0;

pub fn sign_in<'a>(
    draft: &'a sign_in::Draft,
    show_password: bool,
    processing: bool,
    notice: Option<&'a Notice>,
) -> Element<'a, Message> {
    let submit = Message::SignIn(SignInMessage::Submit);
    layout(
        "Sign In",
        notice,
        Column::new()
            .spacing(20)
            .push(labeled(
                "Email",
                field("johndoe@email.com", &draft.email, processing, |value| {
                    Message::SignIn(SignInMessage::FieldEdited(SignInField::Email, value))
                })
                .id("sign_in_email")
                .on_submit(submit.clone()),
            ))
            .push(
                Column::new()
                    .spacing(5)
                    .push(password_label(
                        "Password",
                        show_password,
                        Message::SignIn(SignInMessage::TogglePassword),
                    ))
                    .push(Element::from(
                        field("••••••••", &draft.password, processing, |value| {
                            Message::SignIn(SignInMessage::FieldEdited(
                                SignInField::Password,
                                value,
                            ))
                        })
                        .secure(!show_password)
                        .on_submit(submit.clone()),
                    )),
            )
            .push(
                button::primary("Login")
                    .width(Length::Fill)
                    .on_press_maybe((draft.valid() && !processing).then_some(submit)),
            )
            .push(
                Row::new()
                    .align_y(Alignment::Center)
                    .push(
                        button::link("Forgot Password?")
                            .on_press(Message::Navigate(Route::Reset)),
                    )
                    .push(Space::with_width(Length::Fill))
                    .push(text::p2_regular("Don't have an account?"))
                    .push(button::link("Sign Up").on_press(Message::Navigate(Route::SignUp))),
            ),
    )
}

pub fn sign_up<'a>(
    draft: &'a sign_up::Draft,
    account_type: AccountType,
    show_password: bool,
    processing: bool,
    notice: Option<&'a Notice>,
) -> Element<'a, Message> {
    let submit = Message::SignUp(SignUpMessage::Submit);
    let name_fields: Element<'a, Message> = match account_type {
        AccountType::Personal => Row::new()
            .spacing(12)
            .push(labeled(
                "First Name",
                field("John", &draft.first_name, processing, |value| {
                    Message::SignUp(SignUpMessage::FieldEdited(SignUpField::FirstName, value))
                }),
            ))
            .push(labeled(
                "Last Name",
                field("Doe", &draft.last_name, processing, |value| {
                    Message::SignUp(SignUpMessage::FieldEdited(SignUpField::LastName, value))
                }),
            ))
            .into(),
        AccountType::Business => labeled(
            "Company Name",
            field("Acme Inc.", &draft.company_name, processing, |value| {
                Message::SignUp(SignUpMessage::FieldEdited(SignUpField::CompanyName, value))
            }),
        )
        .into(),
    };

    layout(
        "Sign Up",
        notice,
        Column::new()
            .spacing(20)
            .push(
                Row::new()
                    .spacing(8)
                    .push(
                        button::tab("Personal", account_type == AccountType::Personal)
                            .width(Length::Fill)
                            .on_press(Message::SignUp(SignUpMessage::AccountTypeSelected(
                                AccountType::Personal,
                            ))),
                    )
                    .push(
                        button::tab("Business", account_type == AccountType::Business)
                            .width(Length::Fill)
                            .on_press(Message::SignUp(SignUpMessage::AccountTypeSelected(
                                AccountType::Business,
                            ))),
                    ),
            )
            .push(name_fields)
            .push(labeled(
                "Email",
                field("johndoe@email.com", &draft.email, processing, |value| {
                    Message::SignUp(SignUpMessage::FieldEdited(SignUpField::Email, value))
                }),
            ))
            .push(
                Column::new()
                    .spacing(5)
                    .push(password_label(
                        "Password",
                        show_password,
                        Message::SignUp(SignUpMessage::TogglePassword),
                    ))
                    .push(Element::from(
                        field("••••••••", &draft.password, processing, |value| {
                            Message::SignUp(SignUpMessage::FieldEdited(
                                SignUpField::Password,
                                value,
                            ))
                        })
                        .secure(!show_password)
                        .on_submit(submit.clone()),
                    )),
            )
            .push(
                button::primary("Create Account")
                    .width(Length::Fill)
                    .on_press_maybe(
                        (draft.valid(account_type) && !processing).then_some(submit),
                    ),
            )
            .push(
                Row::new()
                    .align_y(Alignment::Center)
                    .push(text::p2_regular("Already have an account?"))
                    .push(button::link("Sign In").on_press(Message::Navigate(Route::SignIn))),
            ),
    )
}

pub fn reset<'a>(
    email: &'a form::Value<String>,
    valid: bool,
    processing: bool,
    notice: Option<&'a Notice>,
) -> Element<'a, Message> {
    let submit = Message::Reset(ResetMessage::Submit);
    layout(
        "Password Reset",
        notice,
        Column::new()
            .spacing(20)
            .push(text::p2_regular(
                "Enter your email and we will send you a verification code.",
            ))
            .push(labeled(
                "Email",
                field("johndoe@email.com", email, processing, |value| {
                    Message::Reset(ResetMessage::EmailEdited(value))
                })
                .id("reset_email")
                .on_submit(submit.clone()),
            ))
            .push(
                button::primary("Request Password Reset")
                    .width(Length::Fill)
                    .on_press_maybe((valid && !processing).then_some(submit)),
            )
            .push(button::link("Go Back").on_press(Message::Navigate(Route::SignIn))),
    )
}

pub fn verification<'a>(
    code: &'a VerificationCode,
    processing: bool,
    notice: Option<&'a Notice>,
) -> Element<'a, Message> {
    let submit = Message::Verification(VerificationMessage::Submit);
    layout(
        "Email Verification",
        notice,
        Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .push(text::p2_regular(
                "Enter the 6-digit code we sent to your email.",
            ))
            .push(code::segmented_input(
                code.slots(),
                code.placeholder(),
                |index, value| {
                    Message::Verification(VerificationMessage::SlotEdited(index, value))
                },
            ))
            .push(
                button::primary("Verify Code")
                    .width(Length::Fill)
                    .on_press_maybe((code.is_complete() && !processing).then_some(submit)),
            ),
    )
}

pub fn reset_password<'a>(
    draft: &'a reset_password::Draft,
    show_password: bool,
    show_confirm: bool,
    processing: bool,
    notice: Option<&'a Notice>,
) -> Element<'a, Message> {
    let submit = Message::ResetPassword(ResetPasswordMessage::Submit);
    layout(
        "New Password",
        notice,
        Column::new()
            .spacing(20)
            .push(
                Column::new()
                    .spacing(5)
                    .push(password_label(
                        "New Password",
                        show_password,
                        Message::ResetPassword(ResetPasswordMessage::TogglePassword(
                            PasswordField::New,
                        )),
                    ))
                    .push(Element::from(
                        field("••••••••", &draft.password, processing, |value| {
                            Message::ResetPassword(ResetPasswordMessage::FieldEdited(
                                PasswordField::New,
                                value,
                            ))
                        })
                        .secure(!show_password),
                    )),
            )
            .push(
                Column::new()
                    .spacing(5)
                    .push(password_label(
                        "Confirm Password",
                        show_confirm,
                        Message::ResetPassword(ResetPasswordMessage::TogglePassword(
                            PasswordField::Confirm,
                        )),
                    ))
                    .push(Element::from(
                        field("••••••••", &draft.confirm, processing, |value| {
                            Message::ResetPassword(ResetPasswordMessage::FieldEdited(
                                PasswordField::Confirm,
                                value,
                            ))
                        })
                        .warning("Passwords do not match!")
                        .secure(!show_confirm)
                        .on_submit(submit.clone()),
                    )),
            )
            .push(
                button::primary("Reset Password")
                    .width(Length::Fill)
                    .on_press_maybe((draft.valid() && !processing).then_some(submit)),
            ),
    )
}

fn layout<'a>(
    title: &'static str,
    notice: Option<&'a Notice>,
    content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .max_width(CARD_WIDTH)
            .push(text::h1("Bancro").style(theme::text::success))
            .push_maybe(notice.map(banner))
            .push(
                card::simple(
                    Column::new()
                        .spacing(24)
                        .push(text::h3(title))
                        .push(content.into()),
                )
                .width(Length::Fill),
            ),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .padding(30)
    .into()
}

fn banner(notice: &Notice) -> Element<'_, Message> {
    match notice {
        Notice::Success(message) => notification::success(message.clone()).into(),
        Notice::Error(message, detail) => {
            notification::warning(message.clone(), detail.clone()).into()
        }
    }
}

// Inputs are frozen while a submit is in flight.
fn field<'a, F>(
    placeholder: &str,
    value: &'a form::Value<String>,
    processing: bool,
    on_change: F,
) -> form::Form<'a, Message>
where
    F: 'static + Fn(String) -> Message,
{
    if processing {
        form::Form::new_disabled(placeholder, value)
    } else {
        form::Form::new(placeholder, value, on_change)
    }
    .padding(10)
}

fn labeled<'a>(
    label: &'static str,
    input: form::Form<'a, Message>,
) -> Column<'a, Message> {
    Column::new()
        .spacing(5)
        .push(text::p2_medium(label))
        .push(Element::from(input))
}

fn password_label<'a>(
    label: &'static str,
    shown: bool,
    toggle: Message,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .push(text::p2_medium(label))
        .push(Space::with_width(Length::Fill))
        .push(button::link(if shown { "Hide" } else { "Show" }).on_press(toggle))
}
