use std::sync::Arc;

use iced::Task;
use tracing::warn;

use bancro_ui::component::form;
use bancro_ui::widget::Element;

use crate::auth::{
    message::{Message, SignUpField, SignUpMessage},
    route::{Mode, Route},
    view, Notice,
};
use crate::backend::{AuthBackend, Identity, NewAccount};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Personal,
    Business,
}

#[derive(Default)]
pub struct Draft {
    pub first_name: form::Value<String>,
    pub last_name: form::Value<String>,
    pub company_name: form::Value<String>,
    pub email: form::Value<String>,
    pub password: form::Value<String>,
}

impl Draft {
    pub fn update(&mut self, field: SignUpField, value: String) {
        match field {
            SignUpField::FirstName => self.first_name.value = value,
            SignUpField::LastName => self.last_name.value = value,
            SignUpField::CompanyName => self.company_name.value = value,
            SignUpField::Email => self.email.value = value,
            SignUpField::Password => self.password.value = value,
        }
    }

    /// Which name fields are required depends on the account type
    /// selection, which lives outside the draft.
    pub fn valid(&self, account_type: AccountType) -> bool {
        let name_ok = match account_type {
            AccountType::Personal => {
                !self.first_name.value.trim().is_empty() && !self.last_name.value.trim().is_empty()
            }
            AccountType::Business => !self.company_name.value.trim().is_empty(),
        };
        name_ok
            && !self.email.value.trim().is_empty()
            && !self.password.value.trim().is_empty()
    }

    fn identity(&self, account_type: AccountType) -> Identity {
        match account_type {
            AccountType::Personal => Identity::Personal {
                first_name: self.first_name.value.trim().to_string(),
                last_name: self.last_name.value.trim().to_string(),
            },
            AccountType::Business => Identity::Business {
                company_name: self.company_name.value.trim().to_string(),
            },
        }
    }
}

pub struct SignUp {
    pub(crate) draft: Draft,
    account_type: AccountType,
    show_password: bool,
    processing: bool,
    notice: Option<Notice>,
}

impl SignUp {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            account_type: AccountType::Personal,
            show_password: false,
            processing: false,
            notice: None,
        }
    }

    pub fn update(
        &mut self,
        backend: &Arc<dyn AuthBackend>,
        message: SignUpMessage,
    ) -> Task<Message> {
        match message {
            SignUpMessage::AccountTypeSelected(account_type) => {
                self.account_type = account_type;
                Task::none()
            }
            SignUpMessage::FieldEdited(field, value) => {
                self.draft.update(field, value);
                Task::none()
            }
            SignUpMessage::TogglePassword => {
                self.show_password = !self.show_password;
                Task::none()
            }
            SignUpMessage::Submit => {
                if !self.draft.valid(self.account_type) || self.processing {
                    return Task::none();
                }
                self.processing = true;
                self.notice = None;
                let backend = backend.clone();
                let account = NewAccount {
                    identity: self.draft.identity(self.account_type),
                    email: self.draft.email.value.trim().to_string(),
                    password: self.draft.password.value.clone(),
                };
                Task::perform(
                    async move { backend.register(account).await },
                    |res| Message::SignUp(SignUpMessage::Submitted(res)),
                )
            }
            SignUpMessage::Submitted(res) => {
                self.processing = false;
                match res {
                    Ok(()) => Task::perform(
                        async { Route::Verification(Some(Mode::SignUp)) },
                        Message::Navigate,
                    ),
                    Err(e) => {
                        warn!("{}", e);
                        self.notice =
                            Some(Notice::Error("Sign up failed".to_string(), e.to_string()));
                        Task::none()
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::sign_up(
            &self.draft,
            self.account_type,
            self.show_password,
            self.processing,
            self.notice.as_ref(),
        )
    }
}

impl Default for SignUp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_personal() -> Draft {
        let mut draft = Draft::default();
        draft.update(SignUpField::FirstName, "John".to_string());
        draft.update(SignUpField::LastName, "Doe".to_string());
        draft.update(SignUpField::Email, "johndoe@email.com".to_string());
        draft.update(SignUpField::Password, "hunter2".to_string());
        draft
    }

    #[test]
    fn personal_account_needs_first_and_last_name() {
        let draft = filled_personal();
        assert!(draft.valid(AccountType::Personal));

        let mut draft = filled_personal();
        draft.update(SignUpField::LastName, "".to_string());
        assert!(!draft.valid(AccountType::Personal));
    }

    #[test]
    fn switching_account_type_changes_the_required_fields() {
        // Personal names filled, no company name: valid only as personal.
        let draft = filled_personal();
        assert!(draft.valid(AccountType::Personal));
        assert!(!draft.valid(AccountType::Business));

        // The company name alone satisfies the business branch even with
        // both personal names blank.
        let mut draft = Draft::default();
        draft.update(SignUpField::CompanyName, "Acme".to_string());
        draft.update(SignUpField::Email, "ops@acme.com".to_string());
        draft.update(SignUpField::Password, "hunter2".to_string());
        assert!(draft.valid(AccountType::Business));
        assert!(!draft.valid(AccountType::Personal));
    }

    #[test]
    fn email_and_password_are_always_required() {
        let mut draft = filled_personal();
        draft.update(SignUpField::Email, "".to_string());
        assert!(!draft.valid(AccountType::Personal));

        let mut draft = filled_personal();
        draft.update(SignUpField::Password, "  ".to_string());
        assert!(!draft.valid(AccountType::Personal));
    }
}
