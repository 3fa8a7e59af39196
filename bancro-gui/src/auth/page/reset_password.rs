use std::sync::Arc;

use iced::Task;
use tracing::warn;

use bancro_ui::component::form;
use bancro_ui::widget::Element;

use crate::auth::{
    message::{Message, PasswordField, ResetPasswordMessage},
    view, Notice,
};
use crate::backend::AuthBackend;

#[derive(Default)]
pub struct Draft {
    pub password: form::Value<String>,
    pub confirm: form::Value<String>,
}

impl Draft {
    pub fn update(&mut self, field: PasswordField, value: String) {
        match field {
            PasswordField::New => self.password.value = value,
            PasswordField::Confirm => self.confirm.value = value,
        }
        // Only flag a mismatch once both fields have content.
        self.confirm.valid = self.password.value.is_empty()
            || self.confirm.value.is_empty()
            || self.password.value == self.confirm.value;
    }

    /// Both fields must be non-blank and byte-for-byte equal. Equality is
    /// checked on the raw values, so "abc " and "abc" do not match.
    pub fn valid(&self) -> bool {
        !self.password.value.trim().is_empty()
            && !self.confirm.value.trim().is_empty()
            && self.password.value == self.confirm.value
    }
}

pub struct ResetPassword {
    pub(crate) draft: Draft,
    show_password: bool,
    show_confirm: bool,
    processing: bool,
    notice: Option<Notice>,
}

impl ResetPassword {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            show_password: false,
            show_confirm: false,
            processing: false,
            notice: None,
        }
    }

    pub fn update(
        &mut self,
        backend: &Arc<dyn AuthBackend>,
        message: ResetPasswordMessage,
    ) -> Task<Message> {
        match message {
            ResetPasswordMessage::FieldEdited(field, value) => {
                self.draft.update(field, value);
                Task::none()
            }
            ResetPasswordMessage::TogglePassword(field) => {
                match field {
                    PasswordField::New => self.show_password = !self.show_password,
                    PasswordField::Confirm => self.show_confirm = !self.show_confirm,
                }
                Task::none()
            }
            ResetPasswordMessage::Submit => {
                if self.processing {
                    return Task::none();
                }
                // The button is already gated on validity, but the fields
                // may have changed between render and submit.
                if self.draft.password.value != self.draft.confirm.value {
                    self.notice = Some(Notice::Error(
                        "Password reset failed".to_string(),
                        "Passwords do not match!".to_string(),
                    ));
                    return Task::none();
                }
                if !self.draft.valid() {
                    return Task::none();
                }
                self.processing = true;
                self.notice = None;
                let backend = backend.clone();
                let password = self.draft.password.value.clone();
                Task::perform(
                    async move { backend.reset_password(&password).await },
                    |res| Message::ResetPassword(ResetPasswordMessage::Submitted(res)),
                )
            }
            ResetPasswordMessage::Submitted(res) => {
                self.processing = false;
                match res {
                    Ok(()) => {
                        self.notice =
                            Some(Notice::Success("Password Reset successful!".to_string()));
                    }
                    Err(e) => {
                        warn!("{}", e);
                        self.notice = Some(Notice::Error(
                            "Password reset failed".to_string(),
                            e.to_string(),
                        ));
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::reset_password(
            &self.draft,
            self.show_password,
            self.show_confirm,
            self.processing,
            self.notice.as_ref(),
        )
    }
}

impl Default for ResetPassword {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passwords_must_match_exactly() {
        let mut draft = Draft::default();
        draft.update(PasswordField::New, "abc123".to_string());
        draft.update(PasswordField::Confirm, "abc124".to_string());
        assert!(!draft.valid());
        draft.update(PasswordField::Confirm, "abc123".to_string());
        assert!(draft.valid());
        // Same letters, different trailing whitespace: not a match.
        draft.update(PasswordField::Confirm, "abc123 ".to_string());
        assert!(!draft.valid());
    }

    #[test]
    fn mismatch_marks_the_confirm_field_invalid() {
        let mut draft = Draft::default();
        draft.update(PasswordField::New, "abc123".to_string());
        assert!(draft.confirm.valid);
        draft.update(PasswordField::Confirm, "abc124".to_string());
        assert!(!draft.confirm.valid);
        draft.update(PasswordField::Confirm, "abc123".to_string());
        assert!(draft.confirm.valid);
        // Editing the first field can introduce the mismatch too.
        draft.update(PasswordField::New, "abc125".to_string());
        assert!(!draft.confirm.valid);
    }

    #[test]
    fn blank_passwords_are_invalid_even_when_equal() {
        let mut draft = Draft::default();
        assert!(!draft.valid());
        draft.update(PasswordField::New, "   ".to_string());
        draft.update(PasswordField::Confirm, "   ".to_string());
        assert!(!draft.valid());
    }

    #[test]
    fn mismatch_on_submit_raises_a_notice() {
        let mut screen = ResetPassword::new();
        screen.draft.update(PasswordField::New, "abc123".to_string());
        screen
            .draft
            .update(PasswordField::Confirm, "abc124".to_string());
        let backend: Arc<dyn AuthBackend> = Arc::new(crate::backend::StubBackend);
        let _ = screen.update(&backend, ResetPasswordMessage::Submit);
        match &screen.notice {
            Some(Notice::Error(_, detail)) => assert_eq!(detail, "Passwords do not match!"),
            _ => panic!("expected an error notice"),
        }
    }

    #[test]
    fn toggles_are_independent() {
        let mut screen = ResetPassword::new();
        let backend: Arc<dyn AuthBackend> = Arc::new(crate::backend::StubBackend);
        let _ = screen.update(
            &backend,
            ResetPasswordMessage::TogglePassword(PasswordField::New),
        );
        assert!(screen.show_password);
        assert!(!screen.show_confirm);
    }
}
