use std::sync::Arc;

use iced::Task;
use tracing::{info, warn};

use bancro_ui::component::form;
use bancro_ui::widget::Element;

use crate::auth::{
    message::{Message, SignInField, SignInMessage},
    view, Notice,
};
use crate::backend::AuthBackend;

#[derive(Default)]
pub struct Draft {
    pub email: form::Value<String>,
    pub password: form::Value<String>,
}

impl Draft {
    pub fn update(&mut self, field: SignInField, value: String) {
        match field {
            SignInField::Email => self.email.value = value,
            SignInField::Password => self.password.value = value,
        }
    }

    pub fn valid(&self) -> bool {
        !self.email.value.trim().is_empty() && !self.password.value.trim().is_empty()
    }
}

pub struct SignIn {
    pub(crate) draft: Draft,
    show_password: bool,
    processing: bool,
    notice: Option<Notice>,
}

impl SignIn {
    pub fn new() -> Self {
        Self {
            draft: Draft::default(),
            show_password: false,
            processing: false,
            notice: None,
        }
    }

    pub fn update(
        &mut self,
        backend: &Arc<dyn AuthBackend>,
        message: SignInMessage,
    ) -> Task<Message> {
        match message {
            SignInMessage::FieldEdited(field, value) => {
                self.draft.update(field, value);
                Task::none()
            }
            SignInMessage::TogglePassword => {
                self.show_password = !self.show_password;
                Task::none()
            }
            SignInMessage::Submit => {
                if !self.draft.valid() || self.processing {
                    return Task::none();
                }
                self.processing = true;
                self.notice = None;
                let backend = backend.clone();
                let email = self.draft.email.value.trim().to_string();
                let password = self.draft.password.value.clone();
                Task::perform(
                    async move { backend.sign_in(&email, &password).await },
                    |res| Message::SignIn(SignInMessage::Submitted(res)),
                )
            }
            SignInMessage::Submitted(res) => {
                self.processing = false;
                match res {
                    Ok(session) => {
                        info!("signed in as {}", session.email);
                        self.notice = Some(Notice::Success("Sign in successful!".to_string()));
                    }
                    Err(e) => {
                        warn!("{}", e);
                        self.notice =
                            Some(Notice::Error("Sign in failed".to_string(), e.to_string()));
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::sign_in(
            &self.draft,
            self.show_password,
            self.processing,
            self.notice.as_ref(),
        )
    }
}

impl Default for SignIn {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_keeps_values_unchanged() {
        let mut draft = Draft::default();
        for value in ["johndoe@email.com", " spaced ", "ünïcode", ""] {
            draft.update(SignInField::Email, value.to_string());
            assert_eq!(draft.email.value, value);
        }
    }

    #[test]
    fn validity_needs_both_fields() {
        let mut draft = Draft::default();
        assert!(!draft.valid());
        draft.update(SignInField::Email, "johndoe@email.com".to_string());
        assert!(!draft.valid());
        draft.update(SignInField::Password, "hunter2".to_string());
        assert!(draft.valid());
        // Blank-after-trim values do not count.
        draft.update(SignInField::Email, "   ".to_string());
        assert!(!draft.valid());
    }
}
