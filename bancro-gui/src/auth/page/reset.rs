use std::sync::Arc;

use iced::Task;
use tracing::warn;

use bancro_ui::component::form;
use bancro_ui::widget::Element;

use crate::auth::{
    message::{Message, ResetMessage},
    route::{Mode, Route},
    view, Notice,
};
use crate::backend::AuthBackend;

/// Password-reset request screen: asks for the account email and sends a
/// verification code to it.
pub struct Reset {
    pub(crate) email: form::Value<String>,
    processing: bool,
    notice: Option<Notice>,
}

impl Reset {
    pub fn new() -> Self {
        Self {
            email: form::Value::default(),
            processing: false,
            notice: None,
        }
    }

    pub fn valid(&self) -> bool {
        !self.email.value.trim().is_empty()
    }

    pub fn update(
        &mut self,
        backend: &Arc<dyn AuthBackend>,
        message: ResetMessage,
    ) -> Task<Message> {
        match message {
            ResetMessage::EmailEdited(value) => {
                self.email.value = value;
                Task::none()
            }
            ResetMessage::Submit => {
                if !self.valid() || self.processing {
                    return Task::none();
                }
                self.processing = true;
                self.notice = None;
                let backend = backend.clone();
                let email = self.email.value.trim().to_string();
                Task::perform(
                    async move { backend.request_reset(&email).await },
                    |res| Message::Reset(ResetMessage::Submitted(res)),
                )
            }
            ResetMessage::Submitted(res) => {
                self.processing = false;
                match res {
                    Ok(()) => Task::perform(
                        async { Route::Verification(Some(Mode::Reset)) },
                        Message::Navigate,
                    ),
                    Err(e) => {
                        warn!("{}", e);
                        self.notice = Some(Notice::Error(
                            "Password reset request failed".to_string(),
                            e.to_string(),
                        ));
                        Task::none()
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::reset(&self.email, self.valid(), self.processing, self.notice.as_ref())
    }
}

impl Default for Reset {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_email_is_required() {
        let mut screen = Reset::new();
        assert!(!screen.valid());
        screen.email.value = "  ".to_string();
        assert!(!screen.valid());
        screen.email.value = "johndoe@email.com".to_string();
        assert!(screen.valid());
    }
}
