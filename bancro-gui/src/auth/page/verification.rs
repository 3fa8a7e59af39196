use std::sync::Arc;

use iced::widget::text_input;
use iced::Task;
use tracing::warn;

use bancro_ui::component::code::slot_id;
use bancro_ui::widget::Element;

use crate::auth::{
    code::VerificationCode,
    message::{Message, VerificationMessage},
    route::{Mode, Route},
    view, Notice,
};
use crate::backend::AuthBackend;

/// Where a verified user lands depends on the flow that sent the code.
/// Without a known mode there is nowhere sensible to go, so the screen
/// simply stays put.
pub fn destination(mode: Option<Mode>) -> Option<Route> {
    match mode? {
        Mode::SignUp => Some(Route::SignIn),
        Mode::Reset => Some(Route::ResetPassword),
    }
}

pub struct Verification {
    mode: Option<Mode>,
    pub(crate) code: VerificationCode,
    processing: bool,
    notice: Option<Notice>,
}

impl Verification {
    pub fn new(mode: Option<Mode>) -> Self {
        Self {
            mode,
            code: VerificationCode::new(),
            processing: false,
            notice: None,
        }
    }

    pub fn update(
        &mut self,
        backend: &Arc<dyn AuthBackend>,
        message: VerificationMessage,
    ) -> Task<Message> {
        match message {
            VerificationMessage::SlotEdited(index, value) => {
                match self.code.edit(index, &value) {
                    Some(next) => text_input::focus(slot_id(next)),
                    None => Task::none(),
                }
            }
            VerificationMessage::Submit => {
                if !self.code.is_complete() || self.processing {
                    return Task::none();
                }
                self.processing = true;
                self.notice = None;
                let backend = backend.clone();
                let code = self.code.value();
                Task::perform(
                    async move { backend.verify_code(&code).await },
                    |res| Message::Verification(VerificationMessage::Submitted(res)),
                )
            }
            VerificationMessage::Submitted(res) => {
                self.processing = false;
                match res {
                    Ok(()) => match destination(self.mode) {
                        Some(route) => Task::perform(async move { route }, Message::Navigate),
                        None => {
                            self.notice =
                                Some(Notice::Success("Code verified!".to_string()));
                            Task::none()
                        }
                    },
                    Err(e) => {
                        warn!("{}", e);
                        self.notice = Some(Notice::Error(
                            "Verification failed".to_string(),
                            e.to_string(),
                        ));
                        Task::none()
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::verification(&self.code, self.processing, self.notice.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_follows_the_flow() {
        assert_eq!(destination(Some(Mode::SignUp)), Some(Route::SignIn));
        assert_eq!(destination(Some(Mode::Reset)), Some(Route::ResetPassword));
        assert_eq!(destination(None), None);
    }

    #[test]
    fn rejected_edits_leave_the_code_untouched() {
        let mut screen = Verification::new(Some(Mode::SignUp));
        let _ = screen.code.edit(0, "4");
        let backend: Arc<dyn AuthBackend> = Arc::new(crate::backend::StubBackend);
        let _ = screen.update(
            &backend,
            VerificationMessage::SlotEdited(0, "ab".to_string()),
        );
        assert_eq!(screen.code.slots()[0], "4");
    }
}
