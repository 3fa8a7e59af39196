pub mod code;
pub mod message;
pub mod page;
pub mod route;
mod view;

pub use message::Message;
pub use route::{Mode, Route};

use std::sync::Arc;

use iced::Task;
use tracing::info;

use bancro_ui::widget::Element;

use crate::backend::AuthBackend;
use page::{Reset, ResetPassword, SignIn, SignUp, Verification};

/// Transient banner shown on a screen after a submit.
#[derive(Debug, Clone)]
pub enum Notice {
    Success(String),
    Error(String, String),
}

enum Screen {
    SignIn(SignIn),
    SignUp(SignUp),
    Reset(Reset),
    Verification(Verification),
    ResetPassword(ResetPassword),
}

impl Screen {
    fn new(route: Route) -> Self {
        match route {
            Route::SignIn => Screen::SignIn(SignIn::new()),
            Route::SignUp => Screen::SignUp(SignUp::new()),
            Route::Reset => Screen::Reset(Reset::new()),
            Route::Verification(mode) => Screen::Verification(Verification::new(mode)),
            Route::ResetPassword => Screen::ResetPassword(ResetPassword::new()),
        }
    }
}

pub struct AuthFlow {
    backend: Arc<dyn AuthBackend>,
    route: Route,
    screen: Screen,
}

impl AuthFlow {
    pub fn new(backend: Arc<dyn AuthBackend>, route: Route) -> (Self, Task<Message>) {
        (
            Self {
                backend,
                route,
                screen: Screen::new(route),
            },
            Task::none(),
        )
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn screen_title(&self) -> &'static str {
        match self.route {
            Route::SignIn => "Sign In",
            Route::SignUp => "Sign Up",
            Route::Reset => "Password Reset",
            Route::Verification(_) => "Email Verification",
            Route::ResetPassword => "New Password",
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                info!("navigating to {}", route);
                self.route = route;
                // The previous screen's draft is dropped wholesale.
                self.screen = Screen::new(route);
                Task::none()
            }
            message => match (&mut self.screen, message) {
                (Screen::SignIn(screen), Message::SignIn(msg)) => {
                    screen.update(&self.backend, msg)
                }
                (Screen::SignUp(screen), Message::SignUp(msg)) => {
                    screen.update(&self.backend, msg)
                }
                (Screen::Reset(screen), Message::Reset(msg)) => screen.update(&self.backend, msg),
                (Screen::Verification(screen), Message::Verification(msg)) => {
                    screen.update(&self.backend, msg)
                }
                (Screen::ResetPassword(screen), Message::ResetPassword(msg)) => {
                    screen.update(&self.backend, msg)
                }
                // A message for another screen, e.g. a submit result arriving
                // after the user navigated away.
                _ => Task::none(),
            },
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::SignIn(screen) => screen.view(),
            Screen::SignUp(screen) => screen.view(),
            Screen::Reset(screen) => screen.view(),
            Screen::Verification(screen) => screen.view(),
            Screen::ResetPassword(screen) => screen.view(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::message::{SignInField, SignInMessage};
    use crate::backend::StubBackend;

    #[test]
    fn navigation_drops_the_draft() {
        let (mut flow, _) = AuthFlow::new(Arc::new(StubBackend), Route::SignIn);
        let _ = flow.update(Message::SignIn(SignInMessage::FieldEdited(
            SignInField::Email,
            "johndoe@email.com".to_string(),
        )));
        match &flow.screen {
            Screen::SignIn(screen) => assert_eq!(screen.draft.email.value, "johndoe@email.com"),
            _ => panic!("expected the sign-in screen"),
        }

        let _ = flow.update(Message::Navigate(Route::SignIn));
        match &flow.screen {
            Screen::SignIn(screen) => assert!(screen.draft.email.value.is_empty()),
            _ => panic!("expected the sign-in screen"),
        }
    }

    #[test]
    fn stale_messages_are_ignored() {
        let (mut flow, _) = AuthFlow::new(Arc::new(StubBackend), Route::Reset);
        let _ = flow.update(Message::SignIn(SignInMessage::FieldEdited(
            SignInField::Email,
            "johndoe@email.com".to_string(),
        )));
        assert_eq!(flow.route(), Route::Reset);
    }
}
