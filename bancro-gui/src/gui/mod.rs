use std::sync::Arc;

use iced::{widget::focus_next, widget::focus_previous, Subscription, Task};

use bancro_ui::widget::Element;

use crate::auth::{self, AuthFlow, Route};
use crate::backend::StubBackend;

#[derive(Debug, Clone)]
pub enum Key {
    Tab(bool),
}

#[derive(Debug, Clone)]
pub enum Message {
    KeyPressed(Key),
    Auth(auth::Message),
}

pub struct GUI {
    auth: AuthFlow,
}

impl GUI {
    pub fn new(route: Route) -> (Self, Task<Message>) {
        let (auth, task) = AuthFlow::new(Arc::new(StubBackend), route);
        (Self { auth }, task.map(Message::Auth))
    }

    pub fn title(&self) -> String {
        format!("Bancro - {}", self.auth.screen_title())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::KeyPressed(Key::Tab(shift)) => {
                if shift {
                    focus_previous()
                } else {
                    focus_next()
                }
            }
            Message::Auth(message) => self.auth.update(message).map(Message::Auth),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.auth.view().map(Message::Auth)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, status, _| match (&event, status) {
            (
                iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                    key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }),
                iced::event::Status::Ignored,
            ) => Some(Message::KeyPressed(Key::Tab(modifiers.shift()))),
            _ => None,
        })
    }
}
