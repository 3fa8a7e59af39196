use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .font(MEDIUM)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(theme::button::primary)
}

/// One half of a two-way selector, styled after a segmented tab bar.
pub fn tab<'a, T: 'a>(t: &'static str, active: bool) -> Button<'a, T> {
    Button::new(content(
        text(t)
            .align_y(iced::Alignment::Center)
            .align_x(iced::Alignment::Center),
    ))
    .style(if active {
        theme::button::tab_active
    } else {
        theme::button::tab_inactive
    })
}

pub fn link<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(container(text(t).align_y(Vertical::Center)).padding(2))
        .style(theme::button::link)
}

fn content<'a, T: 'a>(text: Text<'a>) -> Container<'a, T> {
    container(text)
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5)
}
