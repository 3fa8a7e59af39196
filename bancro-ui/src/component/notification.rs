use crate::{component::text, theme, widget::*};
use iced::Length;

pub fn success<'a, T: 'a>(message: String) -> Container<'a, T> {
    Container::new(text::p1_medium(message))
        .padding(15)
        .style(theme::notification::success)
        .width(Length::Fill)
}

pub fn warning<'a, T: 'a>(message: String, detail: String) -> Container<'a, T> {
    Container::new(
        Column::new()
            .spacing(5)
            .push(text::p1_bold(message))
            .push(text::p2_regular(detail)),
    )
    .padding(15)
    .style(theme::notification::warning)
    .width(Length::Fill)
}
