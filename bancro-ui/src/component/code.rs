use iced::widget::text_input;
use iced::{Alignment, Length};

use crate::{component::text, widget::*};

const SLOT_WIDTH: f32 = 48.0;

/// Widget id of a code slot, so the application can move focus between
/// slots as digits are accepted.
pub fn slot_id(index: usize) -> text_input::Id {
    text_input::Id::new(format!("code-{}", index))
}

/// A row of single-character inputs for a segmented verification code.
///
/// The component is purely presentational: the caller owns the slot
/// values, decides which edits to accept and drives focus through
/// [`slot_id`].
pub fn segmented_input<'a, Message, F>(
    slots: &'a [String],
    placeholder: &'a str,
    on_edit: F,
) -> Element<'a, Message>
where
    Message: 'a + Clone,
    F: 'static + Clone + Fn(usize, String) -> Message,
{
    let mut row = Row::new().spacing(12).align_y(Alignment::Center);
    for (index, slot) in slots.iter().enumerate() {
        let on_edit = on_edit.clone();
        row = row.push(
            TextInput::new(placeholder, slot)
                .on_input(move |value| on_edit(index, value))
                .id(slot_id(index))
                .size(text::H3_SIZE)
                .padding(10)
                .align_x(Alignment::Center)
                .width(Length::Fixed(SLOT_WIDTH)),
        );
    }
    row.into()
}
