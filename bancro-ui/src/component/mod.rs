pub mod button;
pub mod card;
pub mod code;
pub mod form;
pub mod notification;
pub mod text;
