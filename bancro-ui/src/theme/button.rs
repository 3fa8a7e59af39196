use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::Button;
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn tab_active(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.tab_active, status)
}

pub fn tab_inactive(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.tab_inactive, status)
}

pub fn link(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.link, status)
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => Style {
            background: Some(Background::Color(p.active.background)),
            text_color: p.active.text,
            border: border(p.active.border),
            ..Default::default()
        },
        Status::Pressed => {
            if let Some(pressed) = p.pressed {
                Style {
                    background: Some(Background::Color(pressed.background)),
                    text_color: pressed.text,
                    border: border(pressed.border),
                    ..Default::default()
                }
            } else {
                button(p, Status::Active)
            }
        }
        Status::Hovered => Style {
            background: Some(Background::Color(p.hovered.background)),
            text_color: p.hovered.text,
            border: border(p.hovered.border),
            ..Default::default()
        },
        Status::Disabled => {
            if let Some(disabled) = p.disabled {
                Style {
                    background: Some(Background::Color(disabled.background)),
                    text_color: disabled.text,
                    border: border(disabled.border),
                    ..Default::default()
                }
            } else {
                let active: Style = button(p, Status::Active);

                Style {
                    text_color: Color {
                        a: 0.2,
                        ..active.text_color
                    },
                    ..active
                }
            }
        }
    }
}

fn border(color: Option<iced::Color>) -> Border {
    if let Some(color) = color {
        Border {
            radius: 8.0.into(),
            width: 1.0,
            color,
        }
    } else {
        Border {
            radius: 8.0.into(),
            ..Default::default()
        }
    }
}
