use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub success: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub tab_active: Button,
    pub tab_inactive: Button,
    pub link: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub warning: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::GREY_50,
            },
            text: Text {
                primary: color::GREY_800,
                success: color::DARK_GREEN,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::GREEN,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_GREEN,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::DARK_GREEN,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_200,
                        text: color::GREY_400,
                        border: None,
                    }),
                },
                tab_active: Button {
                    active: ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_800,
                        border: color::GREY_200.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::WHITE,
                        text: color::GREY_800,
                        border: color::GREY_200.into(),
                    },
                    pressed: None,
                    disabled: None,
                },
                tab_inactive: Button {
                    active: ButtonPalette {
                        background: color::GREEN,
                        text: color::GREY_800,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::DARK_GREEN,
                        text: color::GREY_800,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                link: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_600,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_800,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: color::GREY_200.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::PALE_GREEN,
                    text: color::GREY_800.into(),
                    border: color::DARK_GREEN.into(),
                },
                warning: ContainerPalette {
                    background: color::PALE_RED,
                    text: color::GREY_800.into(),
                    border: color::RED.into(),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_400,
                        placeholder: color::GREY_400,
                        value: color::GREY_800,
                        selection: color::PALE_GREEN,
                        border: color::GREY_300.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_100,
                        icon: color::GREY_300,
                        placeholder: color::GREY_300,
                        value: color::GREY_500,
                        selection: color::PALE_GREEN,
                        border: color::GREY_200.into(),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::WHITE,
                        icon: color::GREY_400,
                        placeholder: color::GREY_400,
                        value: color::GREY_800,
                        selection: color::PALE_GREEN,
                        border: color::RED.into(),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_100,
                        icon: color::GREY_300,
                        placeholder: color::GREY_300,
                        value: color::GREY_500,
                        selection: color::PALE_GREEN,
                        border: color::RED.into(),
                    },
                },
            },
        }
    }
}
