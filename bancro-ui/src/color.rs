use iced::Color;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;
pub const GREY_50: Color = Color::from_rgb(
    0xF9 as f32 / 255.0,
    0xFA as f32 / 255.0,
    0xFB as f32 / 255.0,
);
pub const GREY_100: Color = Color::from_rgb(
    0xF3 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF6 as f32 / 255.0,
);
pub const GREY_200: Color = Color::from_rgb(
    0xE5 as f32 / 255.0,
    0xE7 as f32 / 255.0,
    0xEB as f32 / 255.0,
);
pub const GREY_300: Color = Color::from_rgb(
    0xD1 as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xDB as f32 / 255.0,
);
pub const GREY_400: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
);
pub const GREY_500: Color = Color::from_rgb(
    0x6B as f32 / 255.0,
    0x72 as f32 / 255.0,
    0x80 as f32 / 255.0,
);
pub const GREY_600: Color = Color::from_rgb(
    0x4B as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x63 as f32 / 255.0,
);
pub const GREY_800: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x37 as f32 / 255.0,
);
pub const GREEN: Color = Color::from_rgb(
    0x4A as f32 / 255.0,
    0xDE as f32 / 255.0,
    0x80 as f32 / 255.0,
);
pub const DARK_GREEN: Color = Color::from_rgb(
    0x22 as f32 / 255.0,
    0xC5 as f32 / 255.0,
    0x5E as f32 / 255.0,
);
pub const PALE_GREEN: Color = Color::from_rgba(
    0x4A as f32 / 255.0,
    0xDE as f32 / 255.0,
    0x80 as f32 / 255.0,
    0.15,
);
pub const RED: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
);
pub const PALE_RED: Color = Color::from_rgba(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
    0.12,
);
