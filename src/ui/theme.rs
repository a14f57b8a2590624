use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xc8, 0x95, 0x6c);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const CARD_BORDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const CARD_TEXT: Color = Color::Rgb(0xd4, 0xd4, 0xd4);
pub const DOT_INACTIVE: Color = Color::Rgb(0x52, 0x52, 0x52);
pub const STAR_EMPTY: Color = Color::Rgb(0x52, 0x52, 0x52);
