use ratatui::style::Color;

pub const ROSE: Color = Color::Rgb(0xff, 0x69, 0xb4);
pub const DEEP_ROSE: Color = Color::Rgb(0xc2, 0x18, 0x5b);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const MOTE_DIM: Color = Color::Rgb(0x4b, 0x4b, 0x5a);
pub const MOTE_BRIGHT: Color = Color::Rgb(0x9a, 0x9a, 0xb0);
pub const GAUGE_TRACK: Color = Color::Rgb(0x26, 0x26, 0x26);
