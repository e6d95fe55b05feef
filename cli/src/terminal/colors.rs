use colored::Color;

pub const PRIMARY: Color = Color::TrueColor { r: 102, g: 204, b: 153 };
pub const ACCENT: Color = Color::TrueColor { r: 255, g: 204, b: 102 };
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const IPV4_ADDR: Color = Color::BrightCyan;
pub const IPV6_ADDR: Color = Color::BrightBlue;
pub const MAC_ADDR: Color = Color::BrightMagenta;
pub const PORT_OPEN: Color = Color::BrightGreen;
pub const PORT_OTHER: Color = Color::Yellow;
