use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::Yellow;
pub const TEXT_DEFAULT: Color = Color::White;
pub const SEPARATOR: Color = Color::BrightBlack;
