use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const VALUE: Color = Color::BrightCyan;
pub const AVAILABLE: Color = Color::Green;
pub const TAKEN: Color = Color::Red;
pub const FAILED: Color = Color::Yellow;
