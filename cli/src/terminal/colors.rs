use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

/// Candidates no flag rule fired for.
pub const SERIAL_CLEAN: Color = Color::Green;
/// Candidates at least one flag rule fired for.
pub const SERIAL_SUSPECT: Color = Color::Red;
