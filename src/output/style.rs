//! Terminal styling
//!
//! [`render`] maps a semantic [`Style`] onto ANSI escape sequences. It is a
//! pure function; whether color is wanted at all is decided by the caller
//! (see [`ResultFormatter::no_color`](super::ResultFormatter::no_color)).

use std::fmt;

/// Sequence that resets all attributes
pub const RESET: &str = "\x1b[0m";

/// An ANSI color, standard (16-color) or extended (256-color)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// Index into the 256-color palette
    Extended(u8),
}

impl Color {
    /// SGR code for this color as a foreground
    fn foreground_code(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
            Color::White => 37,
            Color::BrightBlack => 90,
            Color::BrightRed => 91,
            Color::BrightGreen => 92,
            Color::BrightYellow => 93,
            Color::BrightBlue => 94,
            Color::BrightMagenta => 95,
            Color::BrightCyan => 96,
            Color::BrightWhite => 97,
            Color::Extended(_) => 38,
        }
    }

    /// Escape sequence selecting this color as foreground
    pub fn foreground(self) -> String {
        match self {
            Color::Extended(index) => format!("\x1b[38;5;{index}m"),
            standard => format!("\x1b[{}m", standard.foreground_code()),
        }
    }

    /// Escape sequence selecting this color as background
    pub fn background(self) -> String {
        match self {
            Color::Extended(index) => format!("\x1b[48;5;{index}m"),
            standard => format!("\x1b[{}m", standard.foreground_code() + 10),
        }
    }
}

/// Semantic style tags used by the reporter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    Success,
    Failure,
    Error,
    Muted,
    Info,
    Warning,
    #[default]
    None,
}

impl Style {
    pub fn color(self) -> Option<Color> {
        match self {
            Style::Success => Some(Color::BrightGreen),
            Style::Failure => Some(Color::BrightRed),
            Style::Error => Some(Color::Red),
            Style::Muted => Some(Color::BrightBlack),
            Style::Info => Some(Color::Cyan),
            Style::Warning => Some(Color::Yellow),
            Style::None => None,
        }
    }
}

/// Wrap `text` in the escape codes for `style`
pub fn render(text: impl fmt::Display, style: Style) -> String {
    match style.color() {
        Some(color) => format!("{}{text}{RESET}", color.foreground()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_codes() {
        assert_eq!(Color::BrightGreen.foreground(), "\x1b[92m");
        assert_eq!(Color::Red.background(), "\x1b[41m");
        assert_eq!(Color::BrightWhite.background(), "\x1b[107m");
    }

    #[test]
    fn test_extended_codes() {
        assert_eq!(Color::Extended(208).foreground(), "\x1b[38;5;208m");
        assert_eq!(Color::Extended(17).background(), "\x1b[48;5;17m");
    }

    #[test]
    fn test_render_styles() {
        assert_eq!(render("ok", Style::Success), "\x1b[92mok\x1b[0m");
        assert_eq!(render("a.rs:1", Style::Muted), "\x1b[90ma.rs:1\x1b[0m");
        assert_eq!(render("plain", Style::None), "plain");
    }
}
