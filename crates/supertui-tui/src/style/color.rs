//! Terminal colors and color specifiers
//!
//! A color specifier is one of:
//! - `#rgb` or `#rrggbb`, with or without the leading `#`, any case
//! - a named ANSI color such as `dark-grey`, case-insensitive, where `-`, `_`
//!   and spaces are ignored and `gray` is accepted for `grey`
//! - `ansi:N` for an entry of the 256-color palette
//!
//! `Display` always produces the normalized form: lowercase `#rrggbb`,
//! kebab-case names, or `ansi:N`.

use std::fmt;
use std::str::FromStr;

use crossterm::style::Color as CrosstermColor;

use crate::error::TuiError;

/// Terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// Terminal default
    #[default]
    Reset,
    Black,
    DarkGrey,
    Red,
    DarkRed,
    Green,
    DarkGreen,
    Yellow,
    DarkYellow,
    Blue,
    DarkBlue,
    Magenta,
    DarkMagenta,
    Cyan,
    DarkCyan,
    White,
    Grey,
    /// 24-bit color
    Rgb(u8, u8, u8),
    /// 256-color palette index
    Indexed(u8),
}

const NAMED: &[(&str, Color)] = &[
    ("reset", Color::Reset),
    ("black", Color::Black),
    ("dark-grey", Color::DarkGrey),
    ("red", Color::Red),
    ("dark-red", Color::DarkRed),
    ("green", Color::Green),
    ("dark-green", Color::DarkGreen),
    ("yellow", Color::Yellow),
    ("dark-yellow", Color::DarkYellow),
    ("blue", Color::Blue),
    ("dark-blue", Color::DarkBlue),
    ("magenta", Color::Magenta),
    ("dark-magenta", Color::DarkMagenta),
    ("cyan", Color::Cyan),
    ("dark-cyan", Color::DarkCyan),
    ("white", Color::White),
    ("grey", Color::Grey),
];

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    fn from_name(spec: &str) -> Option<Self> {
        let folded: String = spec
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        let folded = folded.replace("gray", "grey");

        NAMED
            .iter()
            .find(|(name, _)| name.replace('-', "") == folded)
            .map(|&(_, color)| color)
    }

    fn from_hex(spec: &str) -> Option<Self> {
        let hex = spec.strip_prefix('#').unwrap_or(spec);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();

        match hex.len() {
            3 => {
                let mut digits = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Self::Rgb(digits.next()??, digits.next()??, digits.next()??))
            }
            6 => Some(Self::Rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        }
    }

    fn from_ansi(spec: &str) -> Option<Self> {
        let (prefix, index) = spec.split_once(':')?;
        if !prefix.trim().eq_ignore_ascii_case("ansi") {
            return None;
        }
        index.trim().parse::<u8>().ok().map(Self::Indexed)
    }
}

impl FromStr for Color {
    type Err = TuiError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let trimmed = spec.trim();
        if trimmed.is_empty() {
            return Err(TuiError::InvalidColor(spec.to_string()));
        }

        Self::from_name(trimmed)
            .or_else(|| Self::from_ansi(trimmed))
            .or_else(|| Self::from_hex(trimmed))
            .ok_or_else(|| TuiError::InvalidColor(spec.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Color::Indexed(i) => write!(f, "ansi:{i}"),
            named => {
                let name = NAMED
                    .iter()
                    .find(|(_, color)| color == named)
                    .map(|(name, _)| *name)
                    .unwrap_or("reset");
                f.write_str(name)
            }
        }
    }
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => CrosstermColor::Reset,
            Color::Black => CrosstermColor::Black,
            Color::DarkGrey => CrosstermColor::DarkGrey,
            Color::Red => CrosstermColor::Red,
            Color::DarkRed => CrosstermColor::DarkRed,
            Color::Green => CrosstermColor::Green,
            Color::DarkGreen => CrosstermColor::DarkGreen,
            Color::Yellow => CrosstermColor::Yellow,
            Color::DarkYellow => CrosstermColor::DarkYellow,
            Color::Blue => CrosstermColor::Blue,
            Color::DarkBlue => CrosstermColor::DarkBlue,
            Color::Magenta => CrosstermColor::Magenta,
            Color::DarkMagenta => CrosstermColor::DarkMagenta,
            Color::Cyan => CrosstermColor::Cyan,
            Color::DarkCyan => CrosstermColor::DarkCyan,
            Color::White => CrosstermColor::White,
            Color::Grey => CrosstermColor::Grey,
            Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
            Color::Indexed(i) => CrosstermColor::AnsiValue(i),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(spec: &str) -> String {
        spec.parse::<Color>().unwrap().to_string()
    }

    #[test]
    fn hex_specifiers_normalize_to_lowercase_six_digits() {
        assert_eq!(normalized("#FF8800"), "#ff8800");
        assert_eq!(normalized("ff8800"), "#ff8800");
        assert_eq!(normalized("#f80"), "#ff8800");
        assert_eq!(normalized("ABC"), "#aabbcc");
        assert_eq!("#102030".parse::<Color>().unwrap(), Color::Rgb(16, 32, 48));
    }

    #[test]
    fn names_fold_case_separators_and_gray() {
        assert_eq!(normalized("DarkGray"), "dark-grey");
        assert_eq!(normalized("dark_grey"), "dark-grey");
        assert_eq!(normalized("dark grey"), "dark-grey");
        assert_eq!(normalized("CYAN"), "cyan");
        assert_eq!("gray".parse::<Color>().unwrap(), Color::Grey);
    }

    #[test]
    fn ansi_indices() {
        assert_eq!("ansi:208".parse::<Color>().unwrap(), Color::Indexed(208));
        assert_eq!(normalized("ANSI: 42"), "ansi:42");
        assert!("ansi:256".parse::<Color>().is_err());
        assert!("ansi:".parse::<Color>().is_err());
    }

    #[test]
    fn malformed_specifiers_are_rejected() {
        for bad in ["", "   ", "#12", "#12345", "#ggg", "purple-ish", "#1234567"] {
            match bad.parse::<Color>() {
                Err(TuiError::InvalidColor(raw)) => assert_eq!(raw, bad),
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn converts_to_crossterm() {
        assert_eq!(CrosstermColor::from(Color::DarkCyan), CrosstermColor::DarkCyan);
        assert_eq!(
            CrosstermColor::from(Color::Rgb(1, 2, 3)),
            CrosstermColor::Rgb { r: 1, g: 2, b: 3 }
        );
        assert_eq!(CrosstermColor::from(Color::Indexed(9)), CrosstermColor::AnsiValue(9));
    }
}
