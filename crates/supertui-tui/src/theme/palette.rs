//! Color palettes, themes and the built-in presets

use crate::style::{Color, Modifier, Style};

/// Names accepted by [`Theme::preset`]
pub const PRESETS: &[&str] = &["dark", "light", "ocean", "mono"];

/// Named colors shared by every widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    /// Look a color up by name, e.g. `"text_muted"` or `"text-muted"`
    pub fn get(&self, name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "background" => self.background,
            "surface" => self.surface,
            "text" => self.text,
            "text_muted" => self.text_muted,
            "border" => self.border,
            "success" => self.success,
            "warning" => self.warning,
            "error" => self.error,
            _ => return None,
        };
        Some(color)
    }
}

/// The look of the whole shell.
///
/// Widgets never store colors; they derive styles from the theme they are
/// handed at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub primary: Color,
    pub accent: Color,
    pub palette: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark".into(),
            primary: Color::Cyan,
            accent: Color::Yellow,
            palette: Palette {
                background: Color::Reset,
                surface: Color::DarkGrey,
                text: Color::White,
                text_muted: Color::Grey,
                border: Color::DarkGrey,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light".into(),
            primary: Color::DarkBlue,
            accent: Color::DarkMagenta,
            palette: Palette {
                background: Color::White,
                surface: Color::Grey,
                text: Color::Black,
                text_muted: Color::DarkGrey,
                border: Color::DarkGrey,
                success: Color::DarkGreen,
                warning: Color::DarkYellow,
                error: Color::DarkRed,
            },
        }
    }

    pub fn ocean() -> Self {
        Self {
            name: "ocean".into(),
            primary: Color::rgb(0x4f, 0xc1, 0xe9),
            accent: Color::rgb(0xff, 0xce, 0x54),
            palette: Palette {
                background: Color::rgb(0x0b, 0x1d, 0x2e),
                surface: Color::rgb(0x16, 0x30, 0x4a),
                text: Color::rgb(0xe6, 0xf1, 0xff),
                text_muted: Color::rgb(0x8a, 0xa4, 0xc0),
                border: Color::rgb(0x2e, 0x50, 0x73),
                success: Color::rgb(0x8c, 0xc1, 0x52),
                warning: Color::rgb(0xf6, 0xbb, 0x42),
                error: Color::rgb(0xed, 0x55, 0x65),
            },
        }
    }

    pub fn mono() -> Self {
        Self {
            name: "mono".into(),
            primary: Color::White,
            accent: Color::Grey,
            palette: Palette {
                background: Color::Black,
                surface: Color::Indexed(236),
                text: Color::Grey,
                text_muted: Color::DarkGrey,
                border: Color::DarkGrey,
                success: Color::White,
                warning: Color::White,
                error: Color::White,
            },
        }
    }

    /// Built-in theme by case-insensitive name
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            "ocean" => Some(Self::ocean()),
            "mono" => Some(Self::mono()),
            _ => None,
        }
    }

    /// Plain text on the background
    pub fn base_style(&self) -> Style {
        Style::new().fg(self.palette.text).bg(self.palette.background)
    }

    pub fn muted_style(&self) -> Style {
        self.base_style().fg(self.palette.text_muted)
    }

    /// Bars and strips drawn on the raised surface color
    pub fn surface_style(&self) -> Style {
        Style::new().fg(self.palette.text).bg(self.palette.surface)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        let fg = if focused { self.primary } else { self.palette.border };
        self.base_style().fg(fg)
    }

    pub fn title_style(&self) -> Style {
        self.base_style().fg(self.primary).bold()
    }

    pub fn selection_style(&self) -> Style {
        self.base_style().fg(self.primary).reversed()
    }

    /// Mnemonic letters and shortcut keys
    pub fn accent_style(&self) -> Style {
        self.surface_style()
            .fg(self.accent)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn error_style(&self) -> Style {
        self.surface_style().fg(self.palette.error).bold()
    }

    pub fn success_style(&self) -> Style {
        self.surface_style().fg(self.palette.success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_preset_exists() {
        for name in PRESETS {
            let theme = Theme::preset(name).unwrap();
            assert_eq!(theme.name, *name);
        }
        assert_eq!(Theme::preset(" Ocean ").unwrap().name, "ocean");
        assert!(Theme::preset("solarized").is_none());
    }

    #[test]
    fn palette_lookup_by_name() {
        let palette = Theme::dark().palette;
        assert_eq!(palette.get("text"), Some(Color::White));
        assert_eq!(palette.get("text-muted"), Some(Color::Grey));
        assert_eq!(palette.get("TEXT_MUTED"), Some(Color::Grey));
        assert_eq!(palette.get("chartreuse"), None);
    }

    #[test]
    fn styles_follow_primary() {
        let mut theme = Theme::light();
        theme.primary = Color::Magenta;
        assert_eq!(theme.border_style(true).fg, Color::Magenta);
        assert_eq!(theme.border_style(false).fg, theme.palette.border);
        assert_eq!(theme.title_style().fg, Color::Magenta);
        assert_eq!(theme.base_style().bg, Color::White);
    }
}
