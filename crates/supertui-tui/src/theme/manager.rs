//! Owner of the active theme

use tracing::debug;

use super::{Theme, PRESETS};
use crate::error::{Result, TuiError};
use crate::style::Color;

/// Holds the single active [`Theme`].
///
/// Changes build a complete new theme and swap it in, so a failed change
/// leaves the previous theme untouched. Nothing is repainted here; the next
/// render simply reads the new value.
#[derive(Debug, Clone, Default)]
pub struct ThemeManager {
    active: Theme,
}

impl ThemeManager {
    pub fn new(theme: Theme) -> Self {
        Self { active: theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.active
    }

    /// Replace the primary color from a color specifier
    pub fn set_theme(&mut self, spec: &str) -> Result<()> {
        let primary: Color = spec.parse()?;
        let next = Theme {
            primary,
            ..self.active.clone()
        };
        debug!(theme = %next.name, primary = %primary, "primary color changed");
        self.active = next;
        Ok(())
    }

    /// Switch to a built-in theme
    pub fn set_preset(&mut self, name: &str) -> Result<()> {
        let theme = Theme::preset(name).ok_or_else(|| TuiError::UnknownTheme(name.to_string()))?;
        debug!(theme = %theme.name, "theme preset applied");
        self.active = theme;
        Ok(())
    }

    /// Accept either a preset name or a color specifier
    pub fn apply(&mut self, spec: &str) -> Result<()> {
        if Theme::preset(spec).is_some() {
            self.set_preset(spec)
        } else {
            self.set_theme(spec)
        }
    }

    pub fn presets(&self) -> &'static [&'static str] {
        PRESETS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_theme_normalizes_primary() {
        let mut manager = ThemeManager::default();
        for (spec, normalized) in [
            ("#FF8800", "#ff8800"),
            ("0af", "#00aaff"),
            ("Dark_Gray", "dark-grey"),
            ("ansi:99", "ansi:99"),
        ] {
            manager.set_theme(spec).unwrap();
            assert_eq!(manager.theme().primary.to_string(), normalized);
        }
    }

    #[test]
    fn invalid_specifier_leaves_theme_unchanged() {
        let mut manager = ThemeManager::new(Theme::ocean());
        manager.set_theme("#123456").unwrap();
        let before = manager.theme().clone();

        let err = manager.set_theme("not-a-color").unwrap_err();
        assert!(matches!(err, TuiError::InvalidColor(ref s) if s == "not-a-color"));
        assert_eq!(manager.theme(), &before);
    }

    #[test]
    fn set_theme_keeps_palette() {
        let mut manager = ThemeManager::new(Theme::light());
        manager.set_theme("red").unwrap();
        assert_eq!(manager.theme().name, "light");
        assert_eq!(manager.theme().palette, Theme::light().palette);
    }

    #[test]
    fn presets_and_apply() {
        let mut manager = ThemeManager::default();
        manager.set_preset("mono").unwrap();
        assert_eq!(manager.theme(), &Theme::mono());

        assert!(matches!(manager.set_preset("neon"), Err(TuiError::UnknownTheme(_))));
        assert_eq!(manager.theme().name, "mono");

        manager.apply("ocean").unwrap();
        assert_eq!(manager.theme().name, "ocean");
        manager.apply("#abcdef").unwrap();
        assert_eq!(manager.theme().primary, Color::Rgb(0xab, 0xcd, 0xef));
        assert!(matches!(manager.apply("neon"), Err(TuiError::InvalidColor(_))));
        assert_eq!(manager.presets(), PRESETS);
    }
}
