//! Theme configuration and colors.
//!
//! РыбаКоп ships a dark and a light scheme. Base palettes come from the
//! `ratatui-themes` crate; every panel derives its colors from
//! [`ThemeColors`] on each draw, so a toggle shows up everywhere at once.

use ratatui::style::{Color, Modifier, Style};
use ratatui_themes::{ThemeName, ThemePalette};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Theme {
    /// Dark background with cyan accents
    #[default]
    Dark,
    /// Light background with blue accents
    Light,
}

impl Theme {
    /// Both schemes, dark first
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Dark, Self::Light]
    }

    /// The other scheme
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dark => "Тёмная",
            Self::Light => "Светлая",
        }
    }

    /// Icon of the toggle button (shows the scheme you would switch to)
    #[must_use]
    pub const fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Dark => "☀",
            Self::Light => "☾",
        }
    }

    /// Config file identifier
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Parse a config or command-line identifier
    pub fn from_slug(s: &str) -> Result<Self, ParseError> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }

    /// Base palette from ratatui-themes
    #[must_use]
    pub const fn inner(&self) -> ThemeName {
        match self {
            Self::Dark => ThemeName::Dracula,
            Self::Light => ThemeName::CatppuccinLatte,
        }
    }

    /// Get the raw color palette for this theme.
    #[must_use]
    pub const fn palette(&self) -> ThemePalette {
        self.inner().palette()
    }

    /// Get the color palette for this theme
    #[must_use]
    pub fn colors(&self) -> ThemeColors {
        let colors = ThemeColors::from_palette(self.palette());
        match self {
            Self::Dark => colors.with_accents(
                Color::Rgb(34, 211, 238), // cyan-400
                Color::Rgb(236, 72, 153), // pink-500
            ),
            Self::Light => colors.with_accents(
                Color::Rgb(37, 99, 235),  // blue-600
                Color::Rgb(96, 165, 250), // blue-400
            ),
        }
    }
}

impl TryFrom<String> for Theme {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::from_slug(&s)
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Extended color palette for UI elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    /// Primary background color
    pub bg: Color,
    /// Card/panel background
    pub bg_card: Color,
    /// Input field background
    pub bg_input: Color,
    /// Primary foreground/text color
    pub fg: Color,
    /// Dimmed text color
    pub fg_dim: Color,
    /// Muted text color (lowest contrast)
    pub fg_muted: Color,

    /// Primary accent color
    pub primary: Color,
    /// Secondary accent color
    pub secondary: Color,
    /// Avatar/badge accent
    pub accent: Color,

    /// Success state color (green)
    pub success: Color,
    /// Warning state color
    pub warning: Color,
    /// Error state color (red)
    pub error: Color,

    /// Border color (unfocused)
    pub border: Color,
    /// Border color (focused)
    pub border_focus: Color,
    /// Selection/highlight background
    pub selection: Color,
}

impl ThemeColors {
    /// Create `ThemeColors` from a `ThemePalette`
    #[must_use]
    pub fn from_palette(p: ThemePalette) -> Self {
        // Cards sit slightly off the background: lighter on dark, darker on light
        let step = if Self::is_light(p.bg) { -8 } else { 10 };

        Self {
            bg: p.bg,
            bg_card: Self::adjust_brightness(p.bg, step),
            bg_input: Self::adjust_brightness(p.bg, step * 2),
            fg: p.fg,
            fg_dim: p.muted,
            fg_muted: p.muted,

            primary: p.accent,
            secondary: p.secondary,
            accent: p.secondary,

            success: p.success,
            warning: p.warning,
            error: p.error,

            border: p.muted,
            border_focus: p.accent,
            selection: p.selection,
        }
    }

    /// Replace the accent colors, keeping the base palette
    #[must_use]
    pub const fn with_accents(mut self, primary: Color, accent: Color) -> Self {
        self.primary = primary;
        self.border_focus = primary;
        self.accent = accent;
        self
    }

    fn is_light(color: Color) -> bool {
        match color {
            Color::Rgb(r, g, b) => u16::from(r) + u16::from(g) + u16::from(b) > 3 * 128,
            Color::White | Color::Gray => true,
            _ => false,
        }
    }

    /// Adjust color brightness
    fn adjust_brightness(color: Color, amount: i16) -> Color {
        if let Color::Rgb(r, g, b) = color {
            let adjust = |c: u8| -> u8 {
                if amount > 0 {
                    c.saturating_add(amount as u8)
                } else {
                    c.saturating_sub((-amount) as u8)
                }
            };
            Color::Rgb(adjust(r), adjust(g), adjust(b))
        } else {
            color
        }
    }

    // Style helpers

    /// Default text style
    #[must_use]
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg)
    }

    /// Bold text style (names, headings)
    #[must_use]
    pub fn text_bold(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Dimmed text style
    #[must_use]
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.fg_dim)
    }

    /// Muted text style
    #[must_use]
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Primary accent style
    #[must_use]
    pub fn text_primary(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Accent style (avatars, badges)
    #[must_use]
    pub fn text_accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Success style
    #[must_use]
    pub fn text_success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Warning style
    #[must_use]
    pub fn text_warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Error style
    #[must_use]
    pub fn text_error(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Tag chip style
    #[must_use]
    pub fn tag(&self) -> Style {
        Style::default().fg(self.primary).bg(self.selection)
    }

    /// Card background
    #[must_use]
    pub fn card(&self) -> Style {
        Style::default().bg(self.bg_card)
    }

    /// Input field style
    #[must_use]
    pub fn input(&self) -> Style {
        Style::default().bg(self.bg_input).fg(self.fg)
    }

    /// Block border style
    #[must_use]
    pub fn block(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Focused block border style
    #[must_use]
    pub fn block_focus(&self) -> Style {
        Style::default().fg(self.border_focus)
    }

    /// Selected item style
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.selection)
            .fg(self.fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Tab style
    #[must_use]
    pub fn tab(&self) -> Style {
        Style::default().fg(self.fg_muted)
    }

    /// Active tab style
    #[must_use]
    pub fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Key hint style (for shortcuts)
    #[must_use]
    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Logo style
    #[must_use]
    pub fn logo(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        for theme in Theme::all() {
            assert_eq!(theme.toggled().toggled(), *theme);
            assert_ne!(theme.toggled(), *theme);
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.colors(), Theme::Light.colors());
        assert_ne!(Theme::Dark.colors().bg, Theme::Light.colors().bg);
    }

    #[test]
    fn test_colors_built_from_base_palette() {
        for theme in Theme::all() {
            let palette = theme.palette();
            let colors = theme.colors();
            assert_eq!(colors.bg, palette.bg);
            assert_eq!(colors.fg, palette.fg);
            assert_eq!(colors.error, palette.error);
            assert_eq!(colors.border_focus, colors.primary);
        }
        assert_eq!(Theme::Dark.colors().primary, Color::Rgb(34, 211, 238));
    }

    #[test]
    fn test_card_background_steps_toward_contrast() {
        let dark = ThemeColors::from_palette(Theme::Dark.palette());
        let light = ThemeColors::from_palette(Theme::Light.palette());
        assert!(ThemeColors::is_light(light.bg));
        assert!(!ThemeColors::is_light(dark.bg));
        assert_ne!(light.bg_card, light.bg);
    }

    #[test]
    fn test_serde_uses_slug() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }
        let parsed: Wrapper = toml::from_str("theme = \"Light\"").unwrap();
        assert_eq!(parsed.theme, Theme::Light);
        assert!(toml::from_str::<Wrapper>("theme = \"dracula\"").is_err());
    }

    #[test]
    fn test_slug_roundtrip() {
        assert_eq!(Theme::from_slug("Light"), Ok(Theme::Light));
        assert_eq!(Theme::from_slug(Theme::Dark.slug()), Ok(Theme::Dark));
        assert_eq!(
            Theme::from_slug("dracula"),
            Err(ParseError::UnknownTheme("dracula".to_string()))
        );
    }
}
