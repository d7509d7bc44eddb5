use std::fmt;

use crate::dynamic::{self, DeltaMode};
use crate::Color;

/// Fallback palette, used for sources the host theme leaves unset.
pub const DEFAULT_PRIMARY: Color = Color::rgb(0x3f, 0x51, 0xb5);
pub const DEFAULT_PRIMARY_DARK: Color = Color::rgb(0x30, 0x3f, 0x9f);
pub const DEFAULT_ACCENT: Color = Color::rgb(0xe9, 0x1e, 0x63);
pub const DEFAULT_ACCENT_DARK: Color = Color::rgb(0xc2, 0x18, 0x5b);

/// Which themed color to fetch from a [`Theme`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Primary,
    PrimaryDark,
    Accent,
    AccentDark,
    TintPrimary,
    TintPrimaryDark,
    TintAccent,
    TintAccentDark,
}

impl ColorRole {
    /// Every role, light colors first, in presentation order.
    pub const ALL: [ColorRole; 8] = [
        ColorRole::Primary,
        ColorRole::Accent,
        ColorRole::TintPrimary,
        ColorRole::TintAccent,
        ColorRole::PrimaryDark,
        ColorRole::AccentDark,
        ColorRole::TintPrimaryDark,
        ColorRole::TintAccentDark,
    ];
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            ColorRole::Primary => "primary",
            ColorRole::PrimaryDark => "primary-dark",
            ColorRole::Accent => "accent",
            ColorRole::AccentDark => "accent-dark",
            ColorRole::TintPrimary => "tint-primary",
            ColorRole::TintPrimaryDark => "tint-primary-dark",
            ColorRole::TintAccent => "tint-accent",
            ColorRole::TintAccentDark => "tint-accent-dark",
        })
    }
}

/// Base colors handed in by whoever owns the host theme.
///
/// `None` and pure white both mean "the host had nothing usable there";
/// either way the matching default takes over.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ThemeSources {
    pub primary: Option<Color>,
    pub primary_dark: Option<Color>,
    pub accent: Option<Color>,
    pub accent_dark: Option<Color>,
    pub accent_delta: DeltaMode,
}

/// A resolved theme palette: four base colors plus the tint derived from
/// each.
///
/// Built once when the application starts and passed by reference to
/// whatever consumes it; the value never changes afterward.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    primary: Color,
    primary_dark: Color,
    accent: Color,
    accent_dark: Color,
    tint_primary: Color,
    tint_primary_dark: Color,
    tint_accent: Color,
    tint_accent_dark: Color,
    accent_delta: DeltaMode,
}

impl Theme {
    pub fn new(sources: ThemeSources) -> Self {
        let primary = resolve(sources.primary, DEFAULT_PRIMARY);
        let primary_dark = resolve(sources.primary_dark, DEFAULT_PRIMARY_DARK);
        let accent = resolve(sources.accent, DEFAULT_ACCENT);
        let accent_dark = resolve(sources.accent_dark, DEFAULT_ACCENT_DARK);

        Self {
            primary,
            primary_dark,
            accent,
            accent_dark,
            tint_primary: dynamic::tint(primary),
            tint_primary_dark: dynamic::tint(primary_dark),
            tint_accent: dynamic::tint(accent),
            tint_accent_dark: dynamic::tint(accent_dark),
            accent_delta: sources.accent_delta,
        }
    }

    /// The color filling the given role.
    pub fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Primary => self.primary,
            ColorRole::PrimaryDark => self.primary_dark,
            ColorRole::Accent => self.accent,
            ColorRole::AccentDark => self.accent_dark,
            ColorRole::TintPrimary => self.tint_primary,
            ColorRole::TintPrimaryDark => self.tint_primary_dark,
            ColorRole::TintAccent => self.tint_accent,
            ColorRole::TintAccentDark => self.tint_accent_dark,
        }
    }

    /// All eight colors in [`ColorRole::ALL`] order.
    pub fn all_colors(&self) -> [Color; 8] {
        ColorRole::ALL.map(|role| self.color(role))
    }

    /// The light half of the palette.
    pub fn light_colors(&self) -> [Color; 4] {
        [
            self.primary,
            self.accent,
            self.tint_primary,
            self.tint_accent,
        ]
    }

    /// The dark half of the palette.
    pub fn dark_colors(&self) -> [Color; 4] {
        [
            self.primary_dark,
            self.accent_dark,
            self.tint_primary_dark,
            self.tint_accent_dark,
        ]
    }

    /// `color`, retinted if it would not read over the primary color.
    pub fn readable(&self, color: Color) -> Color {
        dynamic::contrast_color(color, self.primary)
    }

    /// An accent derived from the primary color, for hosts that offer no
    /// accent of their own.
    pub fn suggested_accent(&self) -> Color {
        dynamic::accent_with(self.primary, self.accent_delta)
    }

    pub fn accent_delta(&self) -> DeltaMode {
        self.accent_delta
    }
}

impl From<ThemeSources> for Theme {
    fn from(sources: ThemeSources) -> Self {
        Self::new(sources)
    }
}

fn resolve(source: Option<Color>, fallback: Color) -> Color {
    match source {
        // A host theme with no usable value reports pure white.
        Some(color) if color != Color::WHITE => color,
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::tint;

    #[test]
    fn empty_sources_resolve_to_defaults() {
        let theme = Theme::new(ThemeSources::default());
        assert_eq!(theme.color(ColorRole::Primary), DEFAULT_PRIMARY);
        assert_eq!(theme.color(ColorRole::PrimaryDark), DEFAULT_PRIMARY_DARK);
        assert_eq!(theme.color(ColorRole::Accent), DEFAULT_ACCENT);
        assert_eq!(theme.color(ColorRole::AccentDark), DEFAULT_ACCENT_DARK);
    }

    #[test]
    fn white_sources_resolve_to_defaults() {
        let theme = Theme::new(ThemeSources {
            primary: Some(Color::WHITE),
            ..Default::default()
        });
        assert_eq!(theme.color(ColorRole::Primary), DEFAULT_PRIMARY);
    }

    #[test]
    fn explicit_sources_win() {
        let navy = Color::rgb(0x10, 0x20, 0x40);
        let theme = Theme::new(ThemeSources {
            primary: Some(navy),
            ..Default::default()
        });
        assert_eq!(theme.color(ColorRole::Primary), navy);
        assert_eq!(theme.color(ColorRole::TintPrimary), tint(navy));
    }

    #[test]
    fn tints_track_their_base_colors() {
        let theme = Theme::new(ThemeSources::default());
        assert_eq!(
            theme.color(ColorRole::TintAccent),
            tint(theme.color(ColorRole::Accent))
        );
        assert_eq!(
            theme.color(ColorRole::TintPrimaryDark),
            tint(theme.color(ColorRole::PrimaryDark))
        );
    }

    #[test]
    fn color_arrays_keep_presentation_order() {
        let theme = Theme::new(ThemeSources::default());
        let all = theme.all_colors();
        assert_eq!(all[..4], theme.light_colors());
        assert_eq!(all[4..], theme.dark_colors());
        assert_eq!(all[0], theme.color(ColorRole::Primary));
        assert_eq!(all[7], theme.color(ColorRole::TintAccentDark));
    }

    #[test]
    fn readable_passes_contrasting_colors_through() {
        let theme = Theme::new(ThemeSources::default());
        assert_eq!(theme.readable(Color::WHITE), Color::WHITE);
    }

    #[test]
    fn readable_tints_the_primary_against_itself() {
        let theme = Theme::new(ThemeSources::default());
        assert_eq!(theme.readable(DEFAULT_PRIMARY), tint(DEFAULT_PRIMARY));
    }

    #[test]
    fn suggested_accent_derives_from_the_primary() {
        let theme = Theme::new(ThemeSources::default());
        // First accent pass on #3f51b5 already spreads far enough.
        assert_eq!(theme.suggested_accent(), Color::rgb(0xe0, 0x50, 0x6a));
    }
}
