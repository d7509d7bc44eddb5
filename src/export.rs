use std::fs;
use std::path::Path;

use palette::{Color, ColorRole, Theme};
use serde::Serialize;

use crate::error::Result;

/// Palette layout written by `tinge export`.
#[derive(Debug, Serialize)]
pub struct PaletteFile {
    pub primary: Color,
    pub primary_dark: Color,
    pub accent: Color,
    pub accent_dark: Color,
    pub tint_primary: Color,
    pub tint_primary_dark: Color,
    pub tint_accent: Color,
    pub tint_accent_dark: Color,
}

impl From<&Theme> for PaletteFile {
    fn from(theme: &Theme) -> Self {
        Self {
            primary: theme.color(ColorRole::Primary),
            primary_dark: theme.color(ColorRole::PrimaryDark),
            accent: theme.color(ColorRole::Accent),
            accent_dark: theme.color(ColorRole::AccentDark),
            tint_primary: theme.color(ColorRole::TintPrimary),
            tint_primary_dark: theme.color(ColorRole::TintPrimaryDark),
            tint_accent: theme.color(ColorRole::TintAccent),
            tint_accent_dark: theme.color(ColorRole::TintAccentDark),
        }
    }
}

/// Serialize the resolved palette as TOML, to a file or stdout.
pub fn export(theme: &Theme, path: Option<&Path>) -> Result<()> {
    let content = toml::to_string_pretty(&PaletteFile::from(theme))?;
    match path {
        Some(path) => fs::write(path, content)?,
        None => print!("{content}"),
    }
    Ok(())
}
