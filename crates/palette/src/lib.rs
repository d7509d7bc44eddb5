//! Color math for dynamic widget theming: packed ARGB colors, readable
//! tint and accent derivation, and a resolved theme palette.

mod color;
mod dynamic;
mod theme;

pub use color::{Color, ParseColorError};
pub use dynamic::{
    accent, accent_with, contrast, contrast_color, darkness, is_dark, luma, tint, DeltaMode,
    CONTRAST_THRESHOLD, DARK_THRESHOLD,
};
pub use theme::{
    ColorRole, Theme, ThemeSources, DEFAULT_ACCENT, DEFAULT_ACCENT_DARK, DEFAULT_PRIMARY,
    DEFAULT_PRIMARY_DARK,
};
