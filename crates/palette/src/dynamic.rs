//! Color derivations for dynamic theming: readable tints, accent
//! companions and contrast checks.
//!
//! Everything here is a pure function over [`Color`] values, safe to call
//! from any thread. The weights and margins were tuned together against
//! real device themes; none of them can change without reshaping every
//! derived palette.

use crate::Color;

/// Result of [`darkness`] at or above which a color counts as dark.
pub const DARK_THRESHOLD: f64 = 0.5;

/// Minimum [`contrast`] for one color to stay readable over another.
pub const CONTRAST_THRESHOLD: f64 = 0.3;

// The two perceptual weightings, kept as integer sums so threshold
// comparisons are exact. `ntsc_sum` is scaled by 255_000 relative to the
// [0,1] darkness scale, `xyz_sum` by 2_550_000 relative to the [0,1] luma
// scale. darkness() drives the dark/light branches, luma() drives contrast
// checks; the margins below are tuned per weighting and the two are not
// interchangeable.
fn ntsc_sum(color: Color) -> i64 {
    299 * i64::from(color.red()) + 587 * i64::from(color.green()) + 114 * i64::from(color.blue())
}

fn xyz_sum(color: Color) -> i64 {
    2126 * i64::from(color.red()) + 7152 * i64::from(color.green()) + 722 * i64::from(color.blue())
}

// Darkness bucket bounds in ntsc_sum scale (sum = 255_000 * (1 - darkness)).
const DARK_SPLIT: i64 = 127_500; // darkness 0.5
const DARK_MID: i64 = 102_000; // darkness 0.6
const DARK_DEEP: i64 = 89_250; // darkness 0.65
const LIGHT_MID: i64 = 153_000; // darkness 0.4
const LIGHT_BRIGHT: i64 = 178_500; // darkness 0.3

// Luma difference of 0.3 in xyz_sum scale.
const CONTRAST_SPLIT: i64 = 765_000;

// Blend strengths in tenths, per darkness bucket.
const WHITEN_NEAR: u32 = 9; // darkness [0.5, 0.6)
const WHITEN_MID: u32 = 8; // darkness [0.6, 0.65)
const WHITEN_FAR: u32 = 7; // darkness [0.65, 1]
const DARKEN_NEAR: u32 = 4; // darkness [0.4, 0.5)
const DARKEN_MID: u32 = 5; // darkness [0.3, 0.4)
const DARKEN_FAR: u32 = 6; // darkness [0, 0.3)

// Alpha boost applied on the light branch, in hundredths.
const ALPHA_BOOST: u32 = 133;

// Flat replacement grays used when a blend stays unreadable.
const FLAT_OVER_DARK: u8 = 225;
const FLAT_OVER_LIGHT: u8 = 25;

// Accent channel masks and rebalancing margins.
const FLIP_MASK: i32 = 0x55;
const KEEP_MASK: i32 = 0xFA;
const BRIGHTNESS_MARGIN: i32 = 50;
const SPREAD_MARGIN: i32 = 200;

/// Perceptual darkness of a color in `[0, 1]`: 0 for white, 1 for black.
///
/// Uses the NTSC weighting `1 - (0.299 R + 0.587 G + 0.114 B) / 255`.
/// Alpha is ignored.
pub fn darkness(color: Color) -> f64 {
    1.0 - ntsc_sum(color) as f64 / 255_000.0
}

/// Whether a color counts as dark, i.e. its [`darkness`] is at least
/// [`DARK_THRESHOLD`]. A color sitting exactly on the threshold is dark.
pub fn is_dark(color: Color) -> bool {
    ntsc_sum(color) <= DARK_SPLIT
}

/// XYZ-weighted luma of a color in `[0, 1]`:
/// `(0.2126 R + 0.7152 G + 0.0722 B) / 255`. Alpha is ignored.
pub fn luma(color: Color) -> f64 {
    xyz_sum(color) as f64 / 2_550_000.0
}

/// Absolute [`luma`] difference of two colors, in `[0, 1]`. Symmetric.
pub fn contrast(a: Color, b: Color) -> f64 {
    (xyz_sum(a) - xyz_sum(b)).abs() as f64 / 2_550_000.0
}

/// Readable companion of a color, blended stepwise toward white for dark
/// inputs and toward black for light ones.
///
/// Alpha passes through unchanged on the dark branch and gets boosted by
/// a third (capped at opaque) on the light branch. A blend that still
/// lands within [`CONTRAST_THRESHOLD`] of its source is replaced by a
/// flat gray from the far end of the scale, keeping the source alpha.
pub fn tint(color: Color) -> Color {
    let sum = ntsc_sum(color);
    let a = color.alpha();
    let dark = sum <= DARK_SPLIT;

    let blended = if dark {
        let tenths = if sum > DARK_MID {
            WHITEN_NEAR
        } else if sum > DARK_DEEP {
            WHITEN_MID
        } else {
            WHITEN_FAR
        };
        Color::argb(
            a,
            toward_white(color.red(), tenths),
            toward_white(color.green(), tenths),
            toward_white(color.blue(), tenths),
        )
    } else {
        let tenths = if sum <= LIGHT_MID {
            DARKEN_NEAR
        } else if sum <= LIGHT_BRIGHT {
            DARKEN_MID
        } else {
            DARKEN_FAR
        };
        Color::argb(
            boost_alpha(a),
            toward_black(color.red(), tenths),
            toward_black(color.green(), tenths),
            toward_black(color.blue(), tenths),
        )
    };

    if (xyz_sum(color) - xyz_sum(blended)).abs() < CONTRAST_SPLIT {
        let flat = if dark { FLAT_OVER_DARK } else { FLAT_OVER_LIGHT };
        return Color::argb(a, flat, flat, flat);
    }
    blended
}

/// Luma-margin rule used by [`accent_with`] when deciding whether the
/// first-pass candidate sits too close to its base.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DeltaMode {
    /// Signed margin: a candidate much brighter than the base always
    /// passes. Matches the historical palette output exactly.
    #[default]
    Signed,
    /// Absolute margin, rebalancing in both directions.
    Absolute,
}

/// Heuristic companion color for a base color. Best effort: visually
/// distinct for most inputs, not guaranteed pleasant for all of them.
pub fn accent(color: Color) -> Color {
    accent_with(color, DeltaMode::Signed)
}

/// [`accent`] with an explicit [`DeltaMode`] for the rebalancing pass.
pub fn accent_with(color: Color, delta: DeltaMode) -> Color {
    let (r, g, b) = (
        i32::from(color.red()),
        i32::from(color.green()),
        i32::from(color.blue()),
    );

    let mut rc = b ^ FLIP_MASK;
    let mut gc = g & KEEP_MASK;
    let mut bc = r ^ FLIP_MASK;

    let base = brightness(r, g, b);
    let candidate = brightness(rc, gc, bc);
    let spread = (r - rc).abs() + (g - gc).abs() + (b - bc).abs();

    let close = match delta {
        DeltaMode::Signed => base - candidate <= BRIGHTNESS_MARGIN,
        DeltaMode::Absolute => (base - candidate).abs() <= BRIGHTNESS_MARGIN,
    };

    // A candidate that tracks its base too closely gets pushed further out.
    if close && spread <= SPREAD_MARGIN {
        rc = b ^ KEEP_MASK;
        gc = g & FLIP_MASK;
        bc = r ^ FLIP_MASK;
    }

    Color::argb(color.alpha(), rc as u8, gc as u8, bc as u8)
}

/// `color` if it is already readable over `background`, otherwise its
/// [`tint`].
pub fn contrast_color(color: Color, background: Color) -> Color {
    if (xyz_sum(background) - xyz_sum(color)).abs() < CONTRAST_SPLIT {
        tint(color)
    } else {
        color
    }
}

// ch + t * (255 - ch) with t in tenths, rounding half up.
fn toward_white(ch: u8, tenths: u32) -> u8 {
    let ch = u32::from(ch);
    ((ch * 10 + tenths * (255 - ch) + 5) / 10) as u8
}

// ch * t with t in tenths, rounding half up.
fn toward_black(ch: u8, tenths: u32) -> u8 {
    ((u32::from(ch) * tenths + 5) / 10) as u8
}

// min(255, 1.33 * a), rounding half up.
fn boost_alpha(a: u8) -> u8 {
    ((u32::from(a) * ALPHA_BOOST + 50) / 100).min(255) as u8
}

// NTSC brightness on the 0-255 channel scale, truncating.
fn brightness(r: i32, g: i32, b: i32) -> i32 {
    (299 * r + 587 * g + 114 * b) / 1000
}
