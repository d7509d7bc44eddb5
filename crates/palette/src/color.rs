use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Packed 32-bit color, `0xAARRGGBB` layout.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xff, r, g, b)
    }

    pub const fn from_u32(packed: u32) -> Self {
        Self(packed)
    }

    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self::argb(alpha, self.red(), self.green(), self.blue())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseColorError {
    Empty,
    MissingHash,
    BadDigit(ParseIntError),
    BadLength(usize),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseColorError::Empty => write!(f, "Cannot parse an empty string"),
            ParseColorError::MissingHash => write!(f, "The color string must start with #"),
            ParseColorError::BadDigit(e) => write!(f, "Invalid hex value: {}", e),
            ParseColorError::BadLength(len) => {
                write!(f, "Invalid length {} for a color string", len)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::BadDigit(err)
    }
}

/// Parse hex color (#RGB, #RGBA, #RRGGBB or #RRGGBBAA)
impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseColorError::Empty);
        }
        let Some(hex) = s.strip_prefix('#') else {
            return Err(ParseColorError::MissingHash);
        };
        let mut color = u32::from_str_radix(hex, 16)?;

        match s.len() {
            // RGB or RGBA, one nibble per channel
            4 | 5 => {
                let a = if s.len() == 5 {
                    let alpha = (color & 0xf) as u8;
                    color >>= 4;
                    alpha * 0x11
                } else {
                    0xff
                };

                let r = ((color >> 8) & 0xf) as u8 * 0x11;
                let g = ((color >> 4) & 0xf) as u8 * 0x11;
                let b = (color & 0xf) as u8 * 0x11;

                Ok(Color::argb(a, r, g, b))
            }
            // RRGGBB or RRGGBBAA
            7 | 9 => {
                let alpha = if s.len() == 9 {
                    let alpha = (color & 0xff) as u8;
                    color >>= 8;
                    alpha
                } else {
                    0xff
                };

                Ok(Color::argb(
                    alpha,
                    (color >> 16) as u8,
                    (color >> 8) as u8,
                    color as u8,
                ))
            }
            len => Err(ParseColorError::BadLength(len)),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = if self.alpha() == 0xff {
            format!("#{:02x}{:02x}{:02x}", self.red(), self.green(), self.blue())
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.red(),
                self.green(),
                self.blue(),
                self.alpha()
            )
        };
        f.pad(&s)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_and_unpacks_channels() {
        let c = Color::argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_u32(), 0x12345678);
        assert_eq!(
            (c.alpha(), c.red(), c.green(), c.blue()),
            (0x12, 0x34, 0x56, 0x78)
        );
        assert_eq!(Color::from_u32(0x12345678), c);
    }

    #[test]
    fn rgb_is_opaque() {
        assert_eq!(Color::rgb(1, 2, 3).alpha(), 0xff);
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let c = Color::rgb(10, 20, 30).with_alpha(40);
        assert_eq!(c, Color::argb(40, 10, 20, 30));
    }

    #[test]
    fn parses_long_forms() {
        assert_eq!("#3f51b5".parse(), Ok(Color::rgb(0x3f, 0x51, 0xb5)));
        assert_eq!(
            "#3f51b580".parse(),
            Ok(Color::argb(0x80, 0x3f, 0x51, 0xb5))
        );
    }

    #[test]
    fn parses_short_forms() {
        assert_eq!("#fff".parse(), Ok(Color::WHITE));
        assert_eq!("#f00".parse(), Ok(Color::rgb(0xff, 0, 0)));
        assert_eq!("#f008".parse(), Ok(Color::argb(0x88, 0xff, 0, 0)));
    }

    #[test]
    fn rejects_malformed_strings() {
        assert_eq!(Color::from_str(""), Err(ParseColorError::Empty));
        assert_eq!(Color::from_str("3f51b5"), Err(ParseColorError::MissingHash));
        assert_eq!(Color::from_str("#3f51b"), Err(ParseColorError::BadLength(6)));
        assert!(matches!(
            Color::from_str("#zzz"),
            Err(ParseColorError::BadDigit(_))
        ));
    }

    #[test]
    fn displays_shortest_exact_form() {
        assert_eq!(Color::rgb(0x3f, 0x51, 0xb5).to_string(), "#3f51b5");
        assert_eq!(
            Color::argb(0x80, 0x3f, 0x51, 0xb5).to_string(),
            "#3f51b580"
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for c in [
            Color::WHITE,
            Color::BLACK,
            Color::argb(3, 1, 4, 1),
            Color::rgb(0xe9, 0x1e, 0x63),
        ] {
            assert_eq!(c.to_string().parse(), Ok(c));
        }
    }
}
