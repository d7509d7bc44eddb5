use std::path::PathBuf;

use clap::{Parser, Subcommand};
use merge2::Merge;
use palette::{Color, DeltaMode, ThemeSources};
use serde::{Deserialize, Serialize};

use crate::swap_option;

#[derive(Debug, Clone, PartialEq, Parser, Serialize, Deserialize, Merge)]
#[clap(author, version)]
pub struct Config {
    /// Path to load config
    #[clap(long, short)]
    #[serde(skip)]
    pub config: Option<PathBuf>,

    #[clap(flatten)]
    #[serde(flatten)]
    pub sources: Sources,

    /// Rebalance accents on an absolute luma margin instead of a signed one
    #[clap(long)]
    #[serde(default)]
    #[merge(strategy = merge2::any::overwrite)]
    pub absolute_accent_delta: bool,

    #[clap(subcommand)]
    #[serde(skip)]
    #[merge(strategy = merge2::any::overwrite)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Parser, Serialize, Deserialize, Merge)]
pub struct Sources {
    /// Primary color of the host theme, support: '#RRGGBBAA', '#RGBA' and '#RGB'
    #[clap(long, short)]
    #[merge(strategy = swap_option)]
    pub primary: Option<Color>,
    /// Dark variant of the primary color
    #[clap(long)]
    #[merge(strategy = swap_option)]
    pub primary_dark: Option<Color>,
    /// Accent color of the host theme
    #[clap(long, short)]
    #[merge(strategy = swap_option)]
    pub accent: Option<Color>,
    /// Dark variant of the accent color
    #[clap(long)]
    #[merge(strategy = swap_option)]
    pub accent_dark: Option<Color>,
}

#[derive(Subcommand, Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Print the resolved palette
    #[default]
    Palette,
    /// Show the derived metrics of a single color
    Inspect {
        /// Color to inspect, support: '#RRGGBBAA', '#RGBA' and '#RGB'
        color: Color,
    },
    /// Write the resolved palette as TOML
    Export {
        /// Destination file, stdout when omitted
        #[clap(long, short)]
        path: Option<PathBuf>,
    },
    /// Render the palette as a PNG swatch sheet
    Swatch {
        /// Destination file
        path: PathBuf,
        /// Sheet width in pixels
        #[clap(long, short, default_value = "840")]
        width: u32,
        /// Sheet height in pixels
        #[clap(long, short = 'a', default_value = "420")]
        height: u32,
        /// Corner radius of the swatches
        #[clap(long, short, default_value = "18")]
        radius: u32,
    },
    /// Write a default config file
    Init,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            primary: Some(palette::DEFAULT_PRIMARY),
            primary_dark: Some(palette::DEFAULT_PRIMARY_DARK),
            accent: Some(palette::DEFAULT_ACCENT),
            accent_dark: Some(palette::DEFAULT_ACCENT_DARK),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config: None,
            sources: Sources::default(),
            absolute_accent_delta: false,
            command: None,
        }
    }
}

impl From<&Config> for ThemeSources {
    fn from(config: &Config) -> Self {
        ThemeSources {
            primary: config.sources.primary,
            primary_dark: config.sources.primary_dark,
            accent: config.sources.accent,
            accent_dark: config.sources.accent_dark,
            accent_delta: if config.absolute_accent_delta {
                DeltaMode::Absolute
            } else {
                DeltaMode::Signed
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let written = toml::to_string_pretty(&Config::default()).unwrap();
        let read: Config = toml::from_str(&written).unwrap();
        assert_eq!(read, Config::default());
    }

    #[test]
    fn bare_invocation_parses() {
        let config = Config::try_parse_from(["tinge"]).unwrap();
        assert_eq!(config.command, None);
        assert_eq!(config.sources.primary, None);
    }

    #[test]
    fn cli_colors_parse_all_hex_forms() {
        let config = Config::try_parse_from([
            "tinge",
            "--primary",
            "#123456",
            "--accent",
            "#f0a8",
            "--primary-dark",
            "#222",
        ])
        .unwrap();
        assert_eq!(config.sources.primary, Some(Color::rgb(0x12, 0x34, 0x56)));
        assert_eq!(
            config.sources.accent,
            Some(Color::argb(0x88, 0xff, 0x00, 0xaa))
        );
        assert_eq!(
            config.sources.primary_dark,
            Some(Color::rgb(0x22, 0x22, 0x22))
        );
    }

    #[test]
    fn cli_rejects_bad_colors() {
        assert!(Config::try_parse_from(["tinge", "--primary", "123456"]).is_err());
    }

    #[test]
    fn cli_args_win_over_file_values() {
        use merge2::Merge;

        let mut file: Config = toml::from_str(
            r##"
            primary = "#112233"
            accent = "#445566"
            "##,
        )
        .unwrap();
        let mut args = Config::try_parse_from(["tinge", "--accent", "#778899", "palette"]).unwrap();

        file.merge(&mut args);
        assert_eq!(file.sources.primary, Some(Color::rgb(0x11, 0x22, 0x33)));
        assert_eq!(file.sources.accent, Some(Color::rgb(0x77, 0x88, 0x99)));
        assert_eq!(file.command, Some(Command::Palette));
    }

    #[test]
    fn theme_sources_carry_the_delta_flag() {
        let mut config = Config::default();
        assert_eq!(ThemeSources::from(&config).accent_delta, DeltaMode::Signed);

        config.absolute_accent_delta = true;
        let sources = ThemeSources::from(&config);
        assert_eq!(sources.accent_delta, DeltaMode::Absolute);
        assert_eq!(sources.primary, Some(palette::DEFAULT_PRIMARY));
    }
}
