// Light/dark display mode and the palette derived from it
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    #[default]
    Dark,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Dark,
            DisplayMode::Dark => DisplayMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        let (background, paper, text, text_secondary) = match self {
            DisplayMode::Dark => ("#121212", "#1e1e1e", "#ffffff", "rgba(255, 255, 255, 0.7)"),
            DisplayMode::Light => ("#ffffff", "#ffffff", "rgba(0, 0, 0, 0.87)", "rgba(0, 0, 0, 0.6)"),
        };
        Palette {
            mode: self,
            primary: PRIMARY_COLOR,
            secondary: SECONDARY_COLOR,
            background,
            paper,
            text,
            text_secondary,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Light => f.write_str("light"),
            DisplayMode::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(DisplayMode::Light),
            "dark" => Ok(DisplayMode::Dark),
            other => Err(format!("unknown display mode '{}'", other)),
        }
    }
}

pub const PRIMARY_COLOR: &str = "#00b4d8";
pub const SECONDARY_COLOR: &str = "#f72585";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub mode: DisplayMode,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub paper: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(DisplayMode::Dark.toggled(), DisplayMode::Light);
        assert_eq!(DisplayMode::Dark.toggled().toggled(), DisplayMode::Dark);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("Light".parse::<DisplayMode>(), Ok(DisplayMode::Light));
        assert_eq!(" dark ".parse::<DisplayMode>(), Ok(DisplayMode::Dark));
        assert!("sepia".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_palette_keeps_brand_colors_in_both_modes() {
        let light = DisplayMode::Light.palette();
        let dark = DisplayMode::Dark.palette();
        assert_eq!(light.primary, dark.primary);
        assert_ne!(light.background, dark.background);
    }
}
