//! Dashboard Theme
//!
//! Turns the `[theme]` section of the config into the `:root` stylesheet the
//! dashboard loads as `/theme.css`. Tailwind resolves `primary`,
//! `primary-light`, `primary-dark` and `font-sans` through these custom
//! properties, so colors are emitted as bare RGB channels to keep opacity
//! modifiers such as `bg-primary/15` working.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::ThemeConfig;

/// Generic CSS font families, emitted without quotes
const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-sans-serif",
    "ui-serif",
    "ui-monospace",
];

/// Theme errors
#[derive(Error, Debug, PartialEq)]
pub enum ThemeError {
    #[error("Invalid color {0:?}: expected #RRGGBB or #RGB")]
    InvalidColor(String),

    #[error("Font family list is empty")]
    EmptyFontFamily,
}

/// An sRGB color parsed from hex notation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Space-separated channels, e.g. `252 76 2`
    pub fn channels(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ThemeError::InvalidColor(s.to_string());

        let digits = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |hex: &str| u8::from_str_radix(hex, 16).map_err(|_| invalid());

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let expand = |i: usize| -> Result<u8, ThemeError> {
                    let d = &digits[i..i + 1];
                    channel(&format!("{d}{d}"))
                };
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Validated theme
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: HexColor,
    pub primary_light: HexColor,
    pub primary_dark: HexColor,
    pub font_sans: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: HexColor::new(0xFC, 0x4C, 0x02),
            primary_light: HexColor::new(0xFF, 0x6A, 0x2A),
            primary_dark: HexColor::new(0xDD, 0x42, 0x00),
            font_sans: vec!["Inter".to_string(), "sans-serif".to_string()],
        }
    }
}

impl Theme {
    /// Validate a theme config section
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ThemeError> {
        let font_sans: Vec<String> = config
            .font_sans
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();

        if font_sans.is_empty() {
            return Err(ThemeError::EmptyFontFamily);
        }

        Ok(Self {
            primary: config.primary.parse()?,
            primary_light: config.primary_light.parse()?,
            primary_dark: config.primary_dark.parse()?,
            font_sans,
        })
    }

    /// CSS `font-family` value for the sans stack
    pub fn font_stack(&self) -> String {
        self.font_sans
            .iter()
            .map(|family| {
                if GENERIC_FAMILIES.contains(&family.to_ascii_lowercase().as_str()) {
                    family.clone()
                } else {
                    format!("\"{}\"", family.replace('"', "\\\""))
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Render the `:root` stylesheet
    pub fn to_css(&self) -> String {
        format!(
            "/* {primary} / {light} / {dark} */\n\
             :root {{\n  \
             --color-primary: {primary_ch};\n  \
             --color-primary-light: {light_ch};\n  \
             --color-primary-dark: {dark_ch};\n  \
             --font-sans: {fonts};\n\
             }}\n",
            primary = self.primary,
            light = self.primary_light,
            dark = self.primary_dark,
            primary_ch = self.primary.channels(),
            light_ch = self.primary_light.channels(),
            dark_ch = self.primary_dark.channels(),
            fonts = self.font_stack(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        let color: HexColor = "#FC4C02".parse().unwrap();
        assert_eq!(color, HexColor::new(252, 76, 2));
        assert_eq!(color.channels(), "252 76 2");
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        let upper: HexColor = "#DD4200".parse().unwrap();
        let lower: HexColor = "#dd4200".parse().unwrap();
        assert_eq!(upper, lower);
        assert_eq!(lower.to_string(), "#DD4200");
    }

    #[test]
    fn test_parse_short_form() {
        let color: HexColor = "#f60".parse().unwrap();
        assert_eq!(color, HexColor::new(0xFF, 0x66, 0x00));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["FC4C02", "#FC4C0", "#GGGGGG", "#", "", "#FC4C02FF", "#ﬀ0"] {
            assert_eq!(
                input.parse::<HexColor>(),
                Err(ThemeError::InvalidColor(input.to_string())),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_default_config_matches_default_theme() {
        let theme = Theme::from_config(&ThemeConfig::default()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_default_css() {
        let css = Theme::default().to_css();
        assert!(css.contains("--color-primary: 252 76 2;"));
        assert!(css.contains("--color-primary-light: 255 106 42;"));
        assert!(css.contains("--color-primary-dark: 221 66 0;"));
        assert!(css.contains("--font-sans: \"Inter\", sans-serif;"));
        assert!(css.starts_with("/* #FC4C02 / #FF6A2A / #DD4200 */"));
    }

    #[test]
    fn test_empty_font_list_rejected() {
        let config = ThemeConfig {
            font_sans: vec!["  ".to_string()],
            ..ThemeConfig::default()
        };
        assert_eq!(Theme::from_config(&config), Err(ThemeError::EmptyFontFamily));
    }

    #[test]
    fn test_font_stack_quotes_named_families_only() {
        let theme = Theme {
            font_sans: vec![
                "Inter var".to_string(),
                "system-ui".to_string(),
                "Sans-Serif".to_string(),
            ],
            ..Theme::default()
        };
        assert_eq!(theme.font_stack(), "\"Inter var\", system-ui, Sans-Serif");
    }
}
