//! Style catalog and configuration
//!
//! The catalog is static data: six color presets and six font families.
//! [`StyleConfig`] holds the active selection. Every setter is total —
//! out-of-range values are clamped silently, never rejected — so a
//! configuration is valid by construction and preset lookup cannot fail.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A named pair of accent colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPreset {
    pub name: &'static str,
    /// Hex color used for headings and accents
    pub primary: &'static str,
    pub secondary: &'static str,
}

/// The fixed color catalog, in display order
pub const COLOR_PRESETS: [ColorPreset; 6] = [
    ColorPreset { name: "Indigo", primary: "#6366F1", secondary: "#A78BFA" },
    ColorPreset { name: "Emerald", primary: "#10B981", secondary: "#34D399" },
    ColorPreset { name: "Rose", primary: "#F43F5E", secondary: "#FB7185" },
    ColorPreset { name: "Amber", primary: "#F59E0B", secondary: "#FBBF24" },
    ColorPreset { name: "Cyan", primary: "#06B6D4", secondary: "#22D3EE" },
    ColorPreset { name: "Slate", primary: "#475569", secondary: "#64748B" },
];

/// Font size bounds in points
pub const MIN_FONT_SIZE: u8 = 10;
pub const MAX_FONT_SIZE: u8 = 16;

/// Line spacing bounds as a multiplier
pub const MIN_LINE_SPACING: f32 = 1.0;
pub const MAX_LINE_SPACING: f32 = 2.0;

/// Selectable font families
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    Poppins,
    Playfair,
    Merriweather,
    Lato,
}

impl FontFamily {
    pub const ALL: [FontFamily; 6] = [
        FontFamily::Inter,
        FontFamily::Roboto,
        FontFamily::Poppins,
        FontFamily::Playfair,
        FontFamily::Merriweather,
        FontFamily::Lato,
    ];

    /// Human-readable name
    pub fn label(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::Poppins => "Poppins",
            FontFamily::Playfair => "Playfair Display",
            FontFamily::Merriweather => "Merriweather",
            FontFamily::Lato => "Lato",
        }
    }

    /// Lowercase token used in config files and snapshots
    pub fn token(self) -> &'static str {
        match self {
            FontFamily::Inter => "inter",
            FontFamily::Roboto => "roboto",
            FontFamily::Poppins => "poppins",
            FontFamily::Playfair => "playfair",
            FontFamily::Merriweather => "merriweather",
            FontFamily::Lato => "lato",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Error parsing a [`FontFamily`] token
#[derive(Error, Debug)]
#[error("Unknown font family '{0}'")]
pub struct ParseFontError(String);

impl FromStr for FontFamily {
    type Err = ParseFontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontFamily::ALL
            .into_iter()
            .find(|f| f.token() == s.to_lowercase())
            .ok_or_else(|| ParseFontError(s.to_string()))
    }
}

/// Template keys and the preset each one seeds
const TEMPLATE_PRESETS: [(&str, usize); 5] = [
    ("modern", 0),
    ("minimal", 5),
    ("elegant", 3),
    ("creative", 2),
    ("corporate", 4),
];

/// Look up the preset index a template key seeds, if the key is known
pub fn template_preset(key: &str) -> Option<usize> {
    TEMPLATE_PRESETS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, index)| *index)
}

/// The active visual-styling choices
///
/// Fields are private so the clamping setters are the only write path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    preset: usize,
    font_family: FontFamily,
    font_size: u8,
    line_spacing: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            preset: 0,
            font_family: FontFamily::Inter,
            font_size: 12,
            line_spacing: 1.5,
        }
    }
}

impl StyleConfig {
    /// Seed a configuration from a template key
    ///
    /// Known keys select their preset; unknown keys fall back to the
    /// default preset and leave everything else at defaults.
    pub fn for_template(key: &str) -> Self {
        let preset = match template_preset(key) {
            Some(index) => index,
            None => {
                tracing::warn!(template = key, "unknown template key, using default preset");
                0
            }
        };
        Self {
            preset,
            ..Self::default()
        }
    }

    pub fn preset_index(&self) -> usize {
        self.preset
    }

    /// Resolve the active color preset from the catalog
    ///
    /// Always valid: `set_preset` clamps to the catalog range.
    pub fn preset(&self) -> &'static ColorPreset {
        &COLOR_PRESETS[self.preset]
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    /// Select a color preset, clamped to the catalog range
    pub fn set_preset(&mut self, index: usize) {
        self.preset = index.min(COLOR_PRESETS.len() - 1);
    }

    pub fn set_font(&mut self, font: FontFamily) {
        self.font_family = font;
    }

    /// Set the font size, clamped to [10, 16]
    pub fn set_font_size(&mut self, size: i32) {
        self.font_size = size.clamp(MIN_FONT_SIZE as i32, MAX_FONT_SIZE as i32) as u8;
    }

    /// Set the line spacing, clamped to [1.0, 2.0]
    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.line_spacing = spacing.clamp(MIN_LINE_SPACING, MAX_LINE_SPACING);
    }
}
