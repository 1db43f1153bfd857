use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub type PaletteId = String;

/// A single named color. `color` is the comparison key, `name` is display only.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorEntry {
    pub name: String,
    pub color: String,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

///A finalized palette. Only produced by a commit and never edited afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub id: PaletteId,
    pub palette_name: String,
    pub colors: Vec<ColorEntry>,
}

/// Display format for color values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    #[default]
    Hex,
    Rgb,
    Rgba,
}

impl ColorFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
        }
    }

    /// The next format in menu order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            ColorFormat::Hex => ColorFormat::Rgb,
            ColorFormat::Rgb => ColorFormat::Rgba,
            ColorFormat::Rgba => ColorFormat::Hex,
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "rgba" => Ok(ColorFormat::Rgba),
            other => Err(format!("unknown color format '{other}', expected hex, rgb or rgba")),
        }
    }
}
