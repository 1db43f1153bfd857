/// Source palettes that random colors are drawn from.
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::slug::slugify;
use crate::types::{ColorEntry, Palette};

const MATERIAL_UI: &[(&str, &str)] = &[
    ("red", "#F44336"),
    ("pink", "#E91E63"),
    ("purple", "#9C27B0"),
    ("deeppurple", "#673AB7"),
    ("indigo", "#3F51B5"),
    ("blue", "#2196F3"),
    ("lightblue", "#03A9F4"),
    ("cyan", "#00BCD4"),
    ("teal", "#009688"),
    ("green", "#4CAF50"),
    ("lightgreen", "#8BC34A"),
    ("lime", "#CDDC39"),
    ("yellow", "#FFEB3B"),
    ("amber", "#FFC107"),
    ("orange", "#FF9800"),
    ("deeporange", "#FF5722"),
    ("brown", "#795548"),
    ("grey", "#9E9E9E"),
    ("bluegrey", "#607D8B"),
];

const FLAT_UI: &[(&str, &str)] = &[
    ("Turquoise", "#1abc9c"),
    ("Emerald", "#2ecc71"),
    ("PeterRiver", "#3498db"),
    ("Amethyst", "#9b59b6"),
    ("WetAsphalt", "#34495e"),
    ("GreenSea", "#16a085"),
    ("Nephritis", "#27ae60"),
    ("BelizeHole", "#2980b9"),
    ("Wisteria", "#8e44ad"),
    ("MidnightBlue", "#2c3e50"),
    ("SunFlower", "#f1c40f"),
    ("Carrot", "#e67e22"),
    ("Alizarin", "#e74c3c"),
    ("Clouds", "#ecf0f1"),
    ("Concrete", "#95a5a6"),
    ("Orange", "#f39c12"),
    ("Pumpkin", "#d35400"),
    ("Pomegranate", "#c0392b"),
    ("Silver", "#bdc3c7"),
    ("Asbestos", "#7f8c8d"),
];

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not a valid palette list: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read-only set of source palettes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorCatalog {
    palettes: Vec<Palette>,
}

impl ColorCatalog {
    pub fn new(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    /// The palettes shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(vec![
            seed_palette("Material UI Colors", MATERIAL_UI),
            seed_palette("Flat UI Colors v1", FLAT_UI),
        ])
    }

    /// Parses a JSON array of palettes (`id`, `paletteName`, `colors`).
    pub fn from_json(data: &str) -> Result<Self, CatalogError> {
        let palettes: Vec<Palette> = serde_json::from_str(data)?;
        Ok(Self::new(palettes))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let data = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&data)?;
        info!(
            path = %path.display(),
            palettes = catalog.palettes.len(),
            "loaded color catalog"
        );
        Ok(catalog)
    }

    pub fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    /// Every entry of every palette, in palette order.
    pub fn flatten(&self) -> Vec<ColorEntry> {
        self.palettes
            .iter()
            .flat_map(|palette| palette.colors.iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.iter().all(|palette| palette.colors.is_empty())
    }
}

impl Default for ColorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn seed_palette(name: &str, colors: &[(&str, &str)]) -> Palette {
    Palette {
        id: slugify(name),
        palette_name: name.to_string(),
        colors: colors
            .iter()
            .map(|(name, color)| ColorEntry::new(*name, *color))
            .collect(),
    }
}
