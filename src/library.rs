/// Saved palettes.
use tracing::info;

use crate::catalog::ColorCatalog;
use crate::types::Palette;

/// What the draft controller saves into.
pub trait PaletteStore {
    /// Every palette a new name must not collide with.
    fn palettes(&self) -> &[Palette];

    fn save(&mut self, palette: Palette);
}

/// In-memory store used by the app. It starts out holding the catalog's
/// source palettes so new names are checked against them too.
#[derive(Clone, Debug, Default)]
pub struct PaletteLibrary {
    palettes: Vec<Palette>,
}

impl PaletteLibrary {
    pub fn new(palettes: Vec<Palette>) -> Self {
        Self { palettes }
    }

    pub fn from_catalog(catalog: &ColorCatalog) -> Self {
        Self::new(catalog.palettes().to_vec())
    }

    pub fn find(&self, id: &str) -> Option<&Palette> {
        self.palettes.iter().find(|palette| palette.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.palettes.iter().position(|palette| palette.id == id)
    }

    /// Removes the palette with `id`, returning it.
    pub fn delete(&mut self, id: &str) -> Option<Palette> {
        let index = self.position(id)?;
        let palette = self.palettes.remove(index);
        info!(id = %palette.id, "deleted palette");
        Some(palette)
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }
}

impl PaletteStore for PaletteLibrary {
    fn palettes(&self) -> &[Palette] {
        &self.palettes
    }

    fn save(&mut self, palette: Palette) {
        info!(id = %palette.id, colors = palette.colors.len(), "saved palette");
        self.palettes.push(palette);
    }
}
