/// Turns user actions into draft mutations and finished palettes.
use rand::RngExt;
use tracing::{debug, info};

use crate::catalog::ColorCatalog;
use crate::draft::PaletteDraft;
use crate::error::{DraftError, NameRejection};
use crate::library::PaletteStore;
use crate::picker::{DEFAULT_MAX_PICK_ATTEMPTS, pick_random_color};
use crate::slug::slugify;
use crate::types::{ColorEntry, ColorFormat, Palette};
use crate::validate::{is_name_unique, is_slug_unique};

/// Receives display format changes. The current format lives with the
/// listener, never with the controller.
pub trait FormatListener {
    fn format_changed(&mut self, format: ColorFormat);
}

/// Checks `name` against `existing` without building anything.
pub fn check_name(existing: &[Palette], name: &str) -> Result<(), NameRejection> {
    if name.trim().is_empty() {
        return Err(NameRejection::Empty);
    }
    if !is_name_unique(existing, name) {
        return Err(NameRejection::Taken);
    }
    if !is_slug_unique(existing, name) {
        return Err(NameRejection::SlugTaken);
    }
    Ok(())
}

/// Builds the finished palette for `draft`. The draft itself is left as is.
pub fn commit(draft: &PaletteDraft, name: &str, existing: &[Palette]) -> Result<Palette, DraftError> {
    check_name(existing, name).map_err(|reason| DraftError::InvalidName {
        name: name.to_string(),
        reason,
    })?;
    Ok(Palette {
        id: slugify(name),
        palette_name: name.to_string(),
        colors: draft.colors().to_vec(),
    })
}

/// Owns the single in-progress draft of an editing session.
#[derive(Clone, Debug)]
pub struct DraftController {
    draft: PaletteDraft,
    max_pick_attempts: usize,
}

impl DraftController {
    pub fn new(draft: PaletteDraft) -> Self {
        Self {
            draft,
            max_pick_attempts: DEFAULT_MAX_PICK_ATTEMPTS,
        }
    }

    pub fn with_max_pick_attempts(mut self, attempts: usize) -> Self {
        self.max_pick_attempts = attempts;
        self
    }

    pub fn draft(&self) -> &PaletteDraft {
        &self.draft
    }

    pub fn add(&mut self, entry: ColorEntry) -> Result<(), DraftError> {
        self.draft.add(entry)
    }

    /// Picks a random catalog color and appends it. Nothing is drawn when the
    /// draft is already full.
    pub fn add_random<R: RngExt>(
        &mut self,
        catalog: &ColorCatalog,
        rng: &mut R,
    ) -> Result<ColorEntry, DraftError> {
        if self.draft.is_full() {
            return Err(DraftError::CapacityExceeded {
                max_colors: self.draft.max_colors(),
            });
        }
        let entry = pick_random_color(&catalog.flatten(), &self.draft, self.max_pick_attempts, rng)?;
        self.draft.add(entry.clone())?;
        Ok(entry)
    }

    pub fn remove(&mut self, name: &str) -> Option<ColorEntry> {
        self.draft.remove(name)
    }

    pub fn remove_at(&mut self, index: usize) -> Option<ColorEntry> {
        self.draft.remove_at(index)
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<(), DraftError> {
        self.draft.reorder(old_index, new_index)
    }

    pub fn commit(&self, name: &str, existing: &[Palette]) -> Result<Palette, DraftError> {
        commit(&self.draft, name, existing)
    }

    /// Commits against `store` and hands it the result. The returned palette's
    /// id is what the caller navigates to.
    pub fn save<S: PaletteStore>(&self, name: &str, store: &mut S) -> Result<Palette, DraftError> {
        let palette = self.commit(name, store.palettes())?;
        info!(id = %palette.id, name = %palette.palette_name, "committed palette");
        store.save(palette.clone());
        Ok(palette)
    }

    pub fn handle_format_change<L: FormatListener + ?Sized>(&self, format: ColorFormat, listener: &mut L) {
        debug!(%format, "format changed");
        listener.format_changed(format);
    }
}
