/// Random color selection that respects the draft's uniqueness rule.
use rand::RngExt;
use tracing::{debug, warn};

use crate::draft::PaletteDraft;
use crate::error::DraftError;
use crate::types::ColorEntry;
use crate::validate::is_color_unique;

/// How many blind draws are made before switching to the filtered draw.
pub const DEFAULT_MAX_PICK_ATTEMPTS: usize = 64;

/// Draws a catalog entry whose color is not already in `draft`.
///
/// Samples uniformly and redraws on collision, at most `max_attempts` times.
/// After that it draws uniformly from the entries that do not collide, which
/// gives the same distribution without looping. Fails with
/// [`DraftError::ExhaustedCatalog`] when no such entry exists.
pub fn pick_random_color<R: RngExt>(
    catalog: &[ColorEntry],
    draft: &PaletteDraft,
    max_attempts: usize,
    rng: &mut R,
) -> Result<ColorEntry, DraftError> {
    if catalog.is_empty() {
        warn!("cannot pick a random color from an empty catalog");
        return Err(DraftError::ExhaustedCatalog);
    }

    for _ in 0..max_attempts {
        let candidate = &catalog[rng.random_range(0..catalog.len())];
        if is_color_unique(draft, &candidate.color) {
            return Ok(candidate.clone());
        }
    }

    let remaining: Vec<&ColorEntry> = catalog
        .iter()
        .filter(|entry| is_color_unique(draft, &entry.color))
        .collect();
    if remaining.is_empty() {
        warn!(
            catalog = catalog.len(),
            draft = draft.len(),
            "every catalog color is already in the draft"
        );
        return Err(DraftError::ExhaustedCatalog);
    }
    debug!(
        attempts = max_attempts,
        remaining = remaining.len(),
        "random draws kept colliding, drawing from remaining colors"
    );
    Ok(remaining[rng.random_range(0..remaining.len())].clone())
}
