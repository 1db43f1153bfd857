/// Uniqueness checks for draft colors and palette names.
use crate::draft::PaletteDraft;
use crate::slug::slugify;
use crate::types::Palette;

/// True unless some entry in `draft` already uses exactly `candidate`.
pub fn is_color_unique(draft: &PaletteDraft, candidate: &str) -> bool {
    draft.colors().iter().all(|entry| entry.color != candidate)
}

/// True unless an existing palette has the same name, ignoring case.
pub fn is_name_unique(existing: &[Palette], candidate: &str) -> bool {
    let candidate = candidate.to_lowercase();
    existing
        .iter()
        .all(|palette| palette.palette_name.to_lowercase() != candidate)
}

/// True unless `slugify(candidate)` is already used as an id.
pub fn is_slug_unique(existing: &[Palette], candidate: &str) -> bool {
    let id = slugify(candidate);
    existing.iter().all(|palette| palette.id != id)
}
