/// The palette under construction.
use tracing::debug;

use crate::error::DraftError;
use crate::reorder::move_item;
use crate::types::ColorEntry;
use crate::validate::is_color_unique;

/// Capacity used when nothing else is configured.
pub const DEFAULT_MAX_COLORS: usize = 20;

/// An ordered list of colors with a fixed capacity.
///
/// After every operation the list is at most `max_colors` long and contains
/// no two entries with the same `color`. Operations that fail return a
/// [`DraftError`] and leave the list untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteDraft {
    colors: Vec<ColorEntry>,
    max_colors: usize,
}

impl PaletteDraft {
    pub fn new(max_colors: usize) -> Self {
        Self {
            colors: Vec::new(),
            max_colors,
        }
    }

    /// Builds a draft pre-filled from `entries`. Repeated colors are skipped
    /// and anything past capacity is dropped.
    pub fn seeded(max_colors: usize, entries: impl IntoIterator<Item = ColorEntry>) -> Self {
        let mut draft = Self::new(max_colors);
        for entry in entries {
            match draft.add(entry) {
                Ok(()) | Err(DraftError::DuplicateColor { .. }) => {}
                Err(_) => break,
            }
        }
        draft
    }

    pub fn colors(&self) -> &[ColorEntry] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn max_colors(&self) -> usize {
        self.max_colors
    }

    /// How many more colors fit.
    pub fn remaining(&self) -> usize {
        self.max_colors.saturating_sub(self.colors.len())
    }

    pub fn is_full(&self) -> bool {
        self.colors.len() >= self.max_colors
    }

    /// Appends `entry`. Capacity is checked before uniqueness.
    pub fn add(&mut self, entry: ColorEntry) -> Result<(), DraftError> {
        if self.is_full() {
            return Err(DraftError::CapacityExceeded {
                max_colors: self.max_colors,
            });
        }
        if !is_color_unique(self, &entry.color) {
            return Err(DraftError::DuplicateColor { color: entry.color });
        }
        debug!(name = %entry.name, color = %entry.color, "added color to draft");
        self.colors.push(entry);
        Ok(())
    }

    /// Removes the first entry called `name`. Returns the removed entry, or
    /// `None` when nothing matched.
    pub fn remove(&mut self, name: &str) -> Option<ColorEntry> {
        let index = self.colors.iter().position(|entry| entry.name == name)?;
        let removed = self.colors.remove(index);
        debug!(name = %removed.name, color = %removed.color, "removed color from draft");
        Some(removed)
    }

    /// Removes the entry at `index`. Returns `None` when `index` is past the
    /// end.
    pub fn remove_at(&mut self, index: usize) -> Option<ColorEntry> {
        if index >= self.colors.len() {
            return None;
        }
        let removed = self.colors.remove(index);
        debug!(index, name = %removed.name, color = %removed.color, "removed color from draft");
        Some(removed)
    }

    pub fn clear(&mut self) {
        debug!(count = self.colors.len(), "cleared draft");
        self.colors.clear();
    }

    /// Moves the color at `old_index` to `new_index`.
    pub fn reorder(&mut self, old_index: usize, new_index: usize) -> Result<(), DraftError> {
        let len = self.colors.len();
        let moved = move_item(&self.colors, old_index, new_index).ok_or(
            DraftError::IndexOutOfRange {
                index: if old_index >= len { old_index } else { new_index },
                len,
            },
        )?;
        self.colors = moved;
        Ok(())
    }
}

impl Default for PaletteDraft {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_COLORS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, color: &str) -> ColorEntry {
        ColorEntry::new(name, color)
    }

    #[test]
    fn add_appends_in_order() {
        let mut draft = PaletteDraft::new(3);
        draft.add(entry("red", "#ff0000")).unwrap();
        draft.add(entry("green", "#00ff00")).unwrap();
        let names: Vec<_> = draft.colors().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["red", "green"]);
        assert_eq!(draft.remaining(), 1);
    }

    #[test]
    fn add_rejects_duplicate_color_even_with_new_name() {
        let mut draft = PaletteDraft::new(3);
        draft.add(entry("red", "#ff0000")).unwrap();
        let before = draft.clone();
        let err = draft.add(entry("crimson", "#ff0000")).unwrap_err();
        assert_eq!(
            err,
            DraftError::DuplicateColor {
                color: "#ff0000".to_string()
            }
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn capacity_wins_over_duplicate() {
        let mut draft = PaletteDraft::new(1);
        draft.add(entry("red", "#ff0000")).unwrap();
        assert!(draft.is_full());
        assert_eq!(
            draft.add(entry("red", "#ff0000")),
            Err(DraftError::CapacityExceeded { max_colors: 1 })
        );
    }

    #[test]
    fn zero_capacity_draft_is_always_full() {
        let mut draft = PaletteDraft::new(0);
        assert!(draft.is_full());
        assert!(draft.add(entry("red", "#ff0000")).is_err());
    }

    #[test]
    fn remove_is_tolerant_of_missing_names() {
        let mut draft = PaletteDraft::seeded(3, vec![entry("red", "#ff0000")]);
        assert!(draft.remove("red").is_some());
        assert!(draft.remove("red").is_none());
        assert!(draft.is_empty());
    }

    #[test]
    fn remove_takes_only_the_first_match() {
        let mut draft = PaletteDraft::seeded(
            3,
            vec![entry("same", "#111111"), entry("same", "#222222")],
        );
        let removed = draft.remove("same").unwrap();
        assert_eq!(removed.color, "#111111");
        assert_eq!(draft.colors(), &[entry("same", "#222222")]);
    }

    #[test]
    fn remove_at_targets_the_row_not_the_name() {
        let mut draft = PaletteDraft::seeded(
            3,
            vec![entry("Orange", "#123456"), entry("Orange", "#f39c12")],
        );
        assert!(draft.remove_at(2).is_none());
        let removed = draft.remove_at(1).unwrap();
        assert_eq!(removed.color, "#f39c12");
        assert_eq!(draft.colors(), &[entry("Orange", "#123456")]);
    }

    #[test]
    fn reorder_out_of_range_leaves_draft_alone() {
        let mut draft = PaletteDraft::seeded(
            3,
            vec![entry("a", "#000001"), entry("b", "#000002")],
        );
        let before = draft.clone();
        assert_eq!(
            draft.reorder(0, 2),
            Err(DraftError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            draft.reorder(5, 0),
            Err(DraftError::IndexOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(draft, before);
        draft.reorder(1, 0).unwrap();
        assert_eq!(draft.colors()[0].name, "b");
    }

    #[test]
    fn seeded_skips_duplicates_and_stops_at_capacity() {
        let draft = PaletteDraft::seeded(
            2,
            vec![
                entry("a", "#000001"),
                entry("a again", "#000001"),
                entry("b", "#000002"),
                entry("c", "#000003"),
            ],
        );
        let names: Vec<_> = draft.colors().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["a", "b"]);
    }

    #[test]
    fn clear_always_succeeds() {
        let mut draft = PaletteDraft::seeded(2, vec![entry("a", "#000001")]);
        draft.clear();
        draft.clear();
        assert!(draft.is_empty());
        assert!(!draft.is_full());
    }
}
