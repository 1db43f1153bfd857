//! Property-based invariant tests for the palette draft.
//!
//! 1. A successful add grows the draft by one and the color appears once.
//! 2. Add on a full draft always fails with CapacityExceeded.
//! 3. Add of a present color fails with DuplicateColor and changes nothing.
//! 4. Remove is idempotent.
//! 5. move_item(seq, i, i) is the identity.
//! 6. move_item is a permutation that only displaces one element.
//! 7. Random mutation sequences never break capacity or uniqueness.
//! 8. Random picks never collide with the draft.
//! 9. Names accepted by commit never reuse an existing id.

use std::collections::HashSet;

use palettr::reorder::move_item;
use palettr::slug::slugify;
use palettr::{ColorEntry, DraftError, Palette, PaletteDraft, commit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

// ── Helpers ─────────────────────────────────────────────────────────────

fn entry_strategy() -> impl Strategy<Value = ColorEntry> {
    (0u8..40, 0u8..8).prop_map(|(color, name)| {
        ColorEntry::new(format!("color-{name}"), format!("#0000{color:02x}"))
    })
}

fn draft_strategy() -> impl Strategy<Value = PaletteDraft> {
    (0usize..12, prop::collection::vec(entry_strategy(), 0..16))
        .prop_map(|(max, entries)| PaletteDraft::seeded(max, entries))
}

fn assert_invariants(draft: &PaletteDraft) -> Result<(), TestCaseError> {
    prop_assert!(draft.len() <= draft.max_colors());
    let distinct: HashSet<_> = draft.colors().iter().map(|e| &e.color).collect();
    prop_assert_eq!(distinct.len(), draft.len(), "duplicate color in {:?}", draft);
    Ok(())
}

#[derive(Clone, Debug)]
enum Op {
    Add(ColorEntry),
    Remove(u8),
    Clear,
    Reorder(usize, usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => entry_strategy().prop_map(Op::Add),
        2 => (0u8..8).prop_map(Op::Remove),
        1 => Just(Op::Clear),
        2 => (0usize..14, 0usize..14).prop_map(|(a, b)| Op::Reorder(a, b)),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1-3. Add
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn successful_add_appends_exactly_once(draft in draft_strategy(), entry in entry_strategy()) {
        let mut after = draft.clone();
        match after.add(entry.clone()) {
            Ok(()) => {
                prop_assert_eq!(after.len(), draft.len() + 1);
                prop_assert_eq!(after.colors().last(), Some(&entry));
                let count = after.colors().iter().filter(|e| e.color == entry.color).count();
                prop_assert_eq!(count, 1);
            }
            Err(_) => prop_assert_eq!(&after, &draft),
        }
    }

    #[test]
    fn full_draft_rejects_every_add(max in 0usize..6, entry in entry_strategy()) {
        let entries = (0..max).map(|i| ColorEntry::new(format!("c{i}"), format!("#ff00{i:02x}")));
        let mut draft = PaletteDraft::seeded(max, entries);
        prop_assert!(draft.is_full());
        prop_assert_eq!(
            draft.add(entry),
            Err(DraftError::CapacityExceeded { max_colors: max })
        );
        prop_assert_eq!(draft.len(), max);
    }

    #[test]
    fn present_color_is_rejected(draft in draft_strategy(), pick in any::<prop::sample::Index>(), name in "[a-z]{1,8}") {
        prop_assume!(!draft.is_empty() && !draft.is_full());
        let color = draft.colors()[pick.index(draft.len())].color.clone();
        let mut after = draft.clone();
        prop_assert_eq!(
            after.add(ColorEntry::new(name, color.clone())),
            Err(DraftError::DuplicateColor { color })
        );
        prop_assert_eq!(&after, &draft);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Remove
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn remove_twice_matches_remove_once_when_names_are_distinct(draft in draft_strategy(), name in 0u8..8) {
        let name = format!("color-{name}");
        let names: Vec<_> = draft.colors().iter().filter(|e| e.name == name).collect();
        prop_assume!(names.len() <= 1);

        let mut once = draft.clone();
        once.remove(&name);
        let mut twice = once.clone();
        prop_assert!(twice.remove(&name).is_none());
        prop_assert_eq!(once, twice);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Reorder
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_to_same_index_is_identity(items in prop::collection::vec(any::<u16>(), 1..20), i in any::<prop::sample::Index>()) {
        let i = i.index(items.len());
        prop_assert_eq!(move_item(&items, i, i), Some(items.clone()));
    }

    #[test]
    fn move_is_a_permutation(
        items in prop::collection::vec(any::<u16>(), 1..20),
        from in any::<prop::sample::Index>(),
        to in any::<prop::sample::Index>(),
    ) {
        let from = from.index(items.len());
        let to = to.index(items.len());
        let moved = move_item(&items, from, to).unwrap();

        let mut sorted_before = items.clone();
        let mut sorted_after = moved.clone();
        sorted_before.sort_unstable();
        sorted_after.sort_unstable();
        prop_assert_eq!(sorted_before, sorted_after);

        prop_assert_eq!(moved[to], items[from]);
        let mut rest_before = items.clone();
        rest_before.remove(from);
        let mut rest_after = moved.clone();
        rest_after.remove(to);
        prop_assert_eq!(rest_before, rest_after);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Arbitrary operation sequences
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn operation_sequences_keep_invariants(
        max in 0usize..10,
        ops in prop::collection::vec(op_strategy(), 0..40),
    ) {
        let mut draft = PaletteDraft::new(max);
        for op in ops {
            let before = draft.clone();
            let result = match op {
                Op::Add(entry) => draft.add(entry),
                Op::Remove(name) => {
                    draft.remove(&format!("color-{name}"));
                    Ok(())
                }
                Op::Clear => {
                    draft.clear();
                    Ok(())
                }
                Op::Reorder(from, to) => draft.reorder(from, to),
            };
            if result.is_err() {
                prop_assert_eq!(&draft, &before);
            }
            assert_invariants(&draft)?;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Random picks
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn random_pick_never_collides(
        draft in draft_strategy(),
        catalog in prop::collection::vec(entry_strategy(), 0..30),
        attempts in 0usize..8,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let available = catalog.iter().any(|c| draft.colors().iter().all(|d| d.color != c.color));
        match palettr::picker::pick_random_color(&catalog, &draft, attempts, &mut rng) {
            Ok(picked) => {
                prop_assert!(catalog.contains(&picked));
                prop_assert!(draft.colors().iter().all(|d| d.color != picked.color));
            }
            Err(err) => {
                prop_assert_eq!(err, DraftError::ExhaustedCatalog);
                prop_assert!(!available);
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. Commit ids are unique
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn accepted_names_never_reuse_an_id(names in prop::collection::vec("[a-cA-C -]{0,5}", 1..25)) {
        let draft = PaletteDraft::new(3);
        let mut existing: Vec<Palette> = Vec::new();
        for name in names {
            if let Ok(palette) = commit(&draft, &name, &existing) {
                prop_assert_eq!(&palette.id, &slugify(&name));
                prop_assert!(existing.iter().all(|p| p.id != palette.id));
                prop_assert!(existing.iter().all(|p| p.palette_name.to_lowercase() != name.to_lowercase()));
                existing.push(palette);
            }
        }
    }
}
