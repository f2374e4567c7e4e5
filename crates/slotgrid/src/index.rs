//! Sorted slot assignment.
//!
//! [`SlotIndex`] is the bridge between the host's item collection and the
//! layout's slot arithmetic. One full rebuild per pass: stable-sort the
//! items by their sort keys, then walk the sorted sequence handing out
//! ordinals (position among all items) and slots (position among visible
//! items). No incremental patching; a rebuild from the same items is
//! deterministic.

use std::collections::HashMap;

use crate::item::{FieldBindings, GridItem, ItemKey};

#[derive(Debug, Clone, Copy)]
struct SlotEntry {
    ordinal: usize,
    slot: Option<usize>,
}

/// Key → position mapping for one pass over the items.
#[derive(Debug, Clone)]
pub struct SlotIndex<K: ItemKey> {
    entries: HashMap<K, SlotEntry>,
    visible_count: usize,
    len: usize,
}

impl<K: ItemKey> SlotIndex<K> {
    /// Build the index from a snapshot of the items.
    ///
    /// Equal sort keys keep their input order (the sort is stable), so
    /// unsorted collections lay out in insertion order.
    ///
    /// Keys are expected to be unique. On a collision the later item
    /// overwrites the earlier one and a warning names the key; the earlier
    /// item keeps occupying its slot in the dense numbering, it just can no
    /// longer be looked up.
    pub fn build<T>(items: &[T], bindings: &FieldBindings<T>) -> Self
    where
        T: GridItem<Key = K>,
    {
        let sort_keys: Vec<_> = items.iter().map(|item| bindings.sort_key_of(item)).collect();

        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by(|&a, &b| sort_keys[a].compare(&sort_keys[b]));

        let mut entries = HashMap::with_capacity(items.len());
        let mut next_slot = 0;

        for (ordinal, &input_index) in order.iter().enumerate() {
            let item = &items[input_index];

            let slot = if bindings.filtered_of(item) {
                None
            } else {
                let slot = next_slot;
                next_slot += 1;
                Some(slot)
            };

            let key = bindings.key_of(item);
            if entries.insert(key.clone(), SlotEntry { ordinal, slot }).is_some() {
                tracing::warn!(
                    target: "slotgrid::index",
                    "duplicate item key {:?}, later item wins",
                    key
                );
            }
        }

        Self {
            entries,
            visible_count: next_slot,
            len: items.len(),
        }
    }

    /// The visible slot an item occupies, `None` for filtered or unknown
    /// keys.
    pub fn slot_of(&self, key: &K) -> Option<usize> {
        self.entries.get(key).and_then(|entry| entry.slot)
    }

    /// The item's position in the sorted full sequence, filtered items
    /// included.
    pub fn ordinal_of(&self, key: &K) -> Option<usize> {
        self.entries.get(key).map(|entry| entry.ordinal)
    }

    /// Number of items that occupy a slot.
    #[inline]
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    /// Number of items the index was built from.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index was built from no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::SortKey;

    #[derive(Clone)]
    struct Tile {
        id: &'static str,
        rank: i64,
        hidden: bool,
    }

    impl Tile {
        fn new(id: &'static str, rank: i64) -> Self {
            Self {
                id,
                rank,
                hidden: false,
            }
        }

        fn hidden(id: &'static str, rank: i64) -> Self {
            Self {
                id,
                rank,
                hidden: true,
            }
        }
    }

    impl GridItem for Tile {
        type Key = &'static str;

        fn key(&self) -> &'static str {
            self.id
        }

        fn sort_key(&self) -> SortKey {
            SortKey::Int(self.rank)
        }

        fn filtered(&self) -> bool {
            self.hidden
        }
    }

    fn bindings() -> FieldBindings<Tile> {
        FieldBindings::default()
    }

    #[test]
    fn test_slots_follow_sort_order() {
        let items = vec![Tile::new("c", 3), Tile::new("a", 1), Tile::new("b", 2)];
        let index = SlotIndex::build(&items, &bindings());

        assert_eq!(index.slot_of(&"a"), Some(0));
        assert_eq!(index.slot_of(&"b"), Some(1));
        assert_eq!(index.slot_of(&"c"), Some(2));
        assert_eq!(index.visible_count(), 3);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let items = vec![
            Tile::new("first", 5),
            Tile::new("second", 5),
            Tile::new("third", 5),
        ];
        let index = SlotIndex::build(&items, &bindings());

        assert_eq!(index.slot_of(&"first"), Some(0));
        assert_eq!(index.slot_of(&"second"), Some(1));
        assert_eq!(index.slot_of(&"third"), Some(2));
    }

    #[test]
    fn test_filtered_items_get_no_slot() {
        let items = vec![
            Tile::new("a", 1),
            Tile::hidden("b", 2),
            Tile::new("c", 3),
        ];
        let index = SlotIndex::build(&items, &bindings());

        assert_eq!(index.slot_of(&"a"), Some(0));
        assert_eq!(index.slot_of(&"b"), None);
        assert_eq!(index.slot_of(&"c"), Some(1)); // Slots stay dense
        assert_eq!(index.visible_count(), 2);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_ordinals_count_filtered_items() {
        let items = vec![
            Tile::new("a", 1),
            Tile::hidden("b", 2),
            Tile::new("c", 3),
        ];
        let index = SlotIndex::build(&items, &bindings());

        assert_eq!(index.ordinal_of(&"a"), Some(0));
        assert_eq!(index.ordinal_of(&"b"), Some(1));
        assert_eq!(index.ordinal_of(&"c"), Some(2));
    }

    #[test]
    fn test_unknown_key() {
        let items = vec![Tile::new("a", 1)];
        let index = SlotIndex::build(&items, &bindings());

        assert_eq!(index.slot_of(&"zzz"), None);
        assert_eq!(index.ordinal_of(&"zzz"), None);
    }

    #[test]
    fn test_duplicate_keys_later_item_wins() {
        let items = vec![Tile::new("a", 1), Tile::new("dup", 2), Tile::new("dup", 3)];
        let index = SlotIndex::build(&items, &bindings());

        // The later duplicate is the one that can be looked up
        assert_eq!(index.slot_of(&"dup"), Some(2));
        // Both duplicates still occupy slots
        assert_eq!(index.visible_count(), 3);
    }

    #[test]
    fn test_binding_overrides_drive_the_index() {
        let items = vec![Tile::new("a", 1), Tile::new("b", 2)];

        let mut bindings = bindings();
        bindings.set_sort_key_fn(|t| SortKey::Int(-t.rank));
        bindings.set_filter_fn(|t| t.id == "a");

        let index = SlotIndex::build(&items, &bindings);
        assert_eq!(index.slot_of(&"b"), Some(0)); // Reversed order, "a" filtered
        assert_eq!(index.slot_of(&"a"), None);
        assert_eq!(index.visible_count(), 1);
    }

    #[test]
    fn test_empty_items() {
        let items: Vec<Tile> = Vec::new();
        let index = SlotIndex::build(&items, &bindings());

        assert!(index.is_empty());
        assert_eq!(index.visible_count(), 0);
    }
}
