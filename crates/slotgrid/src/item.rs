//! Item traits and field access.
//!
//! The grid never inspects item internals directly. Each item exposes three
//! facts through the [`GridItem`] trait: a stable key, an optional sort key,
//! and whether it is currently filtered out. Callers whose types cannot
//! implement the trait the way the grid expects (or that need per-view
//! behavior) can override any of the three per view with closures collected
//! in [`FieldBindings`].

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Marker trait for types usable as grid item keys.
///
/// Blanket-implemented; you never implement this by hand.
pub trait ItemKey: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<T: Clone + Eq + Hash + Debug + Send + Sync + 'static> ItemKey for T {}

/// A sortable value extracted from an item.
///
/// `None` sorts before everything else; numbers compare numerically across
/// the integer/float variants; `NaN` sorts before any other number.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SortKey {
    /// No sort key; such items keep their relative input order at the front.
    #[default]
    None,
    /// Boolean key (`false` before `true`).
    Bool(bool),
    /// Integer key.
    Int(i64),
    /// Floating point key.
    Float(f64),
    /// String key, compared lexicographically by `str::cmp`.
    String(String),
}

impl SortKey {
    /// Compare two sort keys with a total order.
    ///
    /// Cross-variant comparisons order by variant rank
    /// (`None < Bool < Int/Float < String`), except that `Int` and `Float`
    /// compare numerically with each other.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::None, SortKey::None) => Ordering::Equal,
            (SortKey::Bool(a), SortKey::Bool(b)) => a.cmp(b),
            (SortKey::Int(a), SortKey::Int(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => compare_f64(*a, *b),
            (SortKey::Int(a), SortKey::Float(b)) => compare_f64(*a as f64, *b),
            (SortKey::Float(a), SortKey::Int(b)) => compare_f64(*a, *b as f64),
            (SortKey::String(a), SortKey::String(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::None => 0,
            SortKey::Bool(_) => 1,
            SortKey::Int(_) | SortKey::Float(_) => 2,
            SortKey::String(_) => 3,
        }
    }
}

/// NaN sorts first so the comparison stays a total order.
fn compare_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl From<i32> for SortKey {
    fn from(v: i32) -> Self {
        SortKey::Int(v as i64)
    }
}

impl From<i64> for SortKey {
    fn from(v: i64) -> Self {
        SortKey::Int(v)
    }
}

impl From<f32> for SortKey {
    fn from(v: f32) -> Self {
        SortKey::Float(v as f64)
    }
}

impl From<f64> for SortKey {
    fn from(v: f64) -> Self {
        SortKey::Float(v)
    }
}

impl From<bool> for SortKey {
    fn from(v: bool) -> Self {
        SortKey::Bool(v)
    }
}

impl From<&str> for SortKey {
    fn from(v: &str) -> Self {
        SortKey::String(v.to_string())
    }
}

impl From<String> for SortKey {
    fn from(v: String) -> Self {
        SortKey::String(v)
    }
}

/// An item the grid can lay out.
///
/// Only [`key`](Self::key) is required. The defaults give an unsorted,
/// unfiltered grid that positions items in input order.
pub trait GridItem {
    /// Stable identity for this item.
    ///
    /// Keys must be unique within one grid; a duplicate key makes the later
    /// item shadow the earlier one (see `SlotIndex::build`).
    type Key: ItemKey;

    /// The item's key.
    fn key(&self) -> Self::Key;

    /// The value this item sorts by.
    fn sort_key(&self) -> SortKey {
        SortKey::None
    }

    /// Whether this item is currently filtered out of the grid.
    ///
    /// Filtered items occupy no slot and contribute nothing to the grid
    /// height, but still receive a (hidden) style every pass so they can
    /// fade out in place.
    fn filtered(&self) -> bool {
        false
    }
}

/// Type alias for a key accessor override.
pub type KeyFn<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Type alias for a sort key accessor override.
pub type SortKeyFn<T> = Arc<dyn Fn(&T) -> SortKey + Send + Sync>;

/// Type alias for a filter predicate override.
///
/// Returns `true` when the item should be hidden, matching
/// [`GridItem::filtered`].
pub type FilterFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Per-view accessor overrides.
///
/// Every lookup falls back to the [`GridItem`] trait methods when no
/// override is installed.
pub struct FieldBindings<T: GridItem> {
    key: Option<KeyFn<T, T::Key>>,
    sort: Option<SortKeyFn<T>>,
    filter: Option<FilterFn<T>>,
}

impl<T: GridItem> FieldBindings<T> {
    /// Install a key accessor override.
    pub fn set_key_fn<F>(&mut self, f: F)
    where
        F: Fn(&T) -> T::Key + Send + Sync + 'static,
    {
        self.key = Some(Arc::new(f));
    }

    /// Install a sort key accessor override.
    pub fn set_sort_key_fn<F>(&mut self, f: F)
    where
        F: Fn(&T) -> SortKey + Send + Sync + 'static,
    {
        self.sort = Some(Arc::new(f));
    }

    /// Install a filter predicate override.
    pub fn set_filter_fn<F>(&mut self, f: F)
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(f));
    }

    /// The item's key, via the override or the trait.
    pub fn key_of(&self, item: &T) -> T::Key {
        match &self.key {
            Some(f) => f(item),
            None => item.key(),
        }
    }

    /// The item's sort key, via the override or the trait.
    pub fn sort_key_of(&self, item: &T) -> SortKey {
        match &self.sort {
            Some(f) => f(item),
            None => item.sort_key(),
        }
    }

    /// Whether the item is filtered out, via the override or the trait.
    pub fn filtered_of(&self, item: &T) -> bool {
        match &self.filter {
            Some(f) => f(item),
            None => item.filtered(),
        }
    }
}

impl<T: GridItem> Default for FieldBindings<T> {
    fn default() -> Self {
        Self {
            key: None,
            sort: None,
            filter: None,
        }
    }
}

impl<T: GridItem> Clone for FieldBindings<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            sort: self.sort.clone(),
            filter: self.filter.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Card {
        id: u32,
        rank: i64,
        hidden: bool,
    }

    impl GridItem for Card {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }

        fn sort_key(&self) -> SortKey {
            SortKey::Int(self.rank)
        }

        fn filtered(&self) -> bool {
            self.hidden
        }
    }

    #[test]
    fn test_bindings_fall_back_to_trait() {
        let bindings = FieldBindings::<Card>::default();
        let card = Card {
            id: 7,
            rank: 3,
            hidden: true,
        };

        assert_eq!(bindings.key_of(&card), 7);
        assert_eq!(bindings.sort_key_of(&card), SortKey::Int(3));
        assert!(bindings.filtered_of(&card));
    }

    #[test]
    fn test_bindings_overrides_win() {
        let mut bindings = FieldBindings::<Card>::default();
        bindings.set_sort_key_fn(|c| SortKey::Int(-c.rank));
        bindings.set_filter_fn(|_| false);

        let card = Card {
            id: 7,
            rank: 3,
            hidden: true,
        };

        assert_eq!(bindings.sort_key_of(&card), SortKey::Int(-3));
        assert!(!bindings.filtered_of(&card)); // Override ignores `hidden`
    }

    #[test]
    fn test_sort_key_variant_order() {
        let none = SortKey::None;
        let flag = SortKey::Bool(true);
        let int = SortKey::Int(5);
        let text = SortKey::String("a".into());

        assert_eq!(none.compare(&flag), Ordering::Less);
        assert_eq!(flag.compare(&int), Ordering::Less);
        assert_eq!(int.compare(&text), Ordering::Less);
        assert_eq!(text.compare(&text), Ordering::Equal);
    }

    #[test]
    fn test_sort_key_numeric_across_variants() {
        assert_eq!(SortKey::Int(2).compare(&SortKey::Float(2.5)), Ordering::Less);
        assert_eq!(SortKey::Float(3.0).compare(&SortKey::Int(2)), Ordering::Greater);
        assert_eq!(SortKey::Int(2).compare(&SortKey::Float(2.0)), Ordering::Equal);
    }

    #[test]
    fn test_sort_key_nan_sorts_first() {
        let nan = SortKey::Float(f64::NAN);
        let zero = SortKey::Float(0.0);
        let neg = SortKey::Float(f64::NEG_INFINITY);

        assert_eq!(nan.compare(&zero), Ordering::Less);
        assert_eq!(zero.compare(&nan), Ordering::Greater);
        assert_eq!(nan.compare(&neg), Ordering::Less);
        assert_eq!(nan.compare(&nan), Ordering::Equal);
    }

    #[test]
    fn test_sort_key_from_impls() {
        assert_eq!(SortKey::from(3_i32), SortKey::Int(3));
        assert_eq!(SortKey::from(2.5_f64), SortKey::Float(2.5));
        assert_eq!(SortKey::from("abc"), SortKey::String("abc".into()));
        assert_eq!(SortKey::from(true), SortKey::Bool(true));
    }
}
