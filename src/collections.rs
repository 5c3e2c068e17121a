//! Uniform operation vocabularies over the collection pairs.
//!
//! The scripted phases run through three small traits so each phase is
//! written once and measured against both variants of a pair:
//!
//! - [`Sequence`] for the ordered, index-addressable pair
//!   (`Vec` vs `LinkedList`)
//! - [`SetOps`] for the uniqueness-enforcing pair (`HashSet` vs `BTreeSet`)
//! - [`MapOps`] for the key-to-value pair (`HashMap` vs `BTreeMap`)
//!
//! Removal is remove-by-value everywhere (first occurrence for sequences),
//! and removing an absent value is a silent no-op rather than an error.
//! Each implementation carries the static label the reporter prints, so no
//! runtime type introspection is involved.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList};

// =============================================================================
// Sequence
// =============================================================================

/// An ordered, index-addressable collection of integers permitting
/// duplicates.
pub trait Sequence {
    /// Label printed for this implementation in measurement lines.
    const LABEL: &'static str;

    /// Inserts `element` at `index`, shifting later elements right.
    ///
    /// `index` must not exceed the current length; the fixed script driving
    /// this harness never produces an out-of-range index.
    fn insert_at(&mut self, index: usize, element: i32);

    /// Whether `element` occurs anywhere in the sequence.
    fn contains_element(&self, element: i32) -> bool;

    /// Removes the first occurrence of `element`, if any.
    ///
    /// Returns `true` when an element was removed. Absent values are a
    /// silent no-op.
    fn remove_element(&mut self, element: i32) -> bool;

    /// Current number of elements.
    fn len(&self) -> usize;

    /// Whether the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sequence for Vec<i32> {
    const LABEL: &'static str = "Vec";

    fn insert_at(&mut self, index: usize, element: i32) {
        self.insert(index, element);
    }

    fn contains_element(&self, element: i32) -> bool {
        self.contains(&element)
    }

    fn remove_element(&mut self, element: i32) -> bool {
        match self.iter().position(|&value| value == element) {
            Some(position) => {
                self.remove(position);
                true
            }
            None => false,
        }
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl Sequence for LinkedList<i32> {
    const LABEL: &'static str = "LinkedList";

    // `LinkedList` has no positional insert on stable; split_off/append keeps
    // it O(1) node relinking after the O(index) walk to the split point.
    fn insert_at(&mut self, index: usize, element: i32) {
        debug_assert!(index <= self.len());
        let mut tail = self.split_off(index);
        self.push_back(element);
        self.append(&mut tail);
    }

    fn contains_element(&self, element: i32) -> bool {
        self.contains(&element)
    }

    fn remove_element(&mut self, element: i32) -> bool {
        let Some(position) = self.iter().position(|&value| value == element) else {
            return false;
        };
        let mut tail = self.split_off(position);
        tail.pop_front();
        self.append(&mut tail);
        true
    }

    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

// =============================================================================
// SetOps
// =============================================================================

/// A collection enforcing element uniqueness.
pub trait SetOps {
    /// Label printed for this implementation in measurement lines.
    const LABEL: &'static str;

    /// Inserts `element`; returns `false` when it was already present.
    fn insert_element(&mut self, element: i32) -> bool;

    /// Membership check.
    fn contains_element(&self, element: i32) -> bool;

    /// Removes `element` if present; absent values are a silent no-op.
    fn remove_element(&mut self, element: i32) -> bool;

    /// Current number of elements.
    fn len(&self) -> usize;
}

impl SetOps for HashSet<i32> {
    const LABEL: &'static str = "HashSet";

    fn insert_element(&mut self, element: i32) -> bool {
        self.insert(element)
    }

    fn contains_element(&self, element: i32) -> bool {
        self.contains(&element)
    }

    fn remove_element(&mut self, element: i32) -> bool {
        self.remove(&element)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl SetOps for BTreeSet<i32> {
    const LABEL: &'static str = "BTreeSet";

    fn insert_element(&mut self, element: i32) -> bool {
        self.insert(element)
    }

    fn contains_element(&self, element: i32) -> bool {
        self.contains(&element)
    }

    fn remove_element(&mut self, element: i32) -> bool {
        self.remove(&element)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

// =============================================================================
// MapOps
// =============================================================================

/// A key-to-value association enforcing key uniqueness.
pub trait MapOps {
    /// Label printed for this implementation in measurement lines.
    const LABEL: &'static str;

    /// Inserts `key → value`, returning the previous value if the key was
    /// present.
    fn insert_entry(&mut self, key: i32, value: i32) -> Option<i32>;

    /// Whether any entry currently holds `value`. A linear scan by design:
    /// this is the "search" the map phase measures.
    fn contains_value(&self, value: i32) -> bool;

    /// Removes the entry under `key` only when its stored value equals
    /// `value`.
    ///
    /// Returns `true` when the entry was removed; a differing stored value
    /// or an absent key leaves the map unchanged.
    fn remove_if_value_eq(&mut self, key: i32, value: i32) -> bool;

    /// Current number of entries.
    fn len(&self) -> usize;
}

impl MapOps for HashMap<i32, i32> {
    const LABEL: &'static str = "HashMap";

    fn insert_entry(&mut self, key: i32, value: i32) -> Option<i32> {
        self.insert(key, value)
    }

    fn contains_value(&self, value: i32) -> bool {
        self.values().any(|&stored| stored == value)
    }

    fn remove_if_value_eq(&mut self, key: i32, value: i32) -> bool {
        if self.get(&key) == Some(&value) {
            self.remove(&key);
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

impl MapOps for BTreeMap<i32, i32> {
    const LABEL: &'static str = "BTreeMap";

    fn insert_entry(&mut self, key: i32, value: i32) -> Option<i32> {
        self.insert(key, value)
    }

    fn contains_value(&self, value: i32) -> bool {
        self.values().any(|&stored| stored == value)
    }

    fn remove_if_value_eq(&mut self, key: i32, value: i32) -> bool {
        if self.get(&key) == Some(&value) {
            self.remove(&key);
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
