//! Initialization and the scripted measurement phases.
//!
//! The run is one straight-line script with no branching on results:
//! build the six collections, then list phase, set phase, map phase. Each
//! phase measures one operation at a time against both variants of a pair
//! and closes every variant-A/variant-B round with a blank line.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList};
use std::io::{self, Write};

use rand::Rng;

use crate::collections::{MapOps, Sequence, SetOps};
use crate::params::BenchParams;
use crate::report::Reporter;
use crate::timing::{Measurement, time_operation};

// =============================================================================
// BenchCollections
// =============================================================================

/// The six collections under test, alive for the whole run.
#[derive(Debug, Clone)]
pub struct BenchCollections {
    /// Array-backed sequence variant.
    pub vector: Vec<i32>,
    /// Node-chain sequence variant, derived from `vector`.
    pub linked_list: LinkedList<i32>,
    /// Hash-based set variant, derived from `vector`.
    pub hash_set: HashSet<i32>,
    /// Ordered set variant, derived from `vector`.
    pub btree_set: BTreeSet<i32>,
    /// Hash-based map variant, keys `0..N` to random values.
    pub hash_map: HashMap<i32, i32>,
    /// Ordered map variant, derived by copying `hash_map`'s entries.
    pub btree_map: BTreeMap<i32, i32>,
}

/// Builds the six collections.
///
/// One loop over `0..collection_size` fills the vector and the hash map
/// (map values drawn from `rng`); the other four collections are derived
/// from those two, so each pair starts with equivalent logical content.
pub fn initialize(params: &BenchParams, rng: &mut impl Rng) -> BenchCollections {
    let size = params.collection_size;
    let mut vector = Vec::with_capacity(size);
    let mut hash_map = HashMap::with_capacity(size);
    for value in 0..size as i32 {
        vector.push(value);
        hash_map.insert(value, rng.random::<i32>());
    }

    let linked_list: LinkedList<i32> = vector.iter().copied().collect();
    let hash_set: HashSet<i32> = vector.iter().copied().collect();
    let btree_set: BTreeSet<i32> = vector.iter().copied().collect();
    let btree_map: BTreeMap<i32, i32> = hash_map.iter().map(|(&key, &value)| (key, value)).collect();

    BenchCollections {
        vector,
        linked_list,
        hash_set,
        btree_set,
        hash_map,
        btree_map,
    }
}

// =============================================================================
// Measurement helpers
// =============================================================================

fn measure_sequence_insert<S: Sequence, W: Write>(
    sequence: &mut S,
    element: i32,
    index: usize,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let ((), elapsed) = time_operation(|| sequence.insert_at(index, element));
    reporter.record(&Measurement {
        operation: format!("Element addition to index {index}"),
        collection: S::LABEL,
        elapsed,
    })
}

fn measure_sequence_search<S: Sequence, W: Write>(
    sequence: &S,
    element: i32,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (_, elapsed) = time_operation(|| sequence.contains_element(element));
    reporter.record(&Measurement {
        operation: "Element search".to_string(),
        collection: S::LABEL,
        elapsed,
    })
}

fn measure_sequence_removal<S: Sequence, W: Write>(
    sequence: &mut S,
    element: i32,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (_, elapsed) = time_operation(|| sequence.remove_element(element));
    reporter.record(&Measurement {
        operation: "Element removal".to_string(),
        collection: S::LABEL,
        elapsed,
    })
}

fn measure_set_insert<S: SetOps, W: Write>(
    set: &mut S,
    element: i32,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (_, elapsed) = time_operation(|| set.insert_element(element));
    reporter.record(&Measurement {
        operation: "Element addition".to_string(),
        collection: S::LABEL,
        elapsed,
    })
}

fn measure_set_search<S: SetOps, W: Write>(
    set: &S,
    element: i32,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (_, elapsed) = time_operation(|| set.contains_element(element));
    reporter.record(&Measurement {
        operation: "Element search".to_string(),
        collection: S::LABEL,
        elapsed,
    })
}

fn measure_set_removal<S: SetOps, W: Write>(
    set: &mut S,
    element: i32,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (_, elapsed) = time_operation(|| set.remove_element(element));
    reporter.record(&Measurement {
        operation: "Element removal".to_string(),
        collection: S::LABEL,
        elapsed,
    })
}

fn measure_map_insert<M: MapOps, W: Write>(
    map: &mut M,
    key: i32,
    value: i32,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (_, elapsed) = time_operation(|| map.insert_entry(key, value));
    reporter.record(&Measurement {
        operation: "Element addition".to_string(),
        collection: M::LABEL,
        elapsed,
    })
}

fn measure_map_value_search<M: MapOps, W: Write>(
    map: &M,
    value: i32,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (_, elapsed) = time_operation(|| map.contains_value(value));
    reporter.record(&Measurement {
        operation: "Element search".to_string(),
        collection: M::LABEL,
        elapsed,
    })
}

fn measure_map_removal<M: MapOps, W: Write>(
    map: &mut M,
    key: i32,
    value: i32,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (_, elapsed) = time_operation(|| map.remove_if_value_eq(key, value));
    reporter.record(&Measurement {
        operation: "Element removal".to_string(),
        collection: M::LABEL,
        elapsed,
    })
}

// =============================================================================
// Phases
// =============================================================================

/// Sequence phase: insertion at start, middle, and end, each round followed
/// by a search and a removal, against both sequence variants.
///
/// # Errors
///
/// Propagates any writer error from the reporter.
pub fn list_phase<W: Write>(
    collections: &mut BenchCollections,
    params: &BenchParams,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let element = params.element;

    // Working with the beginning of the sequences.
    measure_sequence_insert(&mut collections.vector, element, params.first_index(), reporter)?;
    measure_sequence_insert(
        &mut collections.linked_list,
        element,
        params.first_index(),
        reporter,
    )?;
    reporter.end_group()?;

    measure_sequence_search(&collections.vector, element, reporter)?;
    measure_sequence_search(&collections.linked_list, element, reporter)?;
    reporter.end_group()?;

    measure_sequence_removal(&mut collections.vector, element, reporter)?;
    measure_sequence_removal(&mut collections.linked_list, element, reporter)?;
    reporter.end_group()?;

    // Working with the middle of the sequences.
    measure_sequence_insert(&mut collections.vector, element, params.middle_index(), reporter)?;
    measure_sequence_insert(
        &mut collections.linked_list,
        element,
        params.middle_index(),
        reporter,
    )?;
    reporter.end_group()?;

    measure_sequence_search(&collections.vector, element, reporter)?;
    measure_sequence_search(&collections.linked_list, element, reporter)?;
    reporter.end_group()?;

    measure_sequence_removal(&mut collections.vector, element, reporter)?;
    measure_sequence_removal(&mut collections.linked_list, element, reporter)?;
    reporter.end_group()?;

    // Working with the end of the sequences; "end" is the current length of
    // each variant at the time of the call.
    let vector_end = collections.vector.len();
    measure_sequence_insert(&mut collections.vector, element, vector_end, reporter)?;
    let linked_list_end = collections.linked_list.len();
    measure_sequence_insert(&mut collections.linked_list, element, linked_list_end, reporter)?;
    reporter.end_group()?;

    measure_sequence_search(&collections.vector, element, reporter)?;
    measure_sequence_search(&collections.linked_list, element, reporter)?;
    reporter.end_group()?;

    measure_sequence_removal(&mut collections.vector, element, reporter)?;
    measure_sequence_removal(&mut collections.linked_list, element, reporter)?;
    reporter.end_group()
}

/// Set phase: one insertion, one membership check, one removal per variant.
///
/// # Errors
///
/// Propagates any writer error from the reporter.
pub fn set_phase<W: Write>(
    collections: &mut BenchCollections,
    params: &BenchParams,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let element = params.element;

    measure_set_insert(&mut collections.hash_set, element, reporter)?;
    measure_set_insert(&mut collections.btree_set, element, reporter)?;
    reporter.end_group()?;

    measure_set_search(&collections.hash_set, element, reporter)?;
    measure_set_search(&collections.btree_set, element, reporter)?;
    reporter.end_group()?;

    measure_set_removal(&mut collections.hash_set, element, reporter)?;
    measure_set_removal(&mut collections.btree_set, element, reporter)?;
    reporter.end_group()
}

/// Map phase: one insertion of `key → element`, one contains-value scan for
/// `element`, one conditional removal of `key` expecting `element`, per
/// variant.
///
/// # Errors
///
/// Propagates any writer error from the reporter.
pub fn map_phase<W: Write>(
    collections: &mut BenchCollections,
    params: &BenchParams,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let (key, element) = (params.key, params.element);

    measure_map_insert(&mut collections.hash_map, key, element, reporter)?;
    measure_map_insert(&mut collections.btree_map, key, element, reporter)?;
    reporter.end_group()?;

    measure_map_value_search(&collections.hash_map, element, reporter)?;
    measure_map_value_search(&collections.btree_map, element, reporter)?;
    reporter.end_group()?;

    measure_map_removal(&mut collections.hash_map, key, element, reporter)?;
    measure_map_removal(&mut collections.btree_map, key, element, reporter)?;
    reporter.end_group()
}

// =============================================================================
// run
// =============================================================================

/// Runs the whole benchmark script: initialization, then the three phases.
///
/// # Errors
///
/// Propagates any writer error from the reporter; nothing is caught or
/// retried.
pub fn run<W: Write>(
    params: &BenchParams,
    rng: &mut impl Rng,
    reporter: &mut Reporter<W>,
) -> io::Result<()> {
    let mut collections = initialize(params, rng);
    list_phase(&mut collections, params, reporter)?;
    set_phase(&mut collections, params, reporter)?;
    map_phase(&mut collections, params, reporter)
}

// =============================================================================
// Tests
// =============================================================================
