//! # speed-comparison
//!
//! A microbenchmark harness that times single insertion, search, and removal
//! operations across pairs of standard collection implementations and prints
//! the elapsed nanoseconds per operation:
//!
//! - **Sequences**: `Vec` (contiguous) vs `LinkedList` (node chain)
//! - **Sets**: `HashSet` (hash-based) vs `BTreeSet` (ordered)
//! - **Maps**: `HashMap` (hash-based) vs `BTreeMap` (ordered)
//!
//! The whole program is one straight-line script: initialize six fixed-size
//! collections, run the scripted measurements phase by phase, print one line
//! per measurement. Each measurement is a single timed call, not an averaged
//! series; this is instructional benchmarking code, not a statistics
//! framework.
//!
//! ## Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use speed_comparison::{BenchParams, Reporter, run};
//!
//! let params = BenchParams::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut reporter = Reporter::new(Vec::new());
//! run(&params, &mut rng, &mut reporter).unwrap();
//!
//! let output = String::from_utf8(reporter.into_inner()).unwrap();
//! assert!(output.contains("time spent:"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod params;
pub mod report;
pub mod runner;
pub mod timing;

pub use collections::{MapOps, Sequence, SetOps};
pub use params::BenchParams;
pub use report::Reporter;
pub use runner::{BenchCollections, initialize, run};
pub use timing::{Measurement, time_operation};
