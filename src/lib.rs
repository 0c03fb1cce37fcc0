//! # Towersort
//!
//! `towersort` manages a small, bounded registry of labeled components (name,
//! type, priority) and orders it with three classic comparison sorts, each
//! instrumented with a comparison count and an elapsed time.
//!
//! ## Key Features
//!
//! - **Three sorts, three keys**: [`sort_by_name`] (bubble sort, ascending),
//!   [`sort_by_kind`] (insertion sort, ascending, stable) and
//!   [`sort_by_priority`] (selection sort, descending, leftmost maximum first).
//! - **Binary search**: [`search_by_name`] over a collection sorted by name.
//! - **Case-insensitive keys**: name and type compare with
//!   [`compare_ignore_case`], an ASCII-only case fold.
//! - **Instrumentation**: every run returns [`Metrics`] with the number of
//!   comparisons and the elapsed time read from an injectable [`Clock`].
//! - **Generic over records**: the [`Labeled`] trait lets any type expose its keys.
//!
//! ## Usage
//!
//! ```rust
//! use towersort::prelude::*;
//!
//! let mut data = vec![
//!     Component::new("Zeta", "core", 3).unwrap(),
//!     Component::new("Alpha", "hull", 9).unwrap(),
//!     Component::new("Mid", "core", 5).unwrap(),
//! ];
//!
//! let metrics = sort_by_name(&mut data);
//! assert_eq!(metrics.comparisons, 3);
//!
//! let search = search_by_name(&data, "alpha");
//! assert_eq!(search.index, Some(0));
//! ```
//!
//! ### Sessions
//!
//! [`Session`] owns a bounded [`Collection`] and tracks whether it is sorted by
//! name, refusing binary searches that would otherwise be meaningless.
//!
//! ```rust
//! use towersort::prelude::*;
//!
//! let mut session = Session::new();
//! session
//!     .register(vec![
//!         Component::new("Pump", "hydraulics", 4).unwrap(),
//!         Component::new("Antenna", "control", 7).unwrap(),
//!     ])
//!     .unwrap();
//!
//! assert!(session.search("pump").is_err());
//! session.sort(SortKey::Name).unwrap();
//! assert_eq!(session.search("pump").unwrap().index, Some(1));
//! ```
//!
//! ## Performance Characteristics
//!
//! All three sorts are quadratic in the worst case. The bubble sort stops after
//! a pass without swaps, so an already sorted input costs `n - 1` comparisons.
//! The collection is capped at [`CAPACITY`] components.

pub mod algo;
pub mod core;
pub mod display;
pub mod driver;
pub mod error;
pub mod input;
pub mod metrics;
pub mod session;

pub use algo::{
    Search, SortKey, search_by_name, search_by_name_with, sort_by, sort_by_kind,
    sort_by_kind_with, sort_by_name, sort_by_name_with, sort_by_priority, sort_by_priority_with,
    sort_by_with,
};
pub use crate::core::{CAPACITY, Collection, Component, Labeled, Priority, compare_ignore_case};
pub use driver::Driver;
pub use error::{Error, Result};
pub use metrics::{Clock, Comparisons, Metrics, MonotonicClock};
pub use session::Session;

pub mod prelude {
    pub use crate::algo::{
        Search, SortKey, search_by_name, sort_by_kind, sort_by_name, sort_by_priority,
    };
    pub use crate::core::{Collection, Component, Labeled, compare_ignore_case};
    pub use crate::metrics::{Clock, Metrics, MonotonicClock};
    pub use crate::session::Session;
}
