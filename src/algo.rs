//! Instrumented sorting and searching procedures.
//!
//! This module implements three classic comparison sorts and a binary search:
//! - **Bubble Sort** by name, ascending, with early exit on a pass without swaps.
//! - **Insertion Sort** by type, ascending, stable.
//! - **Selection Sort** by priority, descending, leftmost maximum wins ties.
//! - **Binary Search** by name over a collection already sorted by name.
//!
//! Each procedure comes in two layers. The bare procedures
//! ([`bubble_sort_by_name`], [`insertion_sort_by_kind`],
//! [`selection_sort_by_priority`], [`binary_search_by_name`]) tick a
//! caller-supplied [`Comparisons`] counter. The measured entry points
//! ([`sort_by_name`], [`sort_by_kind`], [`sort_by_priority`],
//! [`search_by_name`] and their `_with` variants) wrap them in
//! [`measure`] and return [`Metrics`].
//!
//! Name and type keys are compared with [`compare_ignore_case`].

use crate::core::{Labeled, compare_ignore_case};
use crate::metrics::{Clock, Comparisons, Metrics, MonotonicClock, measure};
use std::fmt;

/// The key a collection is ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Ascending by name, bubble sort.
    Name,
    /// Ascending by type, insertion sort.
    Kind,
    /// Descending by priority, selection sort.
    Priority,
}

impl SortKey {
    /// Name of the algorithm used for this key.
    pub fn algorithm(self) -> &'static str {
        match self {
            SortKey::Name => "Bubble Sort",
            SortKey::Kind => "Insertion Sort",
            SortKey::Priority => "Selection Sort",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Name => "NAME",
            SortKey::Kind => "TYPE",
            SortKey::Priority => "PRIORITY",
        };
        f.write_str(label)
    }
}

/// Result of a binary search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Search {
    /// Position of the match, or `None` if the key is absent.
    pub index: Option<usize>,
    /// Comparisons made and time spent.
    pub metrics: Metrics,
}

/// Sorts `data` ascending by name using bubble sort.
///
/// Every adjacent comparison ticks `counter`. The sort stops after the first
/// pass that performs no swap, so an already sorted input costs `n - 1`
/// comparisons.
pub fn bubble_sort_by_name<T: Labeled>(data: &mut [T], counter: &mut Comparisons) {
    let len = data.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for i in 0..len - 1 - pass {
            counter.tick();
            if compare_ignore_case(data[i].name(), data[i + 1].name()).is_gt() {
                data.swap(i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Sorts `data` ascending by type using insertion sort.
///
/// Each element from the second onward moves left while its predecessor's type
/// is strictly greater. Every comparison ticks `counter`, including the one
/// that stops the shift. Elements with equal types keep their relative order.
pub fn insertion_sort_by_kind<T: Labeled>(data: &mut [T], counter: &mut Comparisons) {
    for i in 1..data.len() {
        let mut j = i;
        while j > 0 {
            counter.tick();
            if compare_ignore_case(data[j - 1].kind(), data[j].kind()).is_gt() {
                data.swap(j - 1, j);
                j -= 1;
            } else {
                break;
            }
        }
    }
}

/// Sorts `data` descending by priority using selection sort.
///
/// For each position the remaining suffix is scanned for the strictly greatest
/// priority, so the leftmost of several equal maxima is selected. Every scanned
/// element ticks `counter`.
pub fn selection_sort_by_priority<T: Labeled>(data: &mut [T], counter: &mut Comparisons) {
    let len = data.len();
    for i in 0..len.saturating_sub(1) {
        let mut max = i;
        for j in i + 1..len {
            counter.tick();
            if data[j].priority() > data[max].priority() {
                max = j;
            }
        }
        if max != i {
            data.swap(i, max);
        }
    }
}

/// Finds `key` by name in `data` using binary search.
///
/// `data` must already be sorted ascending by name; this is not checked and an
/// unsorted input yields an unspecified index or `None`. Each probe ticks
/// `counter` once. With duplicate names, whichever match the probe path reaches
/// first is returned.
pub fn binary_search_by_name<T: Labeled>(
    data: &[T],
    key: &str,
    counter: &mut Comparisons,
) -> Option<usize> {
    // Closed interval [left, right - 1]; `right` is kept one past the end so it never underflows.
    let mut left = 0;
    let mut right = data.len();
    while left < right {
        let mid = left + (right - 1 - left) / 2;
        counter.tick();
        match compare_ignore_case(data[mid].name(), key) {
            std::cmp::Ordering::Equal => return Some(mid),
            std::cmp::Ordering::Less => left = mid + 1,
            std::cmp::Ordering::Greater => right = mid,
        }
    }
    None
}

fn run_sort<T, C>(clock: &C, data: &mut [T], key: SortKey) -> Metrics
where
    T: Labeled,
    C: Clock + ?Sized,
{
    let len = data.len();
    if len < 2 {
        return Metrics::default();
    }

    let ((), metrics) = measure(clock, |counter| match key {
        SortKey::Name => bubble_sort_by_name(data, counter),
        SortKey::Kind => insertion_sort_by_kind(data, counter),
        SortKey::Priority => selection_sort_by_priority(data, counter),
    });

    tracing::trace!(
        algorithm = key.algorithm(),
        %key,
        len,
        comparisons = metrics.comparisons,
        elapsed = ?metrics.elapsed,
        "sort complete"
    );
    metrics
}

/// Sorts `data` by `key` in place, timed with `clock`.
///
/// Inputs of length 0 or 1 are left untouched and report zero comparisons and
/// zero elapsed time.
pub fn sort_by_with<T: Labeled, C: Clock + ?Sized>(
    clock: &C,
    key: SortKey,
    data: &mut [T],
) -> Metrics {
    run_sort(clock, data, key)
}

/// Sorts `data` by `key` in place, timed with a [`MonotonicClock`].
pub fn sort_by<T: Labeled>(key: SortKey, data: &mut [T]) -> Metrics {
    run_sort(&MonotonicClock::new(), data, key)
}

/// Sorts `data` ascending by name (bubble sort), timed with `clock`.
pub fn sort_by_name_with<T: Labeled, C: Clock + ?Sized>(clock: &C, data: &mut [T]) -> Metrics {
    run_sort(clock, data, SortKey::Name)
}

/// Sorts `data` ascending by type (insertion sort), timed with `clock`.
pub fn sort_by_kind_with<T: Labeled, C: Clock + ?Sized>(clock: &C, data: &mut [T]) -> Metrics {
    run_sort(clock, data, SortKey::Kind)
}

/// Sorts `data` descending by priority (selection sort), timed with `clock`.
pub fn sort_by_priority_with<T: Labeled, C: Clock + ?Sized>(
    clock: &C,
    data: &mut [T],
) -> Metrics {
    run_sort(clock, data, SortKey::Priority)
}

/// Sorts `data` ascending by name, case-insensitively.
///
/// # Examples
///
/// ```
/// use towersort::{Component, Labeled, sort_by_name};
///
/// let mut data = vec![
///     Component::new("Zeta", "core", 3).unwrap(),
///     Component::new("Alpha", "hull", 9).unwrap(),
///     Component::new("Mid", "core", 5).unwrap(),
/// ];
/// let metrics = sort_by_name(&mut data);
///
/// let names: Vec<&str> = data.iter().map(|c| c.name()).collect();
/// assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
/// assert_eq!(metrics.comparisons, 3);
/// ```
pub fn sort_by_name<T: Labeled>(data: &mut [T]) -> Metrics {
    sort_by(SortKey::Name, data)
}

/// Sorts `data` ascending by type, case-insensitively and stably.
pub fn sort_by_kind<T: Labeled>(data: &mut [T]) -> Metrics {
    sort_by(SortKey::Kind, data)
}

/// Sorts `data` descending by priority.
pub fn sort_by_priority<T: Labeled>(data: &mut [T]) -> Metrics {
    sort_by(SortKey::Priority, data)
}

/// Binary-searches `data` for `key` by name, timed with `clock`.
///
/// See [`binary_search_by_name`] for the sortedness precondition. An empty
/// input reports `None` with zero metrics.
pub fn search_by_name_with<T: Labeled, C: Clock + ?Sized>(
    clock: &C,
    data: &[T],
    key: &str,
) -> Search {
    if data.is_empty() {
        return Search {
            index: None,
            metrics: Metrics::default(),
        };
    }

    let (index, metrics) = measure(clock, |counter| {
        binary_search_by_name(data, key, counter)
    });
    tracing::trace!(
        len = data.len(),
        found = index.is_some(),
        comparisons = metrics.comparisons,
        elapsed = ?metrics.elapsed,
        "binary search complete"
    );
    Search { index, metrics }
}

/// Binary-searches `data` for `key` by name, case-insensitively.
///
/// # Examples
///
/// ```
/// use towersort::{Component, search_by_name, sort_by_name};
///
/// let mut data = vec![
///     Component::new("Zeta", "core", 3).unwrap(),
///     Component::new("Alpha", "hull", 9).unwrap(),
///     Component::new("Mid", "core", 5).unwrap(),
/// ];
/// sort_by_name(&mut data);
///
/// assert_eq!(search_by_name(&data, "alpha").index, Some(0));
/// assert_eq!(search_by_name(&data, "omega").index, None);
/// ```
pub fn search_by_name<T: Labeled>(data: &[T], key: &str) -> Search {
    search_by_name_with(&MonotonicClock::new(), data, key)
}
