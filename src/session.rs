//! Driver context: the registered collection and its sortedness.
//!
//! A [`Session`] replaces the implicit global state of a menu loop. It owns the
//! [`Collection`] and the sorted-by-name flag required by binary search, and it
//! keeps the flag in step with every mutation.

use crate::algo::{Search, SortKey, search_by_name_with, sort_by_with};
use crate::core::{Collection, Component};
use crate::error::{Error, Result};
use crate::metrics::{Clock, Metrics, MonotonicClock};

/// Registered components plus the sorted-by-name flag, timed by a [`Clock`].
#[derive(Debug)]
pub struct Session<C: Clock = MonotonicClock> {
    components: Collection,
    sorted_by_name: bool,
    clock: C,
}

impl Session<MonotonicClock> {
    /// Creates an empty session timed by a [`MonotonicClock`].
    pub fn new() -> Self {
        Self::with_clock(MonotonicClock::new())
    }
}

impl Default for Session<MonotonicClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Session<C> {
    /// Creates an empty session that times every run with `clock`.
    pub fn with_clock(clock: C) -> Self {
        Self {
            components: Collection::new(),
            sorted_by_name: false,
            clock,
        }
    }

    /// Returns the registered components in their current order.
    pub fn components(&self) -> &Collection {
        &self.components
    }

    /// Returns the component at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Component> {
        self.components.get(index)
    }

    /// Whether the collection is currently ordered by name.
    pub fn is_sorted_by_name(&self) -> bool {
        self.sorted_by_name
    }

    /// Replaces the registered components and clears the sorted flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if more than
    /// [`CAPACITY`](crate::core::CAPACITY) components are given; the previous
    /// collection is kept in that case.
    pub fn register(&mut self, components: Vec<Component>) -> Result<()> {
        self.components = Collection::from_components(components)?;
        self.sorted_by_name = false;
        tracing::debug!(count = self.components.len(), "components registered");
        Ok(())
    }

    /// Sorts the collection in place by `key`.
    ///
    /// Sorting by name sets the sorted flag; any other key clears it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if nothing is registered.
    pub fn sort(&mut self, key: SortKey) -> Result<Metrics> {
        if self.components.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let metrics = sort_by_with(&self.clock, key, &mut *self.components);
        self.sorted_by_name = key == SortKey::Name;
        tracing::debug!(%key, sorted_by_name = self.sorted_by_name, "collection reordered");
        Ok(metrics)
    }

    /// Binary-searches the collection for `key` by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCollection`] if nothing is registered and
    /// [`Error::NotSortedByName`] unless the last sort was by name.
    pub fn search(&self, key: &str) -> Result<Search> {
        if self.components.is_empty() {
            return Err(Error::EmptyCollection);
        }
        if !self.sorted_by_name {
            tracing::warn!(key, "search refused: collection is not sorted by name");
            return Err(Error::NotSortedByName);
        }
        Ok(search_by_name_with(&self.clock, &*self.components, key))
    }
}
