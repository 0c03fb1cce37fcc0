//! Core traits and types for towersort.
//!
//! This module defines:
//! - [`Labeled`]: The trait the sorting and searching procedures read keys through.
//! - [`Component`]: A named, typed, prioritized piece of equipment.
//! - [`Collection`]: The bounded registry of components.
//! - [`compare_ignore_case`]: The ordering rule shared by the name and type sorts.

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

/// Maximum number of components a [`Collection`] holds.
pub const CAPACITY: usize = 20;

/// Maximum length of a component name, in bytes.
pub const MAX_NAME_LEN: usize = 29;

/// Maximum length of a component type, in bytes.
pub const MAX_KIND_LEN: usize = 19;

/// Name stored when the registered name is empty.
pub const DEFAULT_NAME: &str = "SEM_NOME";

/// Type stored when the registered type is empty.
pub const DEFAULT_KIND: &str = "GENERIC";

/// Lowest valid priority.
pub const MIN_PRIORITY: u8 = 1;

/// Highest valid priority.
pub const MAX_PRIORITY: u8 = 10;

/// Compares two strings ignoring ASCII case.
///
/// Bytes are folded with [`u8::to_ascii_lowercase`] and compared one by one, so
/// only `A-Z`/`a-z` are treated as equal across case; every other byte compares
/// by its unsigned value. A string that is a strict prefix of the other sorts first.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use towersort::compare_ignore_case;
///
/// assert_eq!(compare_ignore_case("Alpha", "alpha"), Ordering::Equal);
/// assert_eq!(compare_ignore_case("alp", "ALPHA"), Ordering::Less);
/// assert_eq!(compare_ignore_case("beta", "Alpha"), Ordering::Greater);
/// ```
#[inline]
// Bytes outside ASCII compare as unsigned, so accented names sort after `z`.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    let a = a.bytes().map(|c| c.to_ascii_lowercase());
    let b = b.bytes().map(|c| c.to_ascii_lowercase());
    a.cmp(b)
}

/// A trait for reading the sort keys of an item.
///
/// The procedures in [`crate::algo`] are generic over slices of `Labeled`
/// items, so any record exposing a name, a type and a priority can be sorted
/// without converting it into a [`Component`] first.
///
/// # Examples
///
/// ```
/// use towersort::{Labeled, sort_by_priority};
///
/// struct Part {
///     label: String,
///     urgency: u8,
/// }
///
/// impl Labeled for Part {
///     fn name(&self) -> &str {
///         &self.label
///     }
///
///     fn kind(&self) -> &str {
///         "part"
///     }
///
///     fn priority(&self) -> u8 {
///         self.urgency
///     }
/// }
///
/// let mut parts = vec![
///     Part { label: "bolt".into(), urgency: 2 },
///     Part { label: "engine".into(), urgency: 9 },
/// ];
/// sort_by_priority(&mut parts);
/// assert_eq!(parts[0].label, "engine");
/// ```
pub trait Labeled {
    /// Key used by the name sort and the binary search.
    fn name(&self) -> &str;

    /// Key used by the type sort.
    fn kind(&self) -> &str;

    /// Key used by the priority sort (higher first).
    fn priority(&self) -> u8;
}

impl<T: Labeled + ?Sized> Labeled for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn kind(&self) -> &str {
        (**self).kind()
    }

    fn priority(&self) -> u8 {
        (**self).priority()
    }
}

/// A validated priority in `1..=10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(u8);

impl Priority {
    /// Returns the raw value.
    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Priority {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        if (i64::from(MIN_PRIORITY)..=i64::from(MAX_PRIORITY)).contains(&value) {
            Ok(Priority(value as u8))
        } else {
            Err(Error::PriorityOutOfRange(value))
        }
    }
}

/// A piece of equipment to assemble.
#[derive(Clone, Debug)]
pub struct Component {
    name: String,
    kind: String,
    priority: Priority,
}

impl Component {
    /// Builds a component, applying the registration rules.
    ///
    /// A trailing line break is stripped, the name is cut to [`MAX_NAME_LEN`]
    /// bytes and the type to [`MAX_KIND_LEN`] bytes. Empty fields fall back to
    /// [`DEFAULT_NAME`] and [`DEFAULT_KIND`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::PriorityOutOfRange`] if `priority` is outside `1..=10`.
    pub fn new(name: &str, kind: &str, priority: i64) -> Result<Self> {
        Ok(Self::with_priority(name, kind, Priority::try_from(priority)?))
    }

    /// Builds a component from an already validated priority.
    ///
    /// Name and type follow the same rules as [`Component::new`].
    pub fn with_priority(name: &str, kind: &str, priority: Priority) -> Self {
        Self {
            name: bounded_field(name, MAX_NAME_LEN, DEFAULT_NAME),
            kind: bounded_field(kind, MAX_KIND_LEN, DEFAULT_KIND),
            priority,
        }
    }
}

impl Labeled for Component {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn priority(&self) -> u8 {
        self.priority.get()
    }
}

/// Cuts `raw` to at most `max_len` bytes without splitting a character.
pub fn truncate_to(raw: &str, max_len: usize) -> &str {
    let mut end = raw.len().min(max_len);
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    &raw[..end]
}

fn bounded_field(raw: &str, max_len: usize, fallback: &str) -> String {
    let raw = raw.strip_suffix('\n').unwrap_or(raw);
    let raw = raw.strip_suffix('\r').unwrap_or(raw);
    if raw.is_empty() {
        return fallback.to_string();
    }
    truncate_to(raw, max_len).to_string()
}

/// The bounded, ordered registry of components.
///
/// Its length never exceeds [`CAPACITY`]. It dereferences to a slice, so the
/// sorting procedures can reorder it in place but cannot resize it.
#[derive(Clone, Debug, Default)]
pub struct Collection {
    items: Vec<Component>,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(CAPACITY),
        }
    }

    /// Builds a collection from `components`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if more than [`CAPACITY`] components are given.
    pub fn from_components(components: Vec<Component>) -> Result<Self> {
        if components.len() > CAPACITY {
            return Err(Error::CapacityExceeded { capacity: CAPACITY });
        }
        Ok(Self { items: components })
    }

    /// Appends a component.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the collection is full.
    pub fn push(&mut self, component: Component) -> Result<()> {
        if self.is_full() {
            return Err(Error::CapacityExceeded { capacity: CAPACITY });
        }
        self.items.push(component);
        Ok(())
    }

    /// Returns `true` once [`CAPACITY`] components are stored.
    pub fn is_full(&self) -> bool {
        self.items.len() >= CAPACITY
    }
}

impl Deref for Collection {
    type Target = [Component];

    fn deref(&self) -> &[Component] {
        &self.items
    }
}

impl DerefMut for Collection {
    fn deref_mut(&mut self) -> &mut [Component] {
        &mut self.items
    }
}
