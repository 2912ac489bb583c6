//! Case-insensitive ordered key map.
//!
//! [`KeyMap`] backs every [`Section`](crate::Section). It wraps an
//! [`IndexMap`] keyed by the case-folded key, so lookups ignore case while
//! iteration follows first-insertion order. The spelling used on first insert
//! is the one kept for output.
//!
//! Folding lower-cases one character at a time with [`char::to_lowercase`].
//! The mapping is defined by Unicode alone, so it does not depend on the host
//! locale or on neighbouring characters.
//!
//! ## Examples
//!
//! ```rust
//! use launcher_ini::{KeyMap, Operator, ValueEntry};
//!
//! let mut map = KeyMap::new();
//! map.push("ServerName", ValueEntry::new("Toxikk", Operator::Assign));
//! map.push("SERVERNAME", ValueEntry::new("Backup", Operator::Assign));
//!
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get("servername").map(|v| v.len()), Some(2));
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec!["ServerName"]);
//! ```

use crate::ValueEntry;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
struct Slot {
    key: String,
    values: Vec<ValueEntry>,
}

/// An ordered map from case-insensitive keys to non-empty value lists.
///
/// No key is ever stored with an empty list: [`KeyMap::retain_values`] drops a
/// key whose last entry was removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct KeyMap(IndexMap<String, Slot>);

fn fold(key: &str) -> Cow<'_, str> {
    if key.chars().any(|c| c.to_lowercase().ne(std::iter::once(c))) {
        Cow::Owned(key.chars().flat_map(char::to_lowercase).collect())
    } else {
        Cow::Borrowed(key)
    }
}

impl KeyMap {
    /// Creates an empty `KeyMap`.
    #[must_use]
    pub fn new() -> Self {
        KeyMap(IndexMap::new())
    }

    /// Appends a value to `key`, creating the key at the end if absent.
    pub fn push(&mut self, key: &str, value: ValueEntry) {
        self.0
            .entry(fold(key).into_owned())
            .or_insert_with(|| Slot {
                key: key.to_string(),
                values: Vec::with_capacity(1),
            })
            .values
            .push(value);
    }

    /// Replaces the whole list for `key` with a single value.
    ///
    /// An existing key keeps both its position and its original spelling.
    pub fn replace(&mut self, key: &str, value: ValueEntry) {
        let folded = fold(key).into_owned();
        match self.0.get_mut(&folded) {
            Some(slot) => slot.values = vec![value],
            None => {
                self.0.insert(
                    folded,
                    Slot {
                        key: key.to_string(),
                        values: vec![value],
                    },
                );
            }
        }
    }

    /// Keeps only the values of `key` for which `keep` returns `true`.
    ///
    /// Returns the number of values dropped. The key itself is removed, and
    /// the order of the remaining keys preserved, once no values remain.
    pub fn retain_values<F>(&mut self, key: &str, mut keep: F) -> usize
    where
        F: FnMut(&ValueEntry) -> bool,
    {
        let folded = fold(key);
        let Some(slot) = self.0.get_mut(&*folded) else {
            return 0;
        };
        let before = slot.values.len();
        slot.values.retain(|v| keep(v));
        let removed = before - slot.values.len();
        if slot.values.is_empty() {
            self.0.shift_remove(&*folded);
        }
        removed
    }

    /// Returns the values stored under `key`, ignoring case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[ValueEntry]> {
        self.0.get(&*fold(key)).map(|s| s.values.as_slice())
    }

    /// Returns `true` if `key` is present, ignoring case.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(&*fold(key))
    }

    /// Returns the number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the keys in insertion order, with their stored spelling.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.values().map(|s| s.key.as_str())
    }

    /// Returns `(key, values)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValueEntry])> + '_ {
        self.0
            .values()
            .map(|s| (s.key.as_str(), s.values.as_slice()))
    }
}

impl Serialize for KeyMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}
