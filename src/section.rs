//! Named groups of key/value assignments.
//!
//! A [`Section`] corresponds to one `[Name]` header in the file. Its keys are
//! case-insensitive, kept in first-insertion order, and each maps to every
//! value assigned to it, in the order the assignments appeared.
//!
//! ## Examples
//!
//! ```rust
//! use launcher_ini::{Operator, Section};
//!
//! let mut section = Section::new("DedicatedServer");
//! section.add("Map", "DM-Deck", Operator::Assign);
//! section.add("Map", "CTF-Face", Operator::Append);
//!
//! assert_eq!(section.get_string("map"), Some("DM-Deck"));
//! assert_eq!(section.get_all("MAP").len(), 2);
//!
//! section.set("Map", "DM-Morpheus", Operator::Assign);
//! assert_eq!(section.get_all("map").len(), 1);
//! ```

use crate::{KeyMap, Operator, ValueEntry};
use serde::Serialize;

/// A named, ordered collection of keys with their value entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    name: String,
    keys: KeyMap,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Section {
            name: name.into(),
            keys: KeyMap::new(),
        }
    }

    /// The section name, exactly as written between the brackets.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends a value to `key`. Existing values are kept.
    pub fn add(&mut self, key: &str, value: impl Into<String>, operator: Operator) {
        self.keys.push(key, ValueEntry::new(value, operator));
    }

    /// Removes every value of `key` whose text equals `value` exactly.
    ///
    /// Returns how many entries were removed. When the last entry goes, the
    /// key goes with it.
    pub fn remove(&mut self, key: &str, value: &str) -> usize {
        self.keys.retain_values(key, |entry| entry.text() != value)
    }

    /// Replaces all values of `key` with a single entry.
    pub fn set(&mut self, key: &str, value: impl Into<String>, operator: Operator) {
        self.keys.replace(key, ValueEntry::new(value, operator));
    }

    /// Returns every entry for `key` in assignment order, or an empty slice.
    #[must_use]
    pub fn get_all(&self, key: &str) -> &[ValueEntry] {
        self.keys.get(key).unwrap_or_default()
    }

    /// Returns the text of the first entry for `key`.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.first(key)
    }

    /// Interprets the first entry for `key` as a flag.
    ///
    /// Missing or empty values yield `default`. Anything else is `true`
    /// unless it reads `0` or `false` (ignoring case).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use launcher_ini::{Operator, Section};
    ///
    /// let mut section = Section::new("S");
    /// section.add("Lan", "FALSE", Operator::Assign);
    /// section.add("Public", "yes", Operator::Assign);
    /// section.add("Ranked", "", Operator::Assign);
    ///
    /// assert!(!section.get_bool("lan", true));
    /// assert!(section.get_bool("public", false));
    /// assert!(section.get_bool("ranked", true));
    /// ```
    #[must_use]
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.first(key) {
            None | Some("") => default,
            Some(text) => {
                let text = text.to_lowercase();
                text != "0" && text != "false"
            }
        }
    }

    /// Parses the first entry for `key` as an integer, or returns `default`.
    #[must_use]
    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        self.first(key)
            .and_then(|text| text.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Parses the first entry for `key` as a decimal, or returns `default`.
    ///
    /// Infinities and NaN are treated as parse failures.
    #[must_use]
    pub fn get_decimal(&self, key: &str, default: f64) -> f64 {
        self.first(key)
            .and_then(|text| text.trim().parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .unwrap_or(default)
    }

    /// Returns `true` if `key` has at least one entry.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }

    /// Keys in first-insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.keys()
    }

    /// `(key, entries)` pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValueEntry])> + '_ {
        self.keys.iter()
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if the section holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.keys
            .get(key)
            .and_then(|values| values.first())
            .map(ValueEntry::text)
    }
}
