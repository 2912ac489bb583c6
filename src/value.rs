//! Value entries: one assignment occurrence for a key.
//!
//! A key in a section can be assigned many times. Each assignment line becomes
//! a [`ValueEntry`] holding the raw text and the [`Operator`] that introduced
//! it. The operator is kept as metadata only; reconciling `+=` and `-=` into
//! effective value lists is left to the caller.
//!
//! ```rust
//! use launcher_ini::{Operator, ValueEntry};
//!
//! let entry = ValueEntry::new("Map=CTF-Face", Operator::Append);
//! assert_eq!(entry.text(), "Map=CTF-Face");
//! assert_eq!(entry.operator().as_str(), "+=");
//! ```

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The assignment operator of a value entry.
///
/// # Examples
///
/// ```rust
/// use launcher_ini::Operator;
///
/// assert_eq!("+=".parse::<Operator>().unwrap(), Operator::Append);
/// assert_eq!(Operator::Remove.to_string(), "-=");
/// assert_eq!(Operator::default(), Operator::Assign);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operator {
    /// `=`
    #[default]
    #[serde(rename = "=")]
    Assign,
    /// `+=`
    #[serde(rename = "+=")]
    Append,
    /// `-=`
    #[serde(rename = "-=")]
    Remove,
}

impl Operator {
    /// Returns the literal token written in the file.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Assign => "=",
            Operator::Append => "+=",
            Operator::Remove => "-=",
        }
    }

    /// Maps the character in front of `=` to an operator, if it forms one.
    pub(crate) fn from_prefix(ch: u8) -> Option<Self> {
        match ch {
            b'+' => Some(Operator::Append),
            b'-' => Some(Operator::Remove),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(Operator::Assign),
            "+=" => Ok(Operator::Append),
            "-=" => Ok(Operator::Remove),
            other => Err(Error::InvalidOperator(other.to_string())),
        }
    }
}

/// An immutable `(text, operator)` pair.
///
/// The text is stored exactly as parsed and may contain embedded newlines when
/// the value was written across several lines with backslash continuations.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValueEntry {
    text: String,
    operator: Operator,
}

impl ValueEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(text: impl Into<String>, operator: Operator) -> Self {
        ValueEntry {
            text: text.into(),
            operator,
        }
    }

    /// The raw value text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The operator that introduced this value.
    #[must_use]
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Returns `true` if the text spans more than one line.
    #[must_use]
    pub fn is_multiline(&self) -> bool {
        self.text.contains('\n')
    }
}

impl From<&str> for ValueEntry {
    fn from(text: &str) -> Self {
        ValueEntry::new(text, Operator::Assign)
    }
}

impl From<(&str, Operator)> for ValueEntry {
    fn from((text, operator): (&str, Operator)) -> Self {
        ValueEntry::new(text, operator)
    }
}

impl fmt::Display for ValueEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.text)
    }
}
