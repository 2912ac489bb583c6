//! INI serialization.
//!
//! Writes a [`Document`] back to text:
//!
//! ```text
//! [Name]
//! key=value
//! key+=value
//!
//! [Next]
//! ...
//! ```
//!
//! Every section in the sequence is written, duplicates included, followed by
//! one blank line. Keys come out in first-insertion order with each of their
//! entries in turn, using the stored spelling of the key and the literal
//! operator token.
//!
//! Comments are not written since the parser never keeps them.
//!
//! ## Multi-line values
//!
//! By default a value with embedded newlines is written as is, so the output
//! contains the raw line breaks and reading it back splits the value apart:
//!
//! ```rust
//! use launcher_ini::{from_str, to_string};
//!
//! let doc = from_str("[S]\ndesc=hello \\\nworld\n");
//! assert_eq!(to_string(&doc), "[S]\ndesc=hello\nworld\n\n");
//!
//! let reread = from_str(&to_string(&doc));
//! assert_eq!(reread.section("S").unwrap().get_string("desc"), Some("hello"));
//! ```
//!
//! [`SerializeOptions::with_escape_continuations`] writes them as backslash
//! continuations instead.

use crate::{Document, LineEnding, SerializeOptions};

/// The INI serializer.
///
/// Accumulates output in a `String`; see [`Serializer::into_inner`].
pub struct Serializer<'o> {
    output: String,
    options: &'o SerializeOptions,
}

impl<'o> Serializer<'o> {
    /// Creates a serializer with an empty output buffer.
    pub fn new(options: &'o SerializeOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
        }
    }

    /// Returns the text written so far.
    pub fn into_inner(self) -> String {
        self.output
    }

    fn newline(&mut self) {
        self.output.push_str(self.options.line_ending.as_str());
    }

    fn write_value(&mut self, text: &str) {
        if !self.options.escape_continuations {
            self.output.push_str(text);
            return;
        }
        let mut lines = text.split('\n');
        if let Some(first) = lines.next() {
            self.output.push_str(first);
        }
        for line in lines {
            self.output.push('\\');
            self.newline();
            self.output.push_str(line);
        }
    }

    /// Writes every section of `doc`.
    pub fn serialize_document(&mut self, doc: &Document) {
        for section in doc.sections() {
            self.output.push('[');
            self.output.push_str(section.name());
            self.output.push(']');
            self.newline();

            for (key, values) in section.iter() {
                for value in values {
                    self.output.push_str(key);
                    self.output.push_str(value.operator().as_str());
                    self.write_value(value.text());
                    self.newline();
                }
            }
            self.newline();
        }
    }
}

/// Renders `doc` with custom options.
#[must_use]
pub fn to_string_with_options(doc: &Document, options: &SerializeOptions) -> String {
    let mut serializer = Serializer::new(options);
    serializer.serialize_document(doc);
    serializer.into_inner()
}

/// Renders `doc` with default options.
#[must_use]
pub fn to_string(doc: &Document) -> String {
    to_string_with_options(doc, &SerializeOptions::default())
}
