//! The INI document and its file lifecycle.
//!
//! A [`Document`] keeps two views of its sections:
//!
//! - the **sequence**, every section in the order it was added, including
//!   several sections with the same name when the file repeats a header;
//! - the **index**, which maps a name to the most recently added section
//!   with that name.
//!
//! [`Document::sections`] walks the sequence, [`Document::section`] and
//! [`Document::get_section`] consult the index. With duplicate headers the two
//! views disagree on purpose: the sequence still yields the older section
//! while the index only reaches the newest one.
//!
//! ## Examples
//!
//! ```rust
//! use launcher_ini::from_str;
//!
//! let doc = from_str("[A]\nk=1\n[A]\nk=2\n");
//!
//! assert_eq!(doc.sections().len(), 2);
//! assert_eq!(doc.sections()[0].get_string("k"), Some("1"));
//! assert_eq!(doc.section("A").unwrap().get_string("k"), Some("2"));
//! ```

use crate::de::Parser;
use crate::{ser, Error, Result, Section, SerializeOptions};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// An ordered collection of sections, optionally bound to a file.
#[derive(Debug, Clone, Default)]
pub struct Document {
    path: Option<PathBuf>,
    sections: Vec<Section>,
    index: HashMap<String, usize>,
}

impl Document {
    /// Creates an empty in-memory document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the file at `path`.
    ///
    /// A file that does not exist yields an empty document that will be
    /// created on [`save`](Document::save).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file exists but cannot be read. Bytes
    /// that are not valid UTF-8 are replaced with `U+FFFD` rather than
    /// rejected.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut parser = Parser::new(Document {
            path: Some(path.to_path_buf()),
            ..Self::default()
        });

        match fs::read(path) {
            Ok(bytes) => {
                debug!(path = %path.display(), bytes = bytes.len(), "loading ini file");
                parser.parse_lines(&String::from_utf8_lossy(&bytes));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "ini file not found, starting empty");
            }
            Err(e) => return Err(Error::io_at(path, &e)),
        }

        Ok(parser.finish())
    }

    /// The file this document was loaded from or last saved to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All sections in insertion order, duplicates included.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub(crate) fn sections_mut(&mut self) -> &mut [Section] {
        &mut self.sections
    }

    /// Looks up the most recently added section called `name`.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&i| &self.sections[i])
    }

    /// Looks up the most recently added section called `name` for editing.
    ///
    /// When no such section exists and `create` is `true`, an empty one is
    /// appended and indexed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use launcher_ini::{Document, Operator};
    ///
    /// let mut doc = Document::new();
    /// assert!(doc.get_section("Engine", false).is_none());
    ///
    /// doc.get_section("Engine", true)
    ///     .unwrap()
    ///     .add("Tick", "60", Operator::Assign);
    /// assert_eq!(doc.section("Engine").unwrap().get_int("tick", 0), 60);
    /// ```
    pub fn get_section(&mut self, name: &str, create: bool) -> Option<&mut Section> {
        let idx = match self.index.get(name).copied() {
            Some(i) => i,
            None if create => self.push_section(name),
            None => return None,
        };
        Some(&mut self.sections[idx])
    }

    /// Returns the section called `name`, creating it if needed.
    pub fn section_or_create(&mut self, name: &str) -> &mut Section {
        let idx = match self.index.get(name).copied() {
            Some(i) => i,
            None => self.push_section(name),
        };
        &mut self.sections[idx]
    }

    /// Appends a new section even if one with the same name exists.
    ///
    /// The new section becomes the one the index returns for `name`.
    pub fn append_section(&mut self, name: &str) -> &mut Section {
        let idx = self.push_section(name);
        &mut self.sections[idx]
    }

    /// Appends and indexes a section, returning its position.
    pub(crate) fn push_section(&mut self, name: &str) -> usize {
        let idx = self.sections.len();
        self.sections.push(Section::new(name));
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Rewrites the backing file from the current contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoPath`] for a document built in memory, or
    /// [`Error::Io`] if the file cannot be written.
    pub fn save(&self) -> Result<()> {
        self.save_with_options(&SerializeOptions::default())
    }

    /// Rewrites the backing file using custom output options.
    ///
    /// # Errors
    ///
    /// Same as [`save`](Document::save).
    pub fn save_with_options(&self, options: &SerializeOptions) -> Result<()> {
        let path = self.path.as_deref().ok_or(Error::NoPath)?;
        write_file(path, &ser::to_string_with_options(self, options))
    }

    /// Binds the document to `path` and writes it there.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.path = Some(path.as_ref().to_path_buf());
        self.save()
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = contents.len(), "saving ini file");
    fs::write(path, contents).map_err(|e| Error::io_at(path, &e))
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&ser::to_string_with_options(
            self,
            &SerializeOptions::default(),
        ))
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Parser::parse_str(s))
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(&self.sections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Operator;

    #[test]
    fn test_duplicate_sections_split_views() {
        let doc: Document = "[A]\nk=1\n[A]\nk=2\n".parse().unwrap();

        let names: Vec<_> = doc.sections().iter().map(Section::name).collect();
        assert_eq!(names, vec!["A", "A"]);
        assert_eq!(doc.sections()[0].get_string("k"), Some("1"));
        assert_eq!(doc.sections()[1].get_string("k"), Some("2"));
        assert_eq!(doc.section("A").unwrap().get_string("k"), Some("2"));
    }

    #[test]
    fn test_get_section_mutates_latest() {
        let mut doc: Document = "[A]\nk=1\n[A]\nk=2\n".parse().unwrap();
        doc.get_section("A", false)
            .unwrap()
            .add("k", "3", Operator::Append);

        assert_eq!(doc.sections()[0].get_all("k").len(), 1);
        assert_eq!(doc.sections()[1].get_all("k").len(), 2);
    }

    #[test]
    fn test_get_section_without_create() {
        let mut doc = Document::new();
        assert!(doc.get_section("Missing", false).is_none());
        assert!(doc.sections().is_empty());

        doc.get_section("Missing", true);
        doc.get_section("Missing", true);
        assert_eq!(doc.sections().len(), 1);
    }

    #[test]
    fn test_section_names_are_case_sensitive() {
        let mut doc = Document::new();
        doc.section_or_create("Game");
        assert!(doc.section("game").is_none());
        doc.section_or_create("game");
        assert_eq!(doc.sections().len(), 2);
    }

    #[test]
    fn test_append_section_reindexes() {
        let mut doc = Document::new();
        doc.append_section("S").add("v", "old", Operator::Assign);
        doc.append_section("S").add("v", "new", Operator::Assign);

        assert_eq!(doc.sections().len(), 2);
        assert_eq!(doc.section("S").unwrap().get_string("v"), Some("new"));
    }

    #[test]
    fn test_save_without_path() {
        let doc = Document::new();
        assert_eq!(doc.save(), Err(Error::NoPath));
    }

    #[test]
    fn test_serialize_as_json() {
        let doc: Document = "[A]\nk+=1\n".parse().unwrap();
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            serde_json::json!([
                {"name": "A", "keys": {"k": [{"text": "1", "operator": "+="}]}}
            ])
        );
    }
}
