//! # launcher_ini
//!
//! An order-preserving model of the INI files used to configure dedicated
//! game-server instances: load a file, overlay per-instance settings, save it
//! back.
//!
//! ## The format
//!
//! ```text
//! ; comments start with a semicolon
//! [Engine.GameInfo]
//! MaxPlayers=16
//! ServerActors+=IpDrv.WebServer
//! ServerActors-=IpServer.UdpServerUplink
//! Motd=Welcome \
//!      to the arena
//! ```
//!
//! - **Repeated keys**: every assignment line is kept as its own entry, in
//!   file order.
//! - **Three operators**: `=`, `+=` and `-=` are recorded with each entry.
//!   This crate does not merge them; whoever consumes the values decides what
//!   appending and removing mean.
//! - **Case-insensitive keys**: `MaxPlayers` and `maxplayers` are the same
//!   key. Section names are case-sensitive.
//! - **Duplicate sections**: two `[Name]` headers produce two sections. Name
//!   lookup returns the last one; iteration yields both.
//! - **Continuations**: a line ending in `\` continues on the next line; the
//!   pieces are joined with `\n`.
//!
//! ## Quick Start
//!
//! ```rust
//! use launcher_ini::{from_str, Operator};
//!
//! let mut doc = from_str("[Server]\nName=Arena\nMap+=DM-Deck\nMap+=CTF-Face\n");
//!
//! let server = doc.get_section("Server", false).unwrap();
//! assert_eq!(server.get_string("name"), Some("Arena"));
//! assert_eq!(server.get_all("map").len(), 2);
//!
//! server.set("Name", "Instance 2", Operator::Assign);
//! server.remove("Map", "CTF-Face");
//!
//! assert_eq!(doc.to_string(), "[Server]\nName=Instance 2\nMap+=DM-Deck\n\n");
//! ```
//!
//! ## Files
//!
//! ```rust,no_run
//! use launcher_ini::{Document, Operator};
//!
//! # fn main() -> launcher_ini::Result<()> {
//! // A missing file is not an error: the document starts empty.
//! let mut doc = Document::open("Config/Server1.ini")?;
//! doc.section_or_create("Engine.GameEngine")
//!     .set("ServerName", "Arena #1", Operator::Assign);
//! doc.save()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Known asymmetry
//!
//! Values joined from continuation lines are written back with their raw
//! newlines, which do not read back as one value. See
//! [`SerializeOptions::with_escape_continuations`] for the opt-in fix.
//!
//! ## Logging
//!
//! Loading and saving emit [`tracing`] events at `debug` level; skipped lines
//! are reported at `trace`. No subscriber is installed by this crate.

pub mod de;
pub mod document;
pub mod error;
pub mod macros;
pub mod map;
pub mod options;
pub mod section;
pub mod ser;
pub mod value;

pub use de::Parser;
pub use document::Document;
pub use error::{Error, Result};
pub use map::KeyMap;
pub use options::{LineEnding, SerializeOptions};
pub use section::Section;
pub use ser::{to_string, to_string_with_options, Serializer};
pub use value::{Operator, ValueEntry};

use std::io;
use std::path::Path;

/// Parses INI text into an in-memory document.
///
/// Parsing never fails; lines that are not comments, headers or assignments
/// are skipped.
///
/// # Examples
///
/// ```rust
/// use launcher_ini::from_str;
///
/// let doc = from_str("[A]\nk=v\nnot an assignment\n");
/// assert_eq!(doc.section("A").unwrap().len(), 1);
/// ```
#[must_use]
pub fn from_str(s: &str) -> Document {
    Parser::parse_str(s)
}

/// Reads INI text from an I/O stream.
///
/// Invalid UTF-8 sequences are replaced with `U+FFFD`, as when loading a
/// file.
///
/// # Examples
///
/// ```rust
/// use launcher_ini::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[A]\nk=v\n")).unwrap();
/// assert_eq!(doc.section("A").unwrap().get_string("k"), Some("v"));
/// ```
///
/// # Errors
///
/// Returns an error if reading fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Document>
where
    R: io::Read,
{
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(from_str(&String::from_utf8_lossy(&bytes)))
}

/// Loads the file at `path`. Same as [`Document::open`].
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_path(path: impl AsRef<Path>) -> Result<Document> {
    Document::open(path)
}

/// Writes `doc` to a writer with default options.
///
/// # Examples
///
/// ```rust
/// use launcher_ini::{from_str, to_writer};
///
/// let doc = from_str("[A]\nk+=v\n");
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"[A]\nk+=v\n\n");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(mut writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(to_string(doc).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}
