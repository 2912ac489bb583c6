//! INI parsing.
//!
//! This module provides the [`Parser`] that turns INI text into a
//! [`Document`].
//!
//! ## Overview
//!
//! - **Single pass**: lines are read in order, each exactly once
//! - **Never fails**: malformed lines are skipped, not reported
//! - **Append-only**: every assignment line adds a new value entry; nothing the
//!   parser has already stored is overwritten
//!
//! ## Line kinds
//!
//! | trimmed line starts with | meaning                                   |
//! |--------------------------|-------------------------------------------|
//! | `;`                      | comment, skipped                          |
//! | `[`                      | section header, name up to a trailing `]` |
//! | anything else            | `key=value`, `key+=value` or `key-=value` |
//!
//! A line whose raw text ends in `\` continues onto the next line. The next
//! line is appended verbatim (trimmed) after a `\n`, without looking for a new
//! key, until a line without the trailing backslash completes the value.
//!
//! Comments are skipped even in the middle of a continuation, so a continued
//! line starting with `;` is dropped from the value. A section header in the
//! middle of a continuation, or the end of input, discards the pending value.
//!
//! ## Usage
//!
//! ```rust
//! use launcher_ini::{from_str, Operator};
//!
//! let doc = from_str("[Game]\ncount+=5\ndesc=hello \\\nworld\n");
//! let game = doc.section("Game").unwrap();
//!
//! assert_eq!(game.get_all("count")[0].operator(), Operator::Append);
//! assert_eq!(game.get_string("desc"), Some("hello\nworld"));
//! ```

use crate::{Document, Operator};
use tracing::{debug, trace};

const BOM: char = '\u{feff}';

/// Parser state carried from one line to the next.
#[derive(Debug)]
enum State {
    Idle,
    AwaitingContinuation {
        key: String,
        operator: Operator,
        value: String,
    },
}

/// Line-oriented INI parser.
///
/// Feed lines with [`Parser::parse_line`] and collect the result with
/// [`Parser::finish`], or use [`Parser::parse_str`] for whole inputs.
pub struct Parser {
    doc: Document,
    current: Option<usize>,
    state: State,
    line: usize,
}

impl Parser {
    /// Creates a parser that fills `doc`.
    pub fn new(doc: Document) -> Self {
        Parser {
            doc,
            current: None,
            state: State::Idle,
            line: 0,
        }
    }

    /// Parses a complete input into a fresh in-memory document.
    pub fn parse_str(input: &str) -> Document {
        let mut parser = Parser::new(Document::new());
        parser.parse_lines(input);
        parser.finish()
    }

    /// Feeds every line of `input`. A leading byte-order mark is ignored.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`.
    pub fn parse_lines(&mut self, input: &str) {
        let input = input.strip_prefix(BOM).unwrap_or(input);
        for line in split_lines(input) {
            self.parse_line(line);
        }
    }

    /// Feeds one line, without its terminator.
    pub fn parse_line(&mut self, line: &str) {
        self.line += 1;
        let trimmed = line.trim();

        if trimmed.starts_with(';') {
            trace!(line = self.line, "skipping comment");
            return;
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            let name = header.strip_suffix(']').unwrap_or(header);
            self.abandon_pending("section header");
            debug!(line = self.line, section = name, "section header");
            self.current = Some(self.doc.push_section(name));
            return;
        }

        let Some(section) = self.current else {
            trace!(line = self.line, "skipping line outside of any section");
            return;
        };

        let continues = line.ends_with('\\');

        let (key, operator, mut value, rest) = match std::mem::replace(&mut self.state, State::Idle)
        {
            // Continued lines are taken whole, never re-scanned for a key.
            State::AwaitingContinuation {
                key,
                operator,
                value,
            } => (key, operator, value, trimmed),
            State::Idle => match split_assignment(trimmed) {
                Some((key, operator, rest)) => (key.to_string(), operator, String::new(), rest),
                None => {
                    trace!(line = self.line, "skipping line without assignment");
                    return;
                }
            },
        };

        if continues {
            let rest = rest.strip_suffix('\\').unwrap_or(rest);
            value.push_str(rest.trim());
            value.push('\n');
            self.state = State::AwaitingContinuation {
                key,
                operator,
                value,
            };
        } else {
            value.push_str(rest.trim());
            self.doc.sections_mut()[section].add(&key, value, operator);
        }
    }

    /// Ends the input and returns the document.
    pub fn finish(mut self) -> Document {
        self.abandon_pending("end of input");
        debug!(
            lines = self.line,
            sections = self.doc.sections().len(),
            "parsed document"
        );
        self.doc
    }

    fn abandon_pending(&mut self, reason: &str) {
        if let State::AwaitingContinuation { key, .. } =
            std::mem::replace(&mut self.state, State::Idle)
        {
            debug!(line = self.line, key = %key, reason, "dropping unterminated continuation");
        }
    }
}

/// Splits `input` at `\n`, `\r\n` and lone `\r`, without a trailing empty line.
fn split_lines(input: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = input;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(i) => {
                let line = &rest[..i];
                let terminator = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + terminator..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Splits a trimmed line into key, operator and the remainder after `=`.
///
/// Returns `None` when there is no `=`, when it is the first character, or
/// when no key text precedes the operator.
fn split_assignment(trimmed: &str) -> Option<(&str, Operator, &str)> {
    let idx = trimmed.find('=')?;
    if idx == 0 {
        return None;
    }
    let rest = &trimmed[idx + 1..];
    let (key, operator) = match Operator::from_prefix(trimmed.as_bytes()[idx - 1]) {
        Some(operator) => (&trimmed[..idx - 1], operator),
        None => (&trimmed[..idx], Operator::Assign),
    };
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, operator, rest))
}
