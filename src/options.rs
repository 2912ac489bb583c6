//! Configuration options for writing INI documents.
//!
//! - [`SerializeOptions`]: main configuration struct
//! - [`LineEnding`]: `\n` or `\r\n` between output lines
//!
//! ## Examples
//!
//! ```rust
//! use launcher_ini::{from_str, to_string_with_options, LineEnding, SerializeOptions};
//!
//! let doc = from_str("[Server]\nMotd=hello \\\nworld\n");
//!
//! // Windows line endings
//! let options = SerializeOptions::new().with_line_ending(LineEnding::CrLf);
//! assert!(to_string_with_options(&doc, &options).starts_with("[Server]\r\n"));
//!
//! // Write multi-line values back with backslash continuations
//! let options = SerializeOptions::new().with_escape_continuations(true);
//! assert!(to_string_with_options(&doc, &options).contains("Motd=hello\\\nworld"));
//! ```

/// Line terminator used when writing.
///
/// # Examples
///
/// ```rust
/// use launcher_ini::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for INI serialization.
///
/// The defaults reproduce the classic output byte for byte: `\n` line
/// endings, and multi-line values written with their raw embedded newlines.
/// Such values do not read back as a single entry; enable
/// [`escape_continuations`](SerializeOptions::with_escape_continuations) to
/// write them as backslash continuations instead.
#[derive(Clone, Debug, Default)]
pub struct SerializeOptions {
    /// Terminator written after every line.
    pub line_ending: LineEnding,
    /// Write embedded newlines as backslash continuations.
    pub escape_continuations: bool,
}

impl SerializeOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use launcher_ini::{LineEnding, SerializeOptions};
    ///
    /// let options = SerializeOptions::new();
    /// assert_eq!(options.line_ending, LineEnding::Lf);
    /// assert!(!options.escape_continuations);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Writes embedded newlines as a trailing `\` plus a line break.
    ///
    /// Each continued segment is trimmed when read back, so values whose
    /// lines carry surrounding whitespace, or start with `;` or `[`, still do
    /// not survive a round trip.
    #[must_use]
    pub fn with_escape_continuations(mut self, escape: bool) -> Self {
        self.escape_continuations = escape;
        self
    }
}
