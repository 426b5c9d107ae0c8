//! Configuration options for flat TOON encoding.
//!
//! [`FlattenOptions`] controls how an encoded document is laid out:
//!
//! - [`Delimiter`]: the separator written between tokens (semicolon, comma, pipe, or newline)
//! - `path_separator`: the character joining path segments (`.` by default)
//! - `max_depth`: how many nesting levels the encoder descends before giving up
//!
//! ## Examples
//!
//! ```rust
//! use toon_flat::{to_string_with_options, toon, Delimiter, FlattenOptions};
//!
//! let data = toon!({"user": {"id": 7, "tags": ["a", "b"]}});
//!
//! let options = FlattenOptions::new().with_delimiter(Delimiter::Newline);
//! let flat = to_string_with_options(&data, &options).unwrap();
//! assert_eq!(flat, "user.id:7\nuser.tags.0:a\nuser.tags.1:b");
//!
//! let options = FlattenOptions::new().with_path_separator('/');
//! let flat = to_string_with_options(&data, &options).unwrap();
//! assert_eq!(flat, "user/id:7;user/tags/0:a;user/tags/1:b");
//! ```

/// Separator placed between the tokens of an encoded document.
///
/// # Examples
///
/// ```rust
/// use toon_flat::Delimiter;
///
/// assert_eq!(Delimiter::Semicolon.as_str(), ";");
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Pipe.as_str(), "|");
/// assert_eq!(Delimiter::Newline.as_str(), "\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Semicolon,
    Comma,
    Pipe,
    Newline,
}

impl Delimiter {
    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Semicolon => ";",
            Delimiter::Comma => ",",
            Delimiter::Pipe => "|",
            Delimiter::Newline => "\n",
        }
    }
}

/// Separator between a token's path and its value. Not configurable.
pub const KEY_VALUE_SEPARATOR: char = ':';

/// Default nesting limit, matching serde_json's recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for flat TOON encoding.
///
/// # Examples
///
/// ```rust
/// use toon_flat::{Delimiter, FlattenOptions};
///
/// let options = FlattenOptions::new();
/// assert_eq!(options.delimiter, Delimiter::Semicolon);
/// assert_eq!(options.path_separator, '.');
/// assert_eq!(options.max_depth, 128);
///
/// let options = FlattenOptions::new()
///     .with_delimiter(Delimiter::Pipe)
///     .with_max_depth(16);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlattenOptions {
    pub delimiter: Delimiter,
    pub path_separator: char,
    pub max_depth: usize,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        FlattenOptions {
            delimiter: Delimiter::default(),
            path_separator: '.',
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FlattenOptions {
    /// Creates default options (`;` between tokens, `.` between segments, depth 128).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the delimiter written between tokens.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the character joining path segments.
    #[must_use]
    pub fn with_path_separator(mut self, separator: char) -> Self {
        self.path_separator = separator;
        self
    }

    /// Sets the maximum nesting depth.
    ///
    /// A value nested deeper than this, or a cyclic graph reached through
    /// `Serialize`, fails with [`Error::DepthLimitExceeded`](crate::Error).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
