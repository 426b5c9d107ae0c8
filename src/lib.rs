//! # toon_flat
//!
//! Flat TOON encoding of structured values for compact LLM prompts.
//!
//! ## What is flat TOON?
//!
//! A nested value is written as a single line of `path:value` tokens joined
//! by `;`. Paths join object keys and array indices with `.`:
//!
//! ```text
//! {"order": {"id": 7, "items": ["pen", "ink"]}}
//!
//! order.id:7;order.items.0:pen;order.items.1:ink
//! ```
//!
//! There are no braces, brackets or quotes, which keeps the token count of
//! a data block embedded in a prompt low. The format is write-only: strings
//! are not escaped and no decoder exists. See [`format`] for the full rules.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use toon_flat::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     tags: vec!["admin".to_string(), "ops".to_string()],
//! };
//!
//! let flat = to_string(&user).unwrap();
//! assert_eq!(flat, "id:123;name:Alice;tags.0:admin;tags.1:ops");
//! ```
//!
//! ### Dynamic Values
//!
//! ```rust
//! use toon_flat::{flatten, toon};
//!
//! let data = toon!({
//!     "a": {"b": 1},
//!     "c": [true, null]
//! });
//!
//! let doc = flatten(&data).unwrap();
//! assert_eq!(doc.to_string(), "a.b:1;c.0:true;c.1:null");
//! ```
//!
//! ### Prompts
//!
//! ```rust
//! use toon_flat::{build_prompt, toon, DataFormat};
//!
//! let data = toon!({"temp": 21.5});
//! let prompt = build_prompt("Describe the weather.", Some(&data), DataFormat::Toon).unwrap();
//! assert!(prompt.ends_with("Data (TOON format):\ntemp:21.5"));
//! ```
//!
//! ## Guarantees
//!
//! - Deterministic: the same value always encodes to the same bytes
//! - Order-preserving: object fields are never re-sorted
//! - Bounded: nesting past [`FlattenOptions::max_depth`] is reported as
//!   [`Error::DepthLimitExceeded`], never a stack overflow
//! - No `unsafe` code

pub mod error;
pub mod flatten;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod path;
pub mod prompt;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use flatten::{Document, FlattenEncoder, Token};
pub use map::ToonMap;
pub use options::{Delimiter, FlattenOptions};
pub use path::{Path, Segment};
pub use prompt::{build_prompt, DataFormat, PromptBuilder};
pub use ser::{Serializer, ToonValueSerializer};
pub use value::{Number, ToonValue};

/// Shorter name for [`ToonValue`].
pub use value::ToonValue as Value;

use serde::Serialize;
use std::io;

/// Flatten any `T: Serialize` to an encoded document string.
///
/// # Examples
///
/// ```rust
/// use toon_flat::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// assert_eq!(to_string(&Point { x: 1, y: 2 }).unwrap(), "x:1;y:2");
/// ```
///
/// # Errors
///
/// Returns an error if nesting exceeds the default depth limit or a map key
/// is not a scalar.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, &FlattenOptions::default())
}

/// Flatten any `T: Serialize` with custom options.
///
/// # Examples
///
/// ```rust
/// use toon_flat::{to_string_with_options, Delimiter, FlattenOptions};
///
/// let options = FlattenOptions::new().with_delimiter(Delimiter::Comma);
/// assert_eq!(to_string_with_options(&vec![1, 2], &options).unwrap(), "0:1,1:2");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be flattened.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: &FlattenOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options.clone());
    value.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Convert any `T: Serialize` to a `ToonValue`.
///
/// # Examples
///
/// ```rust
/// use toon_flat::{to_value, ToonValue};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: ToonValue = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if nesting exceeds the default depth limit.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<ToonValue>
where
    T: ?Sized + Serialize,
{
    value.serialize(ToonValueSerializer::default())
}

/// Flatten a `ToonValue` into its tokens with default options.
///
/// # Errors
///
/// Returns [`Error::DepthLimitExceeded`] for values nested deeper than 128 levels.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn flatten(value: &ToonValue) -> Result<Document> {
    FlattenEncoder::default().encode(value)
}

/// Flatten a `ToonValue` into its tokens with custom options.
///
/// Render the result with [`Document::render`] to apply the same options'
/// delimiter and separator.
///
/// # Errors
///
/// Returns [`Error::DepthLimitExceeded`] for values nested deeper than
/// `options.max_depth`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn flatten_with_options(value: &ToonValue, options: &FlattenOptions) -> Result<Document> {
    FlattenEncoder::new(options.clone()).encode(value)
}

/// Flatten any `T: Serialize` into a writer.
///
/// # Examples
///
/// ```rust
/// use toon_flat::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec!["a", "b"]).unwrap();
/// assert_eq!(buffer, b"0:a;1:b");
/// ```
///
/// # Errors
///
/// Returns an error if flattening fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, &FlattenOptions::default())
}

/// Flatten any `T: Serialize` into a writer with custom options.
///
/// # Errors
///
/// Returns an error if flattening fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(
    mut writer: W,
    value: &T,
    options: &FlattenOptions,
) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let flat = to_string_with_options(value, options)?;
    writer
        .write_all(flat.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
