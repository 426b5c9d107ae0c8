//! Error types for flat TOON encoding.
//!
//! The encoder accepts nearly every input as-is: empty containers, Unicode,
//! strings holding `:` or `;` are all rendered without complaint. What remains
//! are structural failures (nesting past the configured depth, which is how a
//! cyclic graph shows up), keys that cannot become a path segment, and the
//! plumbing errors of the surrounding helpers.
//!
//! ## Examples
//!
//! ```rust
//! use toon_flat::{flatten_with_options, toon, Error, FlattenOptions};
//!
//! let value = toon!({"a": {"b": {"c": 1}}});
//! let options = FlattenOptions::new().with_max_depth(2);
//!
//! match flatten_with_options(&value, &options) {
//!     Err(Error::DepthLimitExceeded { limit, path }) => {
//!         assert_eq!(limit, 2);
//!         assert_eq!(path, "a.b");
//!     }
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while flattening a value or
/// composing a prompt around it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Nesting went deeper than [`FlattenOptions::max_depth`](crate::FlattenOptions).
    ///
    /// Cyclic input (for example an `Rc<RefCell<_>>` graph that contains
    /// itself) always ends here.
    #[error("nesting exceeds the maximum depth of {limit} at path `{path}` (cyclic structure?)")]
    DepthLimitExceeded { limit: usize, path: String },

    /// A map key that is not a string, char, integer or boolean.
    #[error("map key must be a scalar, found {0}")]
    KeyMustBeScalar(String),

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Pretty JSON rendering failed
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a depth limit error for the path at which the limit was hit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_flat::Error;
    ///
    /// let err = Error::depth_limit(128, "a.b.c");
    /// assert!(err.to_string().contains("maximum depth of 128"));
    /// ```
    pub fn depth_limit(limit: usize, path: &str) -> Self {
        Error::DepthLimitExceeded {
            limit,
            path: path.to_string(),
        }
    }

    /// Creates a key error naming the kind of key that was rejected.
    pub fn key_must_be_scalar(found: &str) -> Self {
        Error::KeyMustBeScalar(found.to_string())
    }

    /// Creates an unsupported type error for types that cannot be flattened.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_flat::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit_message_names_path() {
        let err = Error::depth_limit(4, "root.child");
        let msg = err.to_string();
        assert!(msg.contains("maximum depth of 4"));
        assert!(msg.contains("`root.child`"));
    }

    #[test]
    fn test_serde_custom_maps_to_custom() {
        let err = <Error as serde::ser::Error>::custom("boom");
        assert_eq!(err, Error::Custom("boom".to_string()));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(matches!(err, Error::Json(_)));
    }
}
