//! Leaf locations inside a structured value.
//!
//! A [`Path`] is the list of object keys and array indices walked from the
//! root to a leaf. It renders by accumulating a prefix: the separator goes in
//! front of a segment only when the text written so far is non-empty. For
//! ordinary keys that is plain joining; for an empty leading key it means no
//! leading separator.
//!
//! ```rust
//! use toon_flat::{Path, Segment};
//!
//! let path = Path::from(vec![Segment::from("tags"), Segment::Index(1)]);
//! assert_eq!(path.to_string(), "tags.1");
//! assert_eq!(path.render('/'), "tags/1");
//!
//! let path = Path::from(vec![Segment::from(""), Segment::from("b")]);
//! assert_eq!(path.to_string(), "b");
//! ```

use std::fmt;

/// One step of a [`Path`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Object key
    Key(String),
    /// Array position
    Index(usize),
}

impl Segment {
    /// Appends this segment's text to `out`.
    pub(crate) fn write_to(&self, out: &mut String) {
        match self {
            Segment::Key(key) => out.push_str(key),
            Segment::Index(index) => out.push_str(&index.to_string()),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// The location of a leaf, from the root down.
///
/// The root itself has the empty path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Path(Vec<Segment>);

impl Path {
    /// Creates the empty (root) path.
    #[must_use]
    pub fn root() -> Self {
        Path(Vec::new())
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn push(&mut self, segment: Segment) {
        self.0.push(segment);
    }

    pub fn pop(&mut self) -> Option<Segment> {
        self.0.pop()
    }

    /// Renders the path with `separator` between segments.
    #[must_use]
    pub fn render(&self, separator: char) -> String {
        let mut out = String::new();
        self.write_to(&mut out, separator);
        out
    }

    pub(crate) fn write_to(&self, out: &mut String, separator: char) {
        let start = out.len();
        for segment in &self.0 {
            if out.len() > start {
                out.push(separator);
            }
            segment.write_to(out);
        }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render('.'))
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Path(segments)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        Path(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_renders_empty() {
        assert_eq!(Path::root().to_string(), "");
        assert!(Path::root().is_root());
    }

    #[test]
    fn test_mixed_segments() {
        let path: Path = vec![
            Segment::from("a"),
            Segment::Index(0),
            Segment::from("b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(path.to_string(), "a.0.b");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_inner_empty_key_keeps_separators() {
        let path = Path::from(vec![Segment::from("a"), Segment::from(""), Segment::from("b")]);
        assert_eq!(path.to_string(), "a..b");
    }

    #[test]
    fn test_push_pop() {
        let mut path = Path::root();
        path.push(Segment::from("x"));
        path.push(Segment::Index(2));
        assert_eq!(path.pop(), Some(Segment::Index(2)));
        assert_eq!(path.to_string(), "x");
    }
}
