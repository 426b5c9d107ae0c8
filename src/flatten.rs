//! The flattening encoder.
//!
//! [`FlattenEncoder`] walks a [`ToonValue`] depth-first, pre-order, and emits
//! one [`Token`] per leaf. Object fields are visited in insertion order and
//! array elements by position, so the token order is fully determined by the
//! input. The walk keeps its own stack of child iterators instead of
//! recursing, and stops with [`Error::DepthLimitExceeded`] once the number of
//! open containers passes [`FlattenOptions::max_depth`].
//!
//! ## Examples
//!
//! ```rust
//! use toon_flat::{flatten, toon};
//!
//! let doc = flatten(&toon!({"a": [1, 2], "b": {"c": null}})).unwrap();
//! assert_eq!(doc.len(), 3);
//! assert_eq!(doc.to_string(), "a.0:1;a.1:2;b.c:null");
//!
//! let paths: Vec<_> = doc.iter().map(|t| t.path.to_string()).collect();
//! assert_eq!(paths, vec!["a.0", "a.1", "b.c"]);
//! ```

use crate::options::KEY_VALUE_SEPARATOR;
use crate::path::{Path, Segment};
use crate::{Error, FlattenOptions, Result, ToonValue};
use std::fmt;

/// One `path:value` unit of an encoded document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub path: Path,
    /// Scalar text of the leaf, unescaped.
    pub value: String,
}

impl Token {
    pub fn new(path: Path, value: impl Into<String>) -> Self {
        Token {
            path,
            value: value.into(),
        }
    }

    fn write_to(&self, out: &mut String, options: &FlattenOptions) {
        self.path.write_to(out, options.path_separator);
        out.push(KEY_VALUE_SEPARATOR);
        out.push_str(&self.value);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.path, KEY_VALUE_SEPARATOR, self.value)
    }
}

/// The ordered tokens produced from one value.
///
/// `Display` renders with the default options; use [`Document::render`] for
/// any other layout.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    tokens: Vec<Token>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Renders the tokens joined by the configured delimiter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_flat::{flatten, toon, Delimiter, FlattenOptions};
    ///
    /// let doc = flatten(&toon!({"a": 1, "b": 2})).unwrap();
    /// let options = FlattenOptions::new().with_delimiter(Delimiter::Pipe);
    /// assert_eq!(doc.render(&options), "a:1|b:2");
    /// ```
    #[must_use]
    pub fn render(&self, options: &FlattenOptions) -> String {
        let mut out = String::with_capacity(self.tokens.len() * 16);
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                out.push_str(options.delimiter.as_str());
            }
            token.write_to(&mut out, options);
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&FlattenOptions::default()))
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for Document {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

/// Children of one open container, yielded with the segment that leads to them.
enum Children<'a> {
    Object(indexmap::map::Iter<'a, String, ToonValue>),
    Array(std::iter::Enumerate<std::slice::Iter<'a, ToonValue>>),
}

impl<'a> Children<'a> {
    fn of(value: &'a ToonValue) -> Option<Self> {
        match value {
            ToonValue::Object(obj) => Some(Children::Object(obj.iter())),
            ToonValue::Array(arr) => Some(Children::Array(arr.iter().enumerate())),
            _ => None,
        }
    }
}

impl<'a> Iterator for Children<'a> {
    type Item = (Segment, &'a ToonValue);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Children::Object(iter) => iter.next().map(|(k, v)| (Segment::Key(k.clone()), v)),
            Children::Array(iter) => iter.next().map(|(i, v)| (Segment::Index(i), v)),
        }
    }
}

/// Flattens values into documents. Holds only its options.
#[derive(Clone, Debug, Default)]
pub struct FlattenEncoder {
    options: FlattenOptions,
}

impl FlattenEncoder {
    pub fn new(options: FlattenOptions) -> Self {
        FlattenEncoder { options }
    }

    pub fn options(&self) -> &FlattenOptions {
        &self.options
    }

    /// Produces the tokens of `value`.
    ///
    /// A leaf root yields one token with the empty path.
    ///
    /// # Errors
    ///
    /// [`Error::DepthLimitExceeded`] when containers nest deeper than
    /// `max_depth`.
    pub fn encode(&self, value: &ToonValue) -> Result<Document> {
        let mut tokens = Vec::new();

        let root = match Children::of(value) {
            Some(children) => children,
            None => {
                tokens.push(Token::new(Path::root(), leaf_text(value)));
                return Ok(Document { tokens });
            }
        };

        if self.options.max_depth == 0 {
            return Err(Error::depth_limit(0, ""));
        }

        // `path` holds one segment per open container below the root.
        let mut stack = vec![root];
        let mut path = Path::root();

        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some((segment, child)) => {
                    path.push(segment);
                    match Children::of(child) {
                        Some(grandchildren) => {
                            if stack.len() >= self.options.max_depth {
                                return Err(Error::depth_limit(
                                    self.options.max_depth,
                                    &path.render(self.options.path_separator),
                                ));
                            }
                            stack.push(grandchildren);
                        }
                        None => {
                            tokens.push(Token::new(path.clone(), leaf_text(child)));
                            path.pop();
                        }
                    }
                }
                None => {
                    stack.pop();
                    path.pop();
                }
            }
        }

        Ok(Document { tokens })
    }

    /// Encodes `value` and renders it in one step.
    pub fn encode_to_string(&self, value: &ToonValue) -> Result<String> {
        Ok(self.encode(value)?.render(&self.options))
    }
}

fn leaf_text(value: &ToonValue) -> String {
    value.scalar_text().unwrap_or_default()
}
