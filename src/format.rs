//! The flat TOON format
//!
//! This module documents the encoded document produced by this crate. It
//! contains no code.
//!
//! # Overview
//!
//! A structured value is written as one line of `path:value` tokens joined by
//! `;`. Containers disappear into the paths of their leaves; each leaf
//! contributes exactly one token. The point is a prompt block with almost no
//! syntactic overhead: no braces, no brackets, no quotes.
//!
//! ```text
//! {"user": {"name": "Alice", "roles": ["admin", "ops"]}, "active": true}
//!
//! user.name:Alice;user.roles.0:admin;user.roles.1:ops;active:true
//! ```
//!
//! # Tokens
//!
//! | Part | Syntax |
//! |------|--------|
//! | Path | segments joined by `.`; object keys verbatim, array positions as decimal indices |
//! | Separator | `:` after the path |
//! | Value | scalar text of the leaf |
//! | Delimiter | `;` between tokens, none after the last |
//!
//! Order is depth-first, pre-order: object fields in insertion order, array
//! elements by position. Nothing is sorted.
//!
//! A path segment is preceded by `.` only when the path text before it is
//! non-empty, so a root-level empty key adds nothing:
//!
//! ```text
//! {"": {"b": 1}}      ->  b:1
//! {"a": {"": {"b": 1}}} ->  a..b:1
//! ```
//!
//! # Scalars
//!
//! | Leaf | Text |
//! |------|------|
//! | null | `null` |
//! | absent (`ToonValue::Undefined`) | `undefined` |
//! | boolean | `true`, `false` |
//! | integer | decimal, e.g. `-42`, `18446744073709551615` |
//! | float | shortest round-trip decimal without exponent: `0.1`, `2` for `2.0`, `0` for `-0.0` |
//! | special number | `Infinity`, `-Infinity`, `NaN` |
//! | date | RFC 3339 in UTC with `Z`: `2024-01-15T10:30:00Z` |
//! | string | verbatim |
//!
//! # Edge cases
//!
//! - Empty objects and arrays produce no tokens; `{}` encodes to the empty string.
//! - A leaf at the root produces one token with an empty path: `true` encodes to `:true`.
//! - Nesting deeper than `max_depth` (128 by default) is an error, which is
//!   also what a cyclic graph reached through `Serialize` runs into.
//!
//! # No escaping
//!
//! Strings are written as-is. A value containing `;` or `:` yields a
//! document that a reader cannot split unambiguously:
//!
//! ```text
//! {"a": "x;y"}  ->  a:x;y
//! ```
//!
//! which reads the same as a token `a:x` followed by a fragment `y`. The
//! format has no decoder, so this is kept as defined behaviour. Any future
//! parse-back would first need an escaping rule for `:`, `;` and `.`.
//!
//! # Configuration
//!
//! [`FlattenOptions`](crate::FlattenOptions) can swap the token delimiter
//! (`;`, `,`, `|`, newline) and the path separator, and change the depth
//! limit. The `:` between path and value is fixed.
