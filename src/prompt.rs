//! Prompt composition around structured data.
//!
//! [`PromptBuilder`] appends a data block to a free-text instruction. The
//! block is either the flat TOON document or serde_json's pretty-printed
//! rendering of the same value, under a header naming the format:
//!
//! ```text
//! <prompt>
//!
//! Data (TOON format):
//! user.name:Alice;user.age:30
//! ```
//!
//! Missing or falsy data (see [`ToonValue::is_falsy`]) leaves the prompt
//! untouched.
//!
//! ## Examples
//!
//! ```rust
//! use toon_flat::{build_prompt, toon, DataFormat};
//!
//! let data = toon!({"city": "Oslo", "days": [1, 2]});
//!
//! let prompt = build_prompt("Plan a trip.", Some(&data), DataFormat::Toon).unwrap();
//! assert_eq!(prompt, "Plan a trip.\n\nData (TOON format):\ncity:Oslo;days.0:1;days.1:2");
//!
//! let prompt = build_prompt("Plan a trip.", None, DataFormat::Json).unwrap();
//! assert_eq!(prompt, "Plan a trip.");
//! ```

use crate::{FlattenEncoder, FlattenOptions, Number, Result, ToonValue};
use log::debug;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

// Largest float whose integer conversion is exact.
const MAX_EXACT_FLOAT: f64 = 9_007_199_254_740_992.0;

/// How the data block is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// Flat `path:value;…` document
    Toon,
    /// Pretty-printed JSON with two-space indentation
    #[default]
    Json,
}

impl DataFormat {
    /// Maps a request's `use_toon` flag to a format.
    #[must_use]
    pub const fn from_use_toon(use_toon: bool) -> Self {
        if use_toon {
            DataFormat::Toon
        } else {
            DataFormat::Json
        }
    }

    /// Name used in the block header.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            DataFormat::Toon => "TOON",
            DataFormat::Json => "JSON",
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DataFormat::Toon => "toon",
            DataFormat::Json => "json",
        })
    }
}

/// Composes prompts with an optional data block.
#[derive(Clone, Debug, Default)]
pub struct PromptBuilder {
    format: DataFormat,
    encoder: FlattenEncoder,
}

impl PromptBuilder {
    pub fn new(format: DataFormat) -> Self {
        PromptBuilder {
            format,
            encoder: FlattenEncoder::default(),
        }
    }

    /// Sets the options used for the TOON block.
    #[must_use]
    pub fn with_options(mut self, options: FlattenOptions) -> Self {
        self.encoder = FlattenEncoder::new(options);
        self
    }

    pub fn format(&self) -> DataFormat {
        self.format
    }

    /// Renders `data` in the configured format, without the header.
    ///
    /// # Errors
    ///
    /// Encoder errors for the TOON format, [`Error::Json`](crate::Error::Json)
    /// for the JSON format.
    pub fn render_data(&self, data: &ToonValue) -> Result<String> {
        match self.format {
            DataFormat::Toon => self.encoder.encode_to_string(data),
            DataFormat::Json => Ok(serde_json::to_string_pretty(&JsonView(data))?),
        }
    }

    /// Appends the data block to `prompt`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`PromptBuilder::render_data`].
    pub fn build(&self, prompt: &str, data: Option<&ToonValue>) -> Result<String> {
        let data = match data {
            Some(data) if !data.is_falsy() => data,
            _ => return Ok(prompt.to_string()),
        };

        let block = self.render_data(data)?;
        debug!("{} format:\n{}", self.format.label(), block);

        Ok(format!(
            "{}\n\nData ({} format):\n{}",
            prompt,
            self.format.label(),
            block
        ))
    }
}

/// JSON rendering of a value that writes integral floats without a
/// fraction (`1.0` as `1`), the way the TOON block does.
struct JsonView<'a>(&'a ToonValue);

impl Serialize for JsonView<'_> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            ToonValue::Number(Number::Float(f))
                if f.is_finite() && f.fract() == 0.0 && f.abs() <= MAX_EXACT_FLOAT =>
            {
                serializer.serialize_i64(*f as i64)
            }
            ToonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&JsonView(item))?;
                }
                seq.end()
            }
            ToonValue::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (key, value) in obj.iter() {
                    map.serialize_entry(key, &JsonView(value))?;
                }
                map.end()
            }
            other => other.serialize(serializer),
        }
    }
}

/// Builds a prompt with default encoder options.
///
/// # Errors
///
/// See [`PromptBuilder::build`].
pub fn build_prompt(prompt: &str, data: Option<&ToonValue>, format: DataFormat) -> Result<String> {
    PromptBuilder::new(format).build(prompt, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{toon, Delimiter, Error};

    #[test]
    fn test_toon_block() {
        let data = toon!({"a": 1, "b": "x"});
        let prompt = build_prompt("Summarize.", Some(&data), DataFormat::Toon).unwrap();
        assert_eq!(prompt, "Summarize.\n\nData (TOON format):\na:1;b:x");
    }

    #[test]
    fn test_json_block_is_pretty_and_ordered() {
        let data = toon!({"b": 1, "a": [true]});
        let prompt = build_prompt("Summarize.", Some(&data), DataFormat::Json).unwrap();
        assert_eq!(
            prompt,
            "Summarize.\n\nData (JSON format):\n{\n  \"b\": 1,\n  \"a\": [\n    true\n  ]\n}"
        );
    }

    #[test]
    fn test_json_block_drops_integral_fractions() {
        let data = ToonValue::from_json(r#"{"a": 1.0, "b": -0.0, "c": 2.5, "d": 1e300}"#).unwrap();
        let block = PromptBuilder::new(DataFormat::Json).render_data(&data).unwrap();
        assert_eq!(block, "{\n  \"a\": 1,\n  \"b\": 0,\n  \"c\": 2.5,\n  \"d\": 1e300\n}");

        let toon = PromptBuilder::new(DataFormat::Toon).render_data(&data).unwrap();
        assert!(toon.starts_with("a:1;b:0;c:2.5;d:1"));
    }

    #[test]
    fn test_falsy_data_leaves_prompt_alone() {
        for data in [toon!(null), toon!(false), toon!(0), toon!(""), toon!(undefined)] {
            let prompt = build_prompt("Hi", Some(&data), DataFormat::Toon).unwrap();
            assert_eq!(prompt, "Hi");
        }
    }

    #[test]
    fn test_empty_object_still_gets_a_header() {
        let prompt = build_prompt("Hi", Some(&toon!({})), DataFormat::Toon).unwrap();
        assert_eq!(prompt, "Hi\n\nData (TOON format):\n");
    }

    #[test]
    fn test_builder_options_apply() {
        let builder = PromptBuilder::new(DataFormat::Toon)
            .with_options(FlattenOptions::new().with_delimiter(Delimiter::Newline));
        let prompt = builder.build("Go", Some(&toon!({"a": 1, "b": 2}))).unwrap();
        assert_eq!(prompt, "Go\n\nData (TOON format):\na:1\nb:2");
    }

    #[test]
    fn test_encoder_errors_propagate() {
        let builder = PromptBuilder::new(DataFormat::Toon)
            .with_options(FlattenOptions::new().with_max_depth(1));
        let err = builder.build("Go", Some(&toon!({"a": {"b": 1}}))).unwrap_err();
        assert_eq!(err, Error::depth_limit(1, "a"));
    }

    #[test]
    fn test_format_wire_names() {
        assert_eq!(serde_json::to_string(&DataFormat::Toon).unwrap(), "\"toon\"");
        let format: DataFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, DataFormat::Json);
        assert_eq!(DataFormat::from_use_toon(true), DataFormat::Toon);
        assert_eq!(DataFormat::from_use_toon(false).to_string(), "json");
    }
}
