//! Flat TOON serialization through serde.
//!
//! [`Serializer`] streams the encoded document straight from any
//! `T: Serialize` without building an intermediate value: it keeps the
//! current path prefix as a string plus a stack of prefix lengths, and writes
//! a `path:value` token whenever serde hands it a scalar. [`ToonValueSerializer`]
//! builds a [`ToonValue`] instead (see [`to_value`](crate::to_value)).
//!
//! Both count every level of serde nesting (containers, `Some`, newtypes)
//! and fail with [`Error::DepthLimitExceeded`] past the configured limit. A
//! `Serialize` impl that walks a cyclic graph therefore ends in an error
//! rather than a stack overflow.
//!
//! Enums are tagged the way serde_json tags them: a unit variant is a string
//! leaf, the other variants add their name as a path segment.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use toon_flat::{FlattenOptions, Serializer};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! enum Shape {
//!     Circle { r: u32 },
//!     Empty,
//! }
//!
//! let mut serializer = Serializer::new(FlattenOptions::new());
//! vec![Shape::Circle { r: 2 }, Shape::Empty]
//!     .serialize(&mut serializer)
//!     .unwrap();
//! assert_eq!(serializer.into_inner(), "0.Circle.r:2;1:Empty");
//! ```

use crate::options::{DEFAULT_MAX_DEPTH, KEY_VALUE_SEPARATOR};
use crate::value::{widen_f32, UNDEFINED, UNDEFINED_MARKER};
use crate::{Error, FlattenOptions, Number, Path, Result, Segment, ToonMap, ToonValue};
use serde::{ser, Serialize};

/// The streaming flat TOON serializer.
///
/// After an error the path state is restored, so the serializer can be
/// reused; tokens written before the failure stay in the output.
pub struct Serializer {
    output: String,
    options: FlattenOptions,
    prefix: String,
    // Prefix length before each pushed segment.
    marks: Vec<usize>,
    depth: usize,
    tokens: usize,
}

impl Serializer {
    pub fn new(options: FlattenOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            prefix: String::new(),
            marks: Vec::new(),
            depth: 0,
            tokens: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Number of tokens written so far.
    pub fn token_count(&self) -> usize {
        self.tokens
    }

    fn push_segment(&mut self, segment: &str) {
        self.marks.push(self.prefix.len());
        if !self.prefix.is_empty() {
            self.prefix.push(self.options.path_separator);
        }
        self.prefix.push_str(segment);
    }

    fn pop_segment(&mut self) {
        if let Some(mark) = self.marks.pop() {
            self.prefix.truncate(mark);
        }
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.options.max_depth {
            return Err(Error::depth_limit(self.options.max_depth, &self.prefix));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn write_leaf(&mut self, text: &str) {
        if self.tokens > 0 {
            self.output.push_str(self.options.delimiter.as_str());
        }
        self.output.push_str(&self.prefix);
        self.output.push(KEY_VALUE_SEPARATOR);
        self.output.push_str(text);
        self.tokens += 1;
    }

    fn wrapped<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.enter()?;
        let result = value.serialize(&mut *self);
        self.leave();
        result
    }

    fn compound(&mut self, variant: Option<&str>) -> Result<Compound<'_>> {
        self.enter()?;
        if let Some(variant) = variant {
            self.push_segment(variant);
        }
        Ok(Compound {
            ser: self,
            index: 0,
            pending_key: None,
            tagged: variant.is_some(),
        })
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = Compound<'a>;
    type SerializeMap = Compound<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = Compound<'a>;

    fn serialize_bool(self, v: bool) -> Result<Self::Ok> {
        self.write_leaf(if v { "true" } else { "false" });
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Self::Ok> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Self::Ok> {
        self.write_leaf(&v.to_string());
        Ok(())
    }

    fn serialize_i128(self, v: i128) -> Result<Self::Ok> {
        self.write_leaf(&v.to_string());
        Ok(())
    }

    fn serialize_u8(self, v: u8) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Self::Ok> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Self::Ok> {
        self.write_leaf(&v.to_string());
        Ok(())
    }

    fn serialize_u128(self, v: u128) -> Result<Self::Ok> {
        self.write_leaf(&v.to_string());
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<Self::Ok> {
        self.serialize_f64(widen_f32(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Self::Ok> {
        self.write_leaf(&Number::Float(v).to_string());
        Ok(())
    }

    fn serialize_char(self, v: char) -> Result<Self::Ok> {
        let mut buf = [0u8; 4];
        self.write_leaf(v.encode_utf8(&mut buf));
        Ok(())
    }

    fn serialize_str(self, v: &str) -> Result<Self::Ok> {
        self.write_leaf(v);
        Ok(())
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Self::Ok> {
        self.enter()?;
        for (i, byte) in v.iter().enumerate() {
            self.push_segment(&i.to_string());
            self.write_leaf(&byte.to_string());
            self.pop_segment();
        }
        self.leave();
        Ok(())
    }

    fn serialize_none(self) -> Result<Self::Ok> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.wrapped(value)
    }

    fn serialize_unit(self) -> Result<Self::Ok> {
        self.write_leaf("null");
        Ok(())
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Self::Ok> {
        if name == UNDEFINED_MARKER {
            self.write_leaf(UNDEFINED);
            Ok(())
        } else {
            self.serialize_unit()
        }
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Self::Ok> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.wrapped(value)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok>
    where
        T: ?Sized + Serialize,
    {
        self.push_segment(variant);
        let result = self.wrapped(value);
        self.pop_segment();
        result
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.compound(None)
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        self.compound(None)
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.compound(None)
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.compound(Some(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.compound(None)
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.compound(None)
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.compound(Some(variant))
    }
}

/// An open container of the streaming serializer.
pub struct Compound<'a> {
    ser: &'a mut Serializer,
    index: usize,
    pending_key: Option<String>,
    tagged: bool,
}

impl<'a> Compound<'a> {
    fn element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.push_segment(&self.index.to_string());
        let result = value.serialize(&mut *self.ser);
        self.ser.pop_segment();
        self.index += 1;
        result
    }

    fn field<T>(&mut self, key: &str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.push_segment(key);
        let result = value.serialize(&mut *self.ser);
        self.ser.pop_segment();
        result
    }

    // Closing happens on drop, so a container abandoned by an error unwinds too.
    fn finish(self) -> Result<()> {
        Ok(())
    }
}

impl Drop for Compound<'_> {
    fn drop(&mut self) {
        if self.tagged {
            self.ser.pop_segment();
        }
        self.ser.leave();
    }
}

impl<'a> ser::SerializeSeq for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTuple for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleStruct for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeTupleVariant for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeMap for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.pending_key = Some(key_text(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .pending_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.field(&key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeStruct for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

impl<'a> ser::SerializeStructVariant for Compound<'a> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.field(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        self.finish()
    }
}

/// Serializer producing a [`ToonValue`], limited to `max_depth` levels of nesting.
///
/// Each nested serializer borrows the trail of segments leading to it, so a
/// depth error names the same path the flat output would use.
#[derive(Clone, Copy, Debug)]
pub struct ToonValueSerializer<'a> {
    depth: usize,
    max_depth: usize,
    trail: Option<&'a Trail<'a>>,
}

/// One step of the path below the root, linked to its parent.
#[derive(Debug)]
struct Trail<'a> {
    segment: TrailSegment<'a>,
    parent: Option<&'a Trail<'a>>,
}

#[derive(Debug)]
enum TrailSegment<'a> {
    Key(&'a str),
    Index(usize),
}

impl Default for ToonValueSerializer<'static> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl ToonValueSerializer<'static> {
    pub fn new(max_depth: usize) -> Self {
        ToonValueSerializer {
            depth: 0,
            max_depth,
            trail: None,
        }
    }
}

impl<'a> ToonValueSerializer<'a> {
    /// The serializer for one level further down.
    fn descend(self) -> Result<Self> {
        if self.depth >= self.max_depth {
            return Err(Error::depth_limit(self.max_depth, &self.path()));
        }
        Ok(ToonValueSerializer {
            depth: self.depth + 1,
            ..self
        })
    }

    /// The same level, one segment further along the path.
    fn at<'b>(self, trail: &'b Trail<'b>) -> ToonValueSerializer<'b>
    where
        'a: 'b,
    {
        ToonValueSerializer {
            depth: self.depth,
            max_depth: self.max_depth,
            trail: Some(trail),
        }
    }

    fn step<'b>(&self, segment: TrailSegment<'b>) -> Trail<'b>
    where
        'a: 'b,
    {
        Trail {
            segment,
            parent: self.trail,
        }
    }

    fn path(&self) -> String {
        let mut segments = Vec::new();
        let mut current = self.trail;
        while let Some(trail) = current {
            segments.push(match trail.segment {
                TrailSegment::Key(key) => Segment::Key(key.to_string()),
                TrailSegment::Index(index) => Segment::Index(index),
            });
            current = trail.parent;
        }
        segments.reverse();
        Path::from(segments).render('.')
    }
}

pub struct SerializeVec<'a> {
    vec: Vec<ToonValue>,
    inner: ToonValueSerializer<'a>,
}

pub struct SerializeMap<'a> {
    map: ToonMap,
    current_key: Option<String>,
    inner: ToonValueSerializer<'a>,
}

pub struct SerializeTupleVariant<'a> {
    vec: Vec<ToonValue>,
    inner: ToonValueSerializer<'a>,
    variant: &'static str,
    tag: Trail<'a>,
}

pub struct SerializeStructVariant<'a> {
    map: ToonMap,
    inner: ToonValueSerializer<'a>,
    variant: &'static str,
    tag: Trail<'a>,
}

fn tagged(variant: &str, value: ToonValue) -> ToonValue {
    let mut object = ToonMap::with_capacity(1);
    object.insert(variant.to_string(), value);
    ToonValue::Object(object)
}

impl<'a> ser::Serializer for ToonValueSerializer<'a> {
    type Ok = ToonValue;
    type Error = Error;

    type SerializeSeq = SerializeVec<'a>;
    type SerializeTuple = SerializeVec<'a>;
    type SerializeTupleStruct = SerializeVec<'a>;
    type SerializeTupleVariant = SerializeTupleVariant<'a>;
    type SerializeMap = SerializeMap<'a>;
    type SerializeStruct = SerializeMap<'a>;
    type SerializeStructVariant = SerializeStructVariant<'a>;

    fn serialize_bool(self, v: bool) -> Result<ToonValue> {
        Ok(ToonValue::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_u8(self, v: u8) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_f32(self, v: f32) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<ToonValue> {
        Ok(ToonValue::from(v))
    }

    fn serialize_char(self, v: char) -> Result<ToonValue> {
        Ok(ToonValue::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<ToonValue> {
        Ok(ToonValue::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<ToonValue> {
        self.descend()?;
        Ok(ToonValue::Array(v.iter().map(|&b| ToonValue::from(b)).collect()))
    }

    fn serialize_none(self) -> Result<ToonValue> {
        Ok(ToonValue::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<ToonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self.descend()?)
    }

    fn serialize_unit(self) -> Result<ToonValue> {
        Ok(ToonValue::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<ToonValue> {
        if name == UNDEFINED_MARKER {
            Ok(ToonValue::Undefined)
        } else {
            Ok(ToonValue::Null)
        }
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<ToonValue> {
        Ok(ToonValue::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<ToonValue>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self.descend()?)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<ToonValue>
    where
        T: ?Sized + Serialize,
    {
        let inner = self.descend()?;
        let tag = inner.step(TrailSegment::Key(variant));
        let value = value.serialize(inner.at(&tag))?;
        Ok(tagged(variant, value))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec<'a>> {
        Ok(SerializeVec {
            vec: Vec::with_capacity(len.unwrap_or(0)),
            inner: self.descend()?,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec<'a>> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant<'a>> {
        let inner = self.descend()?;
        Ok(SerializeTupleVariant {
            vec: Vec::with_capacity(len),
            inner,
            variant,
            tag: inner.step(TrailSegment::Key(variant)),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap<'a>> {
        Ok(SerializeMap {
            map: ToonMap::with_capacity(len.unwrap_or(0)),
            current_key: None,
            inner: self.descend()?,
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap<'a>> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant<'a>> {
        let inner = self.descend()?;
        Ok(SerializeStructVariant {
            map: ToonMap::with_capacity(len),
            inner,
            variant,
            tag: inner.step(TrailSegment::Key(variant)),
        })
    }
}

impl SerializeVec<'_> {
    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let step = self.inner.step(TrailSegment::Index(self.vec.len()));
        let element = value.serialize(self.inner.at(&step))?;
        self.vec.push(element);
        Ok(())
    }
}

impl ser::SerializeSeq for SerializeVec<'_> {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<ToonValue> {
        Ok(ToonValue::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec<'_> {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<ToonValue> {
        Ok(ToonValue::Array(self.vec))
    }
}

impl ser::SerializeTupleStruct for SerializeVec<'_> {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<ToonValue> {
        Ok(ToonValue::Array(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant<'_> {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let step = Trail {
            segment: TrailSegment::Index(self.vec.len()),
            parent: Some(&self.tag),
        };
        let element = value.serialize(self.inner.at(&step))?;
        self.vec.push(element);
        Ok(())
    }

    fn end(self) -> Result<ToonValue> {
        Ok(tagged(self.variant, ToonValue::Array(self.vec)))
    }
}

impl SerializeMap<'_> {
    fn insert<T>(&mut self, key: String, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let step = self.inner.step(TrailSegment::Key(&key));
        let value = value.serialize(self.inner.at(&step))?;
        self.map.insert(key, value);
        Ok(())
    }
}

impl ser::SerializeMap for SerializeMap<'_> {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key_text(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<ToonValue> {
        Ok(ToonValue::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap<'_> {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<ToonValue> {
        Ok(ToonValue::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant<'_> {
    type Ok = ToonValue;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let step = Trail {
            segment: TrailSegment::Key(key),
            parent: Some(&self.tag),
        };
        let value = value.serialize(self.inner.at(&step))?;
        self.map.insert(key.to_string(), value);
        Ok(())
    }

    fn end(self) -> Result<ToonValue> {
        Ok(tagged(self.variant, ToonValue::Object(self.map)))
    }
}

/// Text of a map key. Strings, chars, numbers and booleans are accepted.
fn key_text<T: Serialize + ?Sized>(key: &T) -> Result<String> {
    match key.serialize(ToonValueSerializer::default())? {
        ToonValue::String(s) => Ok(s),
        value @ (ToonValue::Bool(_) | ToonValue::Number(_) | ToonValue::BigInt(_)) => {
            Ok(value.scalar_text().unwrap_or_default())
        }
        ToonValue::Null => Err(Error::key_must_be_scalar("null")),
        ToonValue::Undefined => Err(Error::key_must_be_scalar("undefined")),
        ToonValue::Array(_) => Err(Error::key_must_be_scalar("a sequence")),
        ToonValue::Object(_) => Err(Error::key_must_be_scalar("a map")),
        ToonValue::Date(_) => Err(Error::key_must_be_scalar("a date")),
    }
}
