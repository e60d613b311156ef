//! SafeSON decoding.
//!
//! This module provides two decoders:
//!
//! - [`Decoder`]: reads one [`Value`] from a flat (already zero-run expanded)
//!   tagged encoding, with a single bounds check guarding every read.
//! - [`ValueDeserializer`]: a serde `Deserializer` over a decoded [`Value`],
//!   used by [`from_slice`](crate::from_slice) and [`from_value`](crate::from_value).
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root, which
//! also run the envelope check and zero-run expansion:
//!
//! ```rust
//! use safeson::{decode, Value};
//!
//! assert_eq!(decode(&[1]).unwrap(), Value::Bool(true));
//! ```
//!
//! ## Direct Decoder Usage
//!
//! ```rust
//! use safeson::{Decoder, Value};
//!
//! // [ARRAY, len 2, TRUE, NULL]
//! let flat = [5, 2, 1, 2];
//! let mut decoder = Decoder::new(&flat);
//! let value = decoder.read_value().unwrap();
//! decoder.finish().unwrap();
//!
//! assert_eq!(value, Value::Array(vec![Value::Bool(true), Value::Null]));
//! ```

use crate::options::DEFAULT_MAX_DEPTH;
use crate::ser::LONG_LENGTH_MARKER;
use crate::{DecodeOptions, Error, Map, Result, Tag, Value};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

/// Cursor over a flat tagged encoding.
///
/// The position only moves forward; a failed read leaves the decoder in an
/// unspecified position and it should be dropped.
pub struct Decoder<'a> {
    input: &'a [u8],
    position: usize,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder over `input` with the default depth limit.
    pub fn new(input: &'a [u8]) -> Self {
        Decoder {
            input,
            position: 0,
            depth: 0,
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Creates a decoder over `input` configured by `options`.
    pub fn with_options(input: &'a [u8], options: &DecodeOptions) -> Self {
        Decoder {
            max_depth: options.max_depth,
            ..Decoder::new(input)
        }
    }

    /// Byte offset of the next read.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes left after the current position.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.position
    }

    /// Consumes the decoder, failing if any input is left over.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ExtraBytes`] when the cursor is not at the end.
    pub fn finish(self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(Error::extra_bytes(self.position, remaining)),
        }
    }

    fn read(&mut self, count: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if count > remaining {
            return Err(Error::data_shortage(self.position, count, remaining));
        }
        let bytes = &self.input[self.position..self.position + count];
        self.position += count;
        Ok(bytes)
    }

    fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read(1)?[0])
    }

    fn read_f64(&mut self) -> Result<f64> {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(self.read(8)?);
        Ok(f64::from_le_bytes(bytes))
    }

    fn read_length(&mut self) -> Result<usize> {
        let offset = self.position;
        let marker = self.read_byte()?;
        if marker < LONG_LENGTH_MARKER {
            return Ok(marker as usize);
        }

        let length = self.read_f64()?;
        if !(length >= 0.0 && length.fract() == 0.0) {
            return Err(Error::invalid_length(
                offset,
                "length is not a non-negative integer",
            ));
        }
        if length >= usize::MAX as f64 {
            return Err(Error::invalid_length(offset, "length is out of range"));
        }
        Ok(length as usize)
    }

    fn read_str(&mut self) -> Result<String> {
        let length = self.read_length()?;
        let offset = self.position;
        let bytes = self.read(length)?;
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| Error::invalid_utf8(offset, e))
    }

    fn enter(&mut self, offset: usize) -> Result<()> {
        self.depth += 1;
        match self.max_depth {
            Some(limit) if self.depth > limit => Err(Error::depth_limit_exceeded(offset, limit)),
            _ => Ok(()),
        }
    }

    fn read_array(&mut self) -> Result<Vec<Value>> {
        let length = self.read_length()?;
        // every element takes at least one byte
        let mut array = Vec::with_capacity(length.min(self.remaining()));
        for _ in 0..length {
            array.push(self.read_value()?);
        }
        Ok(array)
    }

    fn read_object(&mut self) -> Result<Map> {
        let length = self.read_length()?;
        // every entry takes at least a key length and a tag
        let mut object = Map::with_capacity(length.min(self.remaining() / 2));
        for _ in 0..length {
            let key = self.read_str()?;
            let value = self.read_value()?;
            object.insert(key, value);
        }
        Ok(object)
    }

    /// Reads exactly one value starting at the current position.
    ///
    /// # Errors
    ///
    /// Any decode error: unknown tag, truncated payload, bad length,
    /// invalid UTF-8, or the configured depth limit.
    pub fn read_value(&mut self) -> Result<Value> {
        let offset = self.position;
        let byte = self.read_byte()?;
        let tag = Tag::try_from(byte).map_err(|byte| Error::invalid_type(offset, byte))?;

        match tag {
            Tag::False => Ok(Value::Bool(false)),
            Tag::True => Ok(Value::Bool(true)),
            Tag::Null => Ok(Value::Null),
            Tag::Number => Ok(Value::Number(self.read_f64()?)),
            Tag::String => Ok(Value::String(self.read_str()?)),
            Tag::Array => {
                self.enter(offset)?;
                let array = self.read_array()?;
                self.depth -= 1;
                Ok(Value::Array(array))
            }
            Tag::Object => {
                self.enter(offset)?;
                let object = self.read_object()?;
                self.depth -= 1;
                Ok(Value::Object(object))
            }
        }
    }
}

fn visit_number<'de, V>(n: f64, visitor: V) -> Result<V::Value>
where
    V: de::Visitor<'de>,
{
    // Whole numbers go to integer visitors so `u32` and friends accept them.
    // Negative zero stays a float to keep its sign.
    if n.fract() == 0.0 && !(n == 0.0 && n.is_sign_negative()) {
        if n >= 0.0 && n < u64::MAX as f64 {
            return visitor.visit_u64(n as u64);
        }
        if n < 0.0 && n >= i64::MIN as f64 {
            return visitor.visit_i64(n as i64);
        }
    }
    visitor.visit_f64(n)
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
}

impl SeqDeserializer {
    fn new(vec: Vec<Value>) -> Self {
        SeqDeserializer {
            iter: vec.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<String, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: Map) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(ValueDeserializer::new(Value::String(key)))
                    .map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        match self.iter.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(upper),
            _ => None,
        }
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let variant = seed.deserialize(ValueDeserializer::new(Value::String(self.variant)))?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            _ => Err(Error::custom("Expected unit variant")),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("Expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Array(arr)) => visitor.visit_seq(SeqDeserializer::new(arr)),
            _ => Err(Error::custom("Expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(Value::Object(obj)) => visitor.visit_map(MapDeserializer::new(obj)),
            _ => Err(Error::custom("Expected struct variant")),
        }
    }
}

/// A serde `Deserializer` that reads Rust types out of a decoded [`Value`].
///
/// Enums use the externally tagged layout produced by
/// [`ValueSerializer`](crate::ValueSerializer): a unit variant is its name as a
/// string, any other variant is a one-entry object keyed by the name.
pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => visit_number(n, visitor),
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => visitor.visit_seq(SeqDeserializer::new(arr)),
            Value::Object(obj) => visitor.visit_map(MapDeserializer::new(obj)),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) if obj.len() == 1 => {
                let mut entries = obj.into_iter();
                match entries.next() {
                    Some((variant, value)) => visitor.visit_enum(EnumDeserializer {
                        variant,
                        value: Some(value),
                    }),
                    None => Err(Error::custom("Expected enum variant")),
                }
            }
            _ => Err(Error::custom("Expected enum")),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = ValueDeserializer;

    fn into_deserializer(self) -> ValueDeserializer {
        ValueDeserializer::new(self)
    }
}
