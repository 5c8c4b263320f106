//! Find the field that broke serialization
//!
//! `serde_json::to_value` reports a failing field without saying which one.
//! When converting a whole object fails, the object is walked again with this
//! serializer, which tries each top-level field on its own and reports the
//! first that fails.

use serde::ser::{self, Impossible, Serialize, Serializer};
use serde_json::{Error, Value};

/// Name of the first top-level field of `value` that fails to serialize
pub(crate) fn failing_field<T>(value: &T) -> Option<String>
where
    T: Serialize + ?Sized,
{
    value.serialize(FieldLocator).ok().flatten()
}

fn not_an_object() -> Error {
    <Error as ser::Error>::custom("log content is not an object")
}

fn fails<T: Serialize + ?Sized>(value: &T) -> bool {
    serde_json::to_value(value).is_err()
}

struct FieldLocator;

impl Serializer for FieldLocator {
    type Ok = Option<String>;
    type Error = Error;

    type SerializeSeq = Impossible<Option<String>, Error>;
    type SerializeTuple = Impossible<Option<String>, Error>;
    type SerializeTupleStruct = Impossible<Option<String>, Error>;
    type SerializeTupleVariant = Impossible<Option<String>, Error>;
    type SerializeMap = MapLocator;
    type SerializeStruct = MapLocator;
    type SerializeStructVariant = Impossible<Option<String>, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_none(self) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Self::Ok, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, Error> {
        Ok(None)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Self::Ok, Error>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    // Serialized as `{"Variant": value}`, so the variant is the field
    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Error>
    where
        T: ?Sized + Serialize,
    {
        Ok(fails(value).then(|| variant.to_string()))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Error> {
        Err(not_an_object())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Error> {
        Err(not_an_object())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Error> {
        Err(not_an_object())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Error> {
        Err(not_an_object())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Error> {
        Ok(MapLocator::default())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct, Error> {
        Ok(MapLocator::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Error> {
        Err(not_an_object())
    }
}

/// Tries each entry of a map or struct, remembering the first failure
#[derive(Default)]
struct MapLocator {
    key: Option<String>,
    found: Option<String>,
}

impl MapLocator {
    fn check<T: Serialize + ?Sized>(&mut self, name: impl FnOnce() -> String, value: &T) {
        if self.found.is_none() && fails(value) {
            self.found = Some(name());
        }
    }
}

impl ser::SerializeMap for MapLocator {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        // Same key forms serde_json accepts: strings, numbers, booleans
        let name = match serde_json::to_value(key)? {
            Value::String(s) => s,
            other => other.to_string(),
        };
        self.key = Some(name);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        let key = self.key.take().unwrap_or_default();
        self.check(|| key, value);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.found)
    }
}

impl ser::SerializeStruct for MapLocator {
    type Ok = Option<String>;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Error>
    where
        T: ?Sized + Serialize,
    {
        self.check(|| key.to_string(), value);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.found)
    }
}
