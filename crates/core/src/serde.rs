//! Serde helper functions for permissive JSON request decoding.
//!
//! Request bodies are decoded leniently: object keys match field names
//! case-insensitively (the last duplicate wins), a field with the wrong type
//! falls back to its zero value, and a body that is not a JSON object decodes
//! to the zero value of the whole payload. Nothing here ever fails a request.

use std::{collections::BTreeMap, fmt};

use serde::{
    de::{DeserializeOwned, MapAccess, Visitor},
    Deserialize, Deserializer,
};
use serde_json::{Map, Value};

/// Deserialize a field, treating a type mismatch as the field's default.
///
/// The raw value is captured first so a mismatched field does not abort the
/// surrounding struct.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// A JSON object whose keys are lowercased in document order.
///
/// Keys are folded while the object is read, so a later `"id"` replaces an
/// earlier `"Id"` regardless of how the map would sort them.
struct FoldedObject(BTreeMap<String, Value>);

impl<'de> Deserialize<'de> for FoldedObject {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FoldedVisitor;

        impl<'de> Visitor<'de> for FoldedVisitor {
            type Value = FoldedObject;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = BTreeMap::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    fields.insert(key.to_lowercase(), value);
                }
                Ok(FoldedObject(fields))
            }
        }

        deserializer.deserialize_map(FoldedVisitor)
    }
}

/// Decode a whole request body.
///
/// `T` must name its fields in lowercase for deserialization. Malformed,
/// empty, or non-object JSON yields `T::default()`.
pub fn decode_lenient<T>(bytes: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    let Ok(FoldedObject(fields)) = serde_json::from_slice::<FoldedObject>(bytes) else {
        return T::default();
    };

    let object: Map<String, Value> = fields.into_iter().collect();
    T::deserialize(Value::Object(object)).unwrap_or_default()
}
