use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The static type of a binding or of a method input/output.
///
/// On the wire this is a single-key object: `{"Object": "<object id>"}` or
/// `{"String": ""}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Object(String),
    String,
}

impl Type {
    pub fn object(id: impl Into<String>) -> Self {
        Type::Object(id.into())
    }

    /// The object id, if this is an `Object` type.
    pub fn object_id(&self) -> Option<&str> {
        match self {
            Type::Object(id) => Some(id),
            Type::String => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Object(id) => write!(f, "object {}", id),
            Type::String => write!(f, "text"),
        }
    }
}

impl Serialize for Type {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Type::Object(id) => map.serialize_entry("Object", id)?,
            Type::String => map.serialize_entry("String", "")?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Type {
    fn deserialize<D>(deserializer: D) -> Result<Type, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TypeVisitor)
    }
}

const VARIANTS: &[&str] = &["Object", "String"];

struct TypeVisitor;

impl<'de> Visitor<'de> for TypeVisitor {
    type Value = Type;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "a single-key object {{\"Object\": id}} or {{\"String\": \"\"}}")
    }

    // Bare "String" shows up in hand-written catalogs.
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match value {
            "String" => Ok(Type::String),
            other => Err(de::Error::unknown_variant(other, VARIANTS)),
        }
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let key = map
            .next_key::<String>()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;

        let value = match key.as_str() {
            "Object" => Type::Object(map.next_value::<String>()?),
            "String" => {
                map.next_value::<IgnoredAny>()?;
                Type::String
            }
            other => return Err(de::Error::unknown_variant(other, VARIANTS)),
        };

        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(2, &self));
        }
        Ok(value)
    }
}
