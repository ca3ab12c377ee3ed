//! Wire types for the profiles API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A user record as served by `GET /api/profiles`.
///
/// Only the identifier, name, and city are read by the dashboard. Every other
/// field the server sends is kept in `extra` so a record survives a
/// deserialize/serialize pass unchanged.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct Profile {
    /// Server-assigned identifier, serialized as `_id`.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub city: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            extra: Map::new(),
        }
    }
}

/// Lenient input shape. The identifier is `_id` when present, otherwise a
/// plain `id` (which stays in `extra`); either may be a string or a number.
/// Missing or `null` name and city read as empty.
#[derive(Deserialize)]
struct RawProfile {
    #[serde(rename = "_id", default)]
    underscore_id: Option<Value>,
    #[serde(default, deserialize_with = "deserialize_text_or_null")]
    name: String,
    #[serde(default, deserialize_with = "deserialize_text_or_null")]
    city: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawProfile> for Profile {
    type Error = String;

    fn try_from(raw: RawProfile) -> Result<Self, Self::Error> {
        let id = raw
            .underscore_id
            .as_ref()
            .and_then(id_text)
            .or_else(|| raw.extra.get("id").and_then(id_text))
            .ok_or_else(|| "profile has no string or numeric `_id`/`id`".to_owned())?;
        Ok(Self { id, name: raw.name, city: raw.city, extra: raw.extra })
    }
}

fn id_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn deserialize_text_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
