//! Vector records, queries and ranked matches.
//!
//! Metadata is carried as a loose JSON map on the read side because the
//! vector provider stores whatever was written and may hand back partial or
//! oddly-typed fields. Accessors on [`RetrievedMatch`] never fail: an absent
//! or malformed field reads as `None`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::activity::SourceType;

/// Metadata key holding the owning user id.
pub const META_USER_ID: &str = "userId";
/// Metadata key holding the source type (`workout`, `meal`, `profile`).
pub const META_TYPE: &str = "type";
/// Metadata key holding the original embedded text.
pub const META_CONTENT: &str = "content";
pub const META_DATE: &str = "date";
pub const META_CALORIES: &str = "calories";
/// Duration in minutes.
pub const META_DURATION: &str = "duration";

/// Metadata written next to a vector at upsert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorMetadata {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl VectorMetadata {
    /// Convert into the loose map form sent to the provider.
    pub fn into_map(self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

/// A vector plus its id and metadata, ready for upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorRecord {
    pub id: String,
    pub values: Vec<f32>,
    pub metadata: VectorMetadata,
}

/// Parameters for a similarity query.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorQuery {
    pub vector: Vec<f32>,
    pub top_k: usize,
    /// Restrict matches to vectors whose `userId` metadata equals this value.
    pub owner_filter: Option<String>,
}

/// One ranked result from a similarity query.
///
/// Ephemeral: lives for the duration of one chat request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RetrievedMatch {
    pub id: String,
    /// Similarity score in [0, 1].
    #[serde(default)]
    pub score: f32,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl RetrievedMatch {
    pub fn source_type(&self) -> Option<&str> {
        self.str_field(META_TYPE)
    }

    pub fn content(&self) -> Option<&str> {
        self.str_field(META_CONTENT)
    }

    pub fn date(&self) -> Option<&str> {
        self.str_field(META_DATE)
    }

    pub fn calories(&self) -> Option<f64> {
        self.num_field(META_CALORIES)
    }

    pub fn duration(&self) -> Option<f64> {
        self.num_field(META_DURATION)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.metadata
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    /// Numbers may come back as JSON numbers or numeric strings.
    fn num_field(&self, key: &str) -> Option<f64> {
        match self.metadata.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn match_with(metadata: Value) -> RetrievedMatch {
        RetrievedMatch {
            id: "m1".into(),
            score: 0.9,
            metadata: metadata.as_object().cloned().unwrap_or_default(),
        }
    }

    #[test]
    fn test_metadata_into_map_uses_provider_keys() {
        let meta = VectorMetadata {
            user_id: "u1".into(),
            source_type: SourceType::Meal,
            content: "oatmeal".into(),
            date: None,
            calories: Some(350.0),
            duration: None,
        };
        let map = meta.into_map();
        assert_eq!(map[META_USER_ID], json!("u1"));
        assert_eq!(map[META_TYPE], json!("meal"));
        assert_eq!(map[META_CALORIES], json!(350.0));
        assert!(!map.contains_key(META_DATE));
        assert!(!map.contains_key(META_DURATION));
    }

    #[test]
    fn test_accessors_tolerate_missing_fields() {
        let m = match_with(json!({}));
        assert!(m.source_type().is_none());
        assert!(m.content().is_none());
        assert!(m.calories().is_none());
    }

    #[test]
    fn test_accessors_tolerate_wrong_types() {
        let m = match_with(json!({
            "type": 42,
            "content": ["not", "a", "string"],
            "calories": "420",
            "duration": {"minutes": 30},
        }));
        assert!(m.source_type().is_none());
        assert!(m.content().is_none());
        assert_eq!(m.calories(), Some(420.0));
        assert!(m.duration().is_none());
    }

    #[test]
    fn test_blank_strings_read_as_absent() {
        let m = match_with(json!({"date": "   "}));
        assert!(m.date().is_none());
    }

    #[test]
    fn test_match_deserializes_without_metadata() {
        let m: RetrievedMatch = serde_json::from_str(r#"{"id":"x","score":0.5}"#).unwrap();
        assert_eq!(m.id, "x");
        assert!(m.metadata.is_empty());
    }
}
