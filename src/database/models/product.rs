use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// A catalog product row. `features` and `countries_served` live in JSONB
/// columns and are never null on read; `Json` serializes them as plain
/// arrays in API responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub features: Json<Vec<String>>,
    pub packaging_options: String,
    pub moq: String,
    pub countries_served: Json<Vec<String>>,
    pub shelf_life: String,
    pub grades: String,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for create and update. Every field is optional so PUT
/// can carry a partial document; create enforces its own required fields.
/// Typed fields reject malformed input (e.g. a number for `name`) with a
/// deserialization error instead of silently coercing it.
#[derive(Debug, Default, Deserialize)]
pub struct ProductInput {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub features: Option<StringList>,
    pub packaging_options: Option<String>,
    pub moq: Option<String>,
    pub countries_served: Option<StringList>,
    pub shelf_life: Option<String>,
    pub grades: Option<String>,
    pub display_order: Option<i32>,
}

/// List-valued input accepted either as a JSON array of strings or as one
/// comma-separated string ("a, b" is equivalent to ["a","b"]).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StringList {
    Items(Vec<String>),
    Joined(String),
}

impl StringList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringList::Items(items) => items,
            StringList::Joined(joined) => joined
                .split(',')
                .map(|entry| entry.trim().to_string())
                .filter(|entry| !entry.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_list_accepts_array() {
        let list: StringList = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(list.into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn string_list_splits_comma_separated_input() {
        let list: StringList = serde_json::from_value(json!("a, b")).unwrap();
        assert_eq!(list.into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn string_list_trims_and_drops_empty_entries() {
        let list: StringList = serde_json::from_value(json!(" a ,, b ,")).unwrap();
        assert_eq!(list.into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn empty_string_yields_empty_list() {
        let list: StringList = serde_json::from_value(json!("")).unwrap();
        assert!(list.into_vec().is_empty());
    }

    #[test]
    fn non_string_shapes_are_rejected() {
        assert!(serde_json::from_value::<StringList>(json!(5)).is_err());
        assert!(serde_json::from_value::<StringList>(json!({"a": 1})).is_err());
        assert!(serde_json::from_value::<StringList>(json!([1, 2])).is_err());
    }

    #[test]
    fn partial_payload_leaves_absent_fields_none() {
        let input: ProductInput =
            serde_json::from_value(json!({ "description": "updated" })).unwrap();
        assert_eq!(input.description.as_deref(), Some("updated"));
        assert!(input.name.is_none());
        assert!(input.moq.is_none());
        assert!(input.display_order.is_none());
    }
}
