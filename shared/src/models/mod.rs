//! Data models
//!
//! Wire shapes of the tiffin backend. JSON keys are camelCase and documents
//! are identified by Mongo-style `_id` strings. Documents serialized with
//! virtuals carry an `id` copy as well; [`mongo_document!`] accepts both.

use serde_json::Value;

/// Drop the `id` virtual when the document also carries `_id`
pub(crate) fn merge_id_keys(mut value: Value) -> Value {
    if let Value::Object(map) = &mut value {
        if map.contains_key("_id") {
            map.remove("id");
        }
    }
    value
}

/// Serde impls for a document type derived with `#[serde(remote = "Self")]`
///
/// Deserialization goes through [`merge_id_keys`] first so `_id` and `id`
/// may both be present.
macro_rules! mongo_document {
    ($ty:ty) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                <$ty>::deserialize($crate::models::merge_id_keys(value))
                    .map_err(<D::Error as serde::de::Error>::custom)
            }
        }

        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                <$ty>::serialize(self, serializer)
            }
        }
    };
}
pub(crate) use mongo_document;

pub mod analytics;
pub mod menu;
pub mod order;
pub mod provider;
pub mod user;

// Re-exports
pub use analytics::*;
pub use menu::*;
pub use order::*;
pub use provider::*;
pub use user::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_id_keys() {
        let both = merge_id_keys(json!({"_id": "a", "id": "a", "name": "x"}));
        assert_eq!(both, json!({"_id": "a", "name": "x"}));
        let only_id = merge_id_keys(json!({"id": "b"}));
        assert_eq!(only_id, json!({"id": "b"}));
        assert_eq!(merge_id_keys(json!("c")), json!("c"));
    }
}
