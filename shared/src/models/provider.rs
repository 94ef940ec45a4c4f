//! Provider Model

use serde::{Deserialize, Serialize};

/// Meal provider as listed to customers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Provider {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

super::mongo_document!(Provider);
