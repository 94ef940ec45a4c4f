//! User Model

use serde::{Deserialize, Serialize};

/// Account role; anything other than provider is a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Meal provider account
    Provider,
    /// Customer account
    #[default]
    #[serde(alias = "customer", other)]
    User,
}

impl UserRole {
    pub fn is_provider(&self) -> bool {
        matches!(self, UserRole::Provider)
    }
}

/// Authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}

super::mongo_document!(User);

impl User {
    pub fn is_provider(&self) -> bool {
        self.role.is_provider()
    }
}

/// User embedded in another document (populated reference)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct UserSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

super::mongo_document!(UserSummary);

/// Reference to a user: either a bare id or the populated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Populated(Box<UserSummary>),
}

impl UserRef {
    /// Id of the referenced user, whichever form the backend sent
    pub fn id(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::Populated(user) => &user.id,
        }
    }

    /// The populated document, if any
    pub fn populated(&self) -> Option<&UserSummary> {
        match self {
            UserRef::Id(_) => None,
            UserRef::Populated(user) => Some(user),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.populated().and_then(|u| u.name.as_deref())
    }

    pub fn mobile(&self) -> Option<&str> {
        self.populated().and_then(|u| u.mobile.as_deref())
    }

    pub fn address(&self) -> Option<&str> {
        self.populated().and_then(|u| u.address.as_deref())
    }
}

impl From<&str> for UserRef {
    fn from(id: &str) -> Self {
        UserRef::Id(id.to_string())
    }
}
