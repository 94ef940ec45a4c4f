//! Menu Model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::user::UserRef;

/// Portion size of a tiffin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MealType {
    #[default]
    Full,
    Half,
    RiceOnly,
}

impl MealType {
    pub const ALL: [MealType; 3] = [MealType::Full, MealType::Half, MealType::RiceOnly];

    /// Whether a sabji must be chosen for this portion
    pub fn requires_sabji(&self) -> bool {
        !matches!(self, MealType::RiceOnly)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealType::Full => "Full",
            MealType::Half => "Half",
            MealType::RiceOnly => "Rice Only",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for MealType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" => Ok(MealType::Full),
            "half" => Ok(MealType::Half),
            "riceonly" | "rice-only" | "rice_only" | "rice" => Ok(MealType::RiceOnly),
            other => Err(format!("unknown meal type: {other}")),
        }
    }
}

/// Price per portion
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceTable {
    pub full: f64,
    pub half: f64,
    pub rice_only: f64,
}

impl PriceTable {
    pub fn new(full: f64, half: f64, rice_only: f64) -> Self {
        Self {
            full,
            half,
            rice_only,
        }
    }

    /// Unit price for a portion
    pub fn price(&self, meal_type: MealType) -> f64 {
        match meal_type {
            MealType::Full => self.full,
            MealType::Half => self.half,
            MealType::RiceOnly => self.rice_only,
        }
    }
}

/// A provider's offering for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Menu {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub provider_id: UserRef,
    /// ISO-8601 timestamp; only the calendar day matters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub sabjis: Vec<String>,
    #[serde(default)]
    pub prices: PriceTable,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<String>,
}

super::mongo_document!(Menu);

impl Menu {
    /// Soft-deleted or explicitly deactivated
    pub fn is_withdrawn(&self) -> bool {
        self.is_active == Some(false) || self.deleted_at.is_some()
    }

    pub fn provider_name(&self) -> Option<&str> {
        self.provider_id.name()
    }
}

/// Create menu payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreate {
    pub provider_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub sabjis: Vec<String>,
    pub prices: PriceTable,
}

/// Update menu payload (partial)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sabjis: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<PriceTable>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Reference to a menu: bare id or populated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuRef {
    Id(String),
    Populated(Box<Menu>),
}

impl MenuRef {
    pub fn id(&self) -> &str {
        match self {
            MenuRef::Id(id) => id,
            MenuRef::Populated(menu) => &menu.id,
        }
    }

    pub fn populated(&self) -> Option<&Menu> {
        match self {
            MenuRef::Id(_) => None,
            MenuRef::Populated(menu) => Some(menu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_wire_names() {
        assert_eq!(serde_json::to_string(&MealType::RiceOnly).unwrap(), "\"riceOnly\"");
        let m: MealType = serde_json::from_str("\"half\"").unwrap();
        assert_eq!(m, MealType::Half);
        assert_eq!("rice-only".parse::<MealType>(), Ok(MealType::RiceOnly));
        assert!("thali".parse::<MealType>().is_err());
    }

    #[test]
    fn test_menu_with_populated_provider() {
        let json = r#"{
            "_id": "m1",
            "providerId": {"_id": "p1", "name": "Annapurna"},
            "date": "2026-10-18T00:00:00.000Z",
            "sabjis": ["Aloo Gobi", "Paneer"],
            "prices": {"full": 120, "half": 70, "riceOnly": 40},
            "isActive": true
        }"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(menu.provider_id.id(), "p1");
        assert_eq!(menu.provider_name(), Some("Annapurna"));
        assert_eq!(menu.prices.price(MealType::RiceOnly), 40.0);
        assert!(!menu.is_withdrawn());
    }

    #[test]
    fn test_menu_list_with_both_id_keys() {
        let json = r#"{"count":1,"menus":[{"_id":"m1","id":"m1","providerId":{"_id":"p1","id":"p1"},"sabjis":["Dal"]}]}"#;
        let list: crate::client::MenuListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.menus[0].id, "m1");
        assert_eq!(list.menus[0].provider_id.id(), "p1");
    }

    #[test]
    fn test_withdrawn_menu() {
        let json = r#"{"_id":"m2","providerId":"p1","prices":{"full":1,"half":1,"riceOnly":1},"deletedAt":"2026-10-01T00:00:00Z"}"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert!(menu.is_withdrawn());
        assert!(menu.sabjis.is_empty());
    }

    #[test]
    fn test_update_skips_unset_fields() {
        let update = MenuUpdate {
            sabjis: Some(vec!["Bhindi".into()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"sabjis":["Bhindi"]}"#
        );
    }
}
