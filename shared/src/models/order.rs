//! Order Model

use serde::{Deserialize, Serialize};

use super::menu::{MealType, MenuRef};
use super::user::UserRef;
use crate::order::OrderStatus;

/// Priced line of a placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sabji: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub price_per_unit: f64,
    #[serde(default)]
    pub total_price: f64,
}

impl OrderItem {
    /// "Full - Paneer", "Rice Only"
    pub fn display_name(&self) -> String {
        match (&self.meal_type, &self.sabji) {
            (MealType::RiceOnly, _) => MealType::RiceOnly.label().to_string(),
            (meal_type, Some(sabji)) => format!("{} - {}", meal_type.label(), sabji),
            (meal_type, None) => meal_type.label().to_string(),
        }
    }
}

/// Status string as sent by the backend
///
/// Values this client does not know are kept verbatim so the order still
/// loads and renders with a neutral style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireStatus {
    Known(OrderStatus),
    Unknown(String),
}

impl WireStatus {
    pub fn as_str(&self) -> &str {
        match self {
            WireStatus::Known(status) => status.as_str(),
            WireStatus::Unknown(raw) => raw,
        }
    }
}

impl From<OrderStatus> for WireStatus {
    fn from(status: OrderStatus) -> Self {
        WireStatus::Known(status)
    }
}

/// Placed order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", remote = "Self")]
pub struct Order {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub user_id: UserRef,
    pub provider_id: UserRef,
    #[serde(default)]
    pub menu_id: Option<MenuRef>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub grand_total: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WireStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

super::mongo_document!(Order);

impl Order {
    /// Current status; orders without one are pending, unrecognised ones are `None`
    pub fn status(&self) -> Option<OrderStatus> {
        match &self.status {
            None => Some(OrderStatus::Pending),
            Some(WireStatus::Known(status)) => Some(*status),
            Some(WireStatus::Unknown(_)) => None,
        }
    }

    /// Raw status string, `None` when the backend sent none
    pub fn raw_status(&self) -> Option<&str> {
        self.status.as_ref().map(WireStatus::as_str)
    }

    /// Short id shown to users: the last six characters of `_id`
    pub fn display_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(5)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }

    pub fn customer_name(&self) -> &str {
        self.user_id.name().unwrap_or("Customer")
    }

    pub fn provider_name(&self) -> &str {
        self.provider_id.name().unwrap_or("Provider")
    }

    /// Date the order is for, preferring the menu date
    pub fn menu_date(&self) -> Option<&str> {
        self.menu_id
            .as_ref()
            .and_then(|m| m.populated())
            .and_then(|m| m.date.as_deref())
            .or(self.order_date.as_deref())
    }
}

/// Requested line when placing an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemInput {
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sabji: Option<String>,
    pub quantity: u32,
}

/// Place order payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub user_id: String,
    pub menu_id: String,
    pub items: Vec<OrderItemInput>,
}

/// Status update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_json(status: Option<&str>) -> String {
        let status = status
            .map(|s| format!(r#","status":"{s}""#))
            .unwrap_or_default();
        format!(
            r#"{{"_id":"65f0c0ffee1234abcdef","userId":{{"_id":"u1","name":"Ravi","address":"12 MG Road"}},"providerId":"p1","menuId":null,"items":[{{"mealType":"full","sabji":"Paneer","quantity":2,"pricePerUnit":120,"totalPrice":240}},{{"mealType":"riceOnly","quantity":1,"pricePerUnit":40,"totalPrice":40}}],"grandTotal":280{status}}}"#
        )
    }

    #[test]
    fn test_missing_status_is_pending() {
        let order: Order = serde_json::from_str(&order_json(None)).unwrap();
        assert_eq!(order.status(), Some(OrderStatus::Pending));
        assert_eq!(order.raw_status(), None);
        assert!(order.menu_id.is_none());
    }

    #[test]
    fn test_explicit_status() {
        let order: Order = serde_json::from_str(&order_json(Some("ready"))).unwrap();
        assert_eq!(order.status(), Some(OrderStatus::Ready));
    }

    #[test]
    fn test_unknown_status_is_kept() {
        let order: Order = serde_json::from_str(&order_json(Some("outForDelivery"))).unwrap();
        assert_eq!(order.status(), None);
        assert_eq!(order.raw_status(), Some("outForDelivery"));
        assert_eq!(
            serde_json::to_value(&order).unwrap()["status"],
            "outForDelivery"
        );
    }

    #[test]
    fn test_order_list_with_mixed_id_keys_and_statuses() {
        let json = format!(
            r#"{{"count":2,"orders":[{},{}]}}"#,
            order_json(Some("shipped")),
            r#"{"_id":"o2","id":"o2","userId":"u1","providerId":"p1","status":"ready"}"#
        );
        let list: crate::client::OrderListResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(list.orders.len(), 2);
        assert_eq!(list.orders[0].status(), None);
        assert_eq!(list.orders[1].id, "o2");
        assert_eq!(list.orders[1].status(), Some(OrderStatus::Ready));
    }

    #[test]
    fn test_display_helpers() {
        let order: Order = serde_json::from_str(&order_json(None)).unwrap();
        assert_eq!(order.display_id(), "abcdef");
        assert_eq!(order.customer_name(), "Ravi");
        assert_eq!(order.provider_name(), "Provider");
        assert_eq!(order.items[0].display_name(), "Full - Paneer");
        assert_eq!(order.items[1].display_name(), "Rice Only");
    }

    #[test]
    fn test_short_id_shorter_than_six() {
        let mut order: Order = serde_json::from_str(&order_json(None)).unwrap();
        order.id = "abc".into();
        assert_eq!(order.display_id(), "abc");
    }

    #[test]
    fn test_rice_only_input_omits_sabji() {
        let input = OrderItemInput {
            meal_type: MealType::RiceOnly,
            sabji: None,
            quantity: 1,
        };
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"mealType":"riceOnly","quantity":1}"#
        );
    }
}
