//! Analytics Models
//!
//! Aggregates computed by the backend for a provider.

use serde::{Deserialize, Serialize};

use super::menu::MealType;

/// Overall totals
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_revenue: f64,
    pub total_orders: u64,
    #[serde(default)]
    pub today_revenue: f64,
    #[serde(default)]
    pub today_orders: u64,
    #[serde(default)]
    pub pending_orders: u64,
}

/// Revenue growth between the current and previous period
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthRate {
    pub current_revenue: f64,
    pub previous_revenue: f64,
    /// Percentage, e.g. `12.5` for +12.5%
    pub growth_rate: f64,
}

impl GrowthRate {
    pub fn is_positive(&self) -> bool {
        self.growth_rate >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageOrderValue {
    pub average_order_value: f64,
    #[serde(default)]
    pub total_orders: u64,
}

/// Revenue bucket for one month (1-12)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRevenue {
    pub month: u32,
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRevenue {
    pub year: i32,
    #[serde(default)]
    pub months: Vec<MonthRevenue>,
}

/// Revenue bucket for one day of a month
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRevenue {
    pub day: u32,
    pub revenue: f64,
    #[serde(default)]
    pub orders: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRevenue {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub days: Vec<DayRevenue>,
}

/// One ranked best-selling item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BestSeller {
    pub meal_type: MealType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sabji: Option<String>,
    pub quantity: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BestSellers {
    #[serde(default)]
    pub items: Vec<BestSeller>,
}
