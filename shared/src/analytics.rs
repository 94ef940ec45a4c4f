//! Analytics aggregation helpers
//!
//! Best-seller ranking over fetched orders and dense revenue series for charts.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::{BestSeller, DailyRevenue, MealType, MonthlyRevenue, Order};
use crate::order::OrderStatus;
use crate::order::money::{to_decimal, to_f64};

/// Rank best sellers, most units first, revenue breaking ties
pub fn sort_best_sellers(items: &mut [BestSeller]) {
    items.sort_by(|a, b| {
        b.quantity
            .cmp(&a.quantity)
            .then_with(|| b.revenue.total_cmp(&a.revenue))
            .then_with(|| a.meal_type.cmp(&b.meal_type))
            .then_with(|| a.sabji.cmp(&b.sabji))
    });
}

/// Aggregate order lines by (meal type, sabji) and keep the top `limit`
///
/// Cancelled orders do not count.
pub fn rank_best_sellers(orders: &[Order], limit: usize) -> Vec<BestSeller> {
    let mut totals: HashMap<(MealType, Option<String>), (u64, Decimal)> = HashMap::new();
    for order in orders.iter().filter(|o| o.status() != Some(OrderStatus::Cancelled)) {
        for item in &order.items {
            let entry = totals
                .entry((item.meal_type, item.sabji.clone()))
                .or_insert((0, Decimal::ZERO));
            entry.0 += u64::from(item.quantity);
            entry.1 += to_decimal(item.total_price);
        }
    }

    let mut ranked: Vec<BestSeller> = totals
        .into_iter()
        .map(|((meal_type, sabji), (quantity, revenue))| BestSeller {
            meal_type,
            sabji,
            quantity,
            revenue: to_f64(revenue),
        })
        .collect();
    sort_best_sellers(&mut ranked);
    ranked.truncate(limit);
    ranked
}

/// Twelve monthly revenue values, zero where the backend sent no bucket
pub fn monthly_series(data: &MonthlyRevenue) -> Vec<f64> {
    let mut series = vec![0.0; 12];
    for bucket in &data.months {
        if let Some(slot) = bucket.month.checked_sub(1).and_then(|i| series.get_mut(i as usize)) {
            *slot = bucket.revenue;
        }
    }
    series
}

/// Number of days in a month, `None` for an invalid year/month
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(next.signed_duration_since(first).num_days() as u32)
}

/// One revenue value per day of the month
pub fn daily_series(data: &DailyRevenue) -> Vec<f64> {
    let len = days_in_month(data.year, data.month).unwrap_or(0) as usize;
    let mut series = vec![0.0; len];
    for bucket in &data.days {
        if let Some(slot) = bucket.day.checked_sub(1).and_then(|i| series.get_mut(i as usize)) {
            *slot = bucket.revenue;
        }
    }
    series
}

/// Current year and month in UTC, the analytics screen's default period
pub fn current_period() -> (i32, u32) {
    let today = crate::menu_filter::today_utc();
    (today.year(), today.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayRevenue, MonthRevenue};

    fn order(status: &str, items: &str) -> Order {
        serde_json::from_str(&format!(
            r#"{{"_id":"o","userId":"u","providerId":"p","items":{items},"grandTotal":0,"status":"{status}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_rank_best_sellers() {
        let orders = vec![
            order(
                "delivered",
                r#"[{"mealType":"full","sabji":"Paneer","quantity":2,"totalPrice":240},{"mealType":"riceOnly","quantity":1,"totalPrice":40}]"#,
            ),
            order(
                "pending",
                r#"[{"mealType":"full","sabji":"Paneer","quantity":1,"totalPrice":120},{"mealType":"half","sabji":"Dal","quantity":3,"totalPrice":210}]"#,
            ),
            order(
                "cancelled",
                r#"[{"mealType":"riceOnly","quantity":10,"totalPrice":400}]"#,
            ),
        ];

        let ranked = rank_best_sellers(&orders, 2);
        assert_eq!(ranked.len(), 2);
        // Paneer full and Dal half tie on units; revenue decides
        assert_eq!(ranked[0].sabji.as_deref(), Some("Paneer"));
        assert_eq!(ranked[0].quantity, 3);
        assert_eq!(ranked[0].revenue, 360.0);
        assert_eq!(ranked[1].meal_type, MealType::Half);
        assert_eq!(ranked[1].revenue, 210.0);
    }

    #[test]
    fn test_monthly_series_fills_gaps() {
        let data = MonthlyRevenue {
            year: 2026,
            months: vec![
                MonthRevenue { month: 2, revenue: 500.0, orders: 5 },
                MonthRevenue { month: 12, revenue: 80.0, orders: 1 },
                MonthRevenue { month: 13, revenue: 1.0, orders: 1 },
            ],
        };
        let series = monthly_series(&data);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0], 0.0);
        assert_eq!(series[1], 500.0);
        assert_eq!(series[11], 80.0);
    }

    #[test]
    fn test_daily_series_matches_month_length() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2026, 2), Some(28));
        assert_eq!(days_in_month(2026, 12), Some(31));
        assert_eq!(days_in_month(2026, 13), None);

        let data = DailyRevenue {
            year: 2026,
            month: 4,
            days: vec![DayRevenue { day: 30, revenue: 90.0, orders: 2 }],
        };
        let series = daily_series(&data);
        assert_eq!(series.len(), 30);
        assert_eq!(series[29], 90.0);
    }
}
