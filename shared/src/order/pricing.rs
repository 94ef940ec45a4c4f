//! Order total computation
//!
//! A line total is the menu's unit price for the meal type times the
//! quantity; the grand total is the sum of line totals.

use rust_decimal::Decimal;

use super::money::{MAX_QUANTITY, to_decimal, to_f64, validate_price};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{Menu, OrderItem, OrderItemInput, PriceTable};

/// Priced lines with their grand total
#[derive(Debug, Clone, PartialEq)]
pub struct PricedOrder {
    pub items: Vec<OrderItem>,
    pub grand_total: f64,
}

/// `unit_price × quantity`, rounded to cents
pub fn line_total(unit_price: f64, quantity: u32) -> f64 {
    to_f64(to_decimal(unit_price) * Decimal::from(quantity))
}

/// Sum of the lines' totals
pub fn grand_total(items: &[OrderItem]) -> f64 {
    to_f64(items.iter().map(|i| to_decimal(i.total_price)).sum())
}

/// Check one requested line against the menu's sabjis
pub fn validate_item(sabjis: &[String], item: &OrderItemInput) -> AppResult<()> {
    if item.quantity == 0 || item.quantity > MAX_QUANTITY {
        return Err(AppError::new(ErrorCode::InvalidQuantity).with_detail("quantity", item.quantity));
    }
    match (item.meal_type.requires_sabji(), item.sabji.as_deref()) {
        (true, Some(sabji)) if sabjis.iter().any(|s| s == sabji) => Ok(()),
        (true, Some(sabji)) => Err(AppError::new(ErrorCode::InvalidSabji).with_detail("sabji", sabji)),
        (true, None) => Err(AppError::new(ErrorCode::InvalidSabji)),
        (false, None) => Ok(()),
        (false, Some(_)) => Err(AppError::with_message(
            ErrorCode::InvalidSabji,
            "Rice only meals do not take a sabji",
        )),
    }
}

/// Validate and price every requested line
pub fn price_items(
    prices: &PriceTable,
    sabjis: &[String],
    items: &[OrderItemInput],
) -> AppResult<PricedOrder> {
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }

    let mut priced = Vec::with_capacity(items.len());
    for item in items {
        validate_item(sabjis, item)?;
        let unit_price = prices.price(item.meal_type);
        validate_price(unit_price, &item.meal_type.to_string())?;
        priced.push(OrderItem {
            meal_type: item.meal_type,
            sabji: item.sabji.clone(),
            quantity: item.quantity,
            price_per_unit: unit_price,
            total_price: line_total(unit_price, item.quantity),
        });
    }

    let grand_total = grand_total(&priced);
    Ok(PricedOrder {
        items: priced,
        grand_total,
    })
}

/// [`price_items`] against a menu's price table and sabjis
pub fn price_menu_order(menu: &Menu, items: &[OrderItemInput]) -> AppResult<PricedOrder> {
    price_items(&menu.prices, &menu.sabjis, items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealType;

    fn sabjis() -> Vec<String> {
        vec!["Aloo Gobi".to_string(), "Paneer".to_string()]
    }

    fn item(meal_type: MealType, sabji: Option<&str>, quantity: u32) -> OrderItemInput {
        OrderItemInput {
            meal_type,
            sabji: sabji.map(str::to_string),
            quantity,
        }
    }

    #[test]
    fn test_reference_order() {
        let prices = PriceTable::new(120.0, 70.0, 40.0);
        let priced = price_items(
            &prices,
            &sabjis(),
            &[
                item(MealType::Full, Some("Paneer"), 2),
                item(MealType::RiceOnly, None, 1),
            ],
        )
        .unwrap();

        let totals: Vec<f64> = priced.items.iter().map(|i| i.total_price).collect();
        assert_eq!(totals, vec![240.0, 40.0]);
        assert_eq!(priced.grand_total, 280.0);
        assert_eq!(priced.items[0].price_per_unit, 120.0);
    }

    #[test]
    fn test_line_total_is_price_times_quantity() {
        let prices = PriceTable::new(120.0, 70.5, 40.0);
        for meal_type in MealType::ALL {
            for qty in 1..=5 {
                let expected = prices.price(meal_type) * qty as f64;
                assert_eq!(line_total(prices.price(meal_type), qty), expected);
            }
        }
    }

    #[test]
    fn test_grand_total_sums_lines() {
        let prices = PriceTable::new(99.99, 55.55, 33.33);
        let priced = price_items(
            &prices,
            &sabjis(),
            &[
                item(MealType::Full, Some("Aloo Gobi"), 3),
                item(MealType::Half, Some("Paneer"), 1),
                item(MealType::RiceOnly, None, 2),
            ],
        )
        .unwrap();
        assert_eq!(priced.grand_total, 422.18);
        assert_eq!(grand_total(&priced.items), priced.grand_total);
    }

    #[test]
    fn test_sabji_rules() {
        let prices = PriceTable::new(120.0, 70.0, 40.0);
        let err = price_items(&prices, &sabjis(), &[item(MealType::Half, None, 1)]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSabji);

        let err = price_items(&prices, &sabjis(), &[item(MealType::Full, Some("Bhindi"), 1)])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSabji);

        let err = price_items(&prices, &sabjis(), &[item(MealType::RiceOnly, Some("Paneer"), 1)])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSabji);
    }

    #[test]
    fn test_quantity_and_price_rules() {
        let prices = PriceTable::new(120.0, 70.0, 40.0);
        let err = price_items(&prices, &sabjis(), &[item(MealType::Full, Some("Paneer"), 0)])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidQuantity);

        let free_rice = PriceTable::new(120.0, 70.0, 0.0);
        let err = price_items(&free_rice, &sabjis(), &[item(MealType::RiceOnly, None, 1)])
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPrice);

        let err = price_items(&prices, &sabjis(), &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::OrderEmpty);
    }
}
