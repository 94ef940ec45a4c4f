//! Order being composed by a customer against one menu

use rust_decimal::Decimal;

use super::money::{MAX_QUANTITY, to_decimal, to_f64};
use super::pricing::{PricedOrder, price_items};
use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{MealType, Menu, OrderCreate, OrderItemInput, PriceTable};

/// Editable list of lines for a selected menu
///
/// Always holds at least one line. A new line is a full meal with the menu's
/// first sabji and quantity 1.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    menu_id: String,
    prices: PriceTable,
    sabjis: Vec<String>,
    items: Vec<OrderItemInput>,
}

impl OrderDraft {
    /// Start a draft; menus without sabjis cannot be ordered
    pub fn new(menu: &Menu) -> AppResult<Self> {
        if menu.sabjis.is_empty() {
            return Err(AppError::new(ErrorCode::MenuHasNoSabjis).with_detail("menu", menu.id.as_str()));
        }
        let mut draft = Self {
            menu_id: menu.id.clone(),
            prices: menu.prices,
            sabjis: menu.sabjis.clone(),
            items: Vec::new(),
        };
        draft.add_item();
        Ok(draft)
    }

    pub fn menu_id(&self) -> &str {
        &self.menu_id
    }

    pub fn sabjis(&self) -> &[String] {
        &self.sabjis
    }

    pub fn items(&self) -> &[OrderItemInput] {
        &self.items
    }

    fn default_sabji(&self) -> Option<String> {
        self.sabjis.first().cloned()
    }

    fn item_mut(&mut self, index: usize) -> AppResult<&mut OrderItemInput> {
        self.items
            .get_mut(index)
            .ok_or_else(|| AppError::not_found("Order item").with_detail("index", index))
    }

    /// Append a full meal with the first sabji
    pub fn add_item(&mut self) {
        let sabji = self.default_sabji();
        self.items.push(OrderItemInput {
            meal_type: MealType::Full,
            sabji,
            quantity: 1,
        });
    }

    /// Remove a line; the last remaining line cannot be removed
    pub fn remove_item(&mut self, index: usize) -> AppResult<()> {
        if self.items.len() <= 1 {
            return Err(AppError::new(ErrorCode::LastItem));
        }
        self.item_mut(index)?;
        self.items.remove(index);
        Ok(())
    }

    /// Switching to rice only clears the sabji, switching back picks the first one
    pub fn set_meal_type(&mut self, index: usize, meal_type: MealType) -> AppResult<()> {
        let default_sabji = self.default_sabji();
        let item = self.item_mut(index)?;
        item.meal_type = meal_type;
        if !meal_type.requires_sabji() {
            item.sabji = None;
        } else if item.sabji.is_none() {
            item.sabji = default_sabji;
        }
        Ok(())
    }

    pub fn set_sabji(&mut self, index: usize, sabji: &str) -> AppResult<()> {
        if !self.sabjis.iter().any(|s| s == sabji) {
            return Err(AppError::new(ErrorCode::InvalidSabji).with_detail("sabji", sabji));
        }
        let item = self.item_mut(index)?;
        if !item.meal_type.requires_sabji() {
            return Err(AppError::with_message(
                ErrorCode::InvalidSabji,
                "Rice only meals do not take a sabji",
            ));
        }
        item.sabji = Some(sabji.to_string());
        Ok(())
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> AppResult<()> {
        if quantity == 0 || quantity > MAX_QUANTITY {
            return Err(AppError::new(ErrorCode::InvalidQuantity).with_detail("quantity", quantity));
        }
        self.item_mut(index)?.quantity = quantity;
        Ok(())
    }

    pub fn increment(&mut self, index: usize) -> AppResult<()> {
        let item = self.item_mut(index)?;
        item.quantity = (item.quantity + 1).min(MAX_QUANTITY);
        Ok(())
    }

    /// Decrease quantity, never below 1
    pub fn decrement(&mut self, index: usize) -> AppResult<()> {
        let item = self.item_mut(index)?;
        item.quantity = item.quantity.saturating_sub(1).max(1);
        Ok(())
    }

    /// Running total shown while composing
    pub fn total(&self) -> f64 {
        let sum: Decimal = self
            .items
            .iter()
            .map(|i| to_decimal(self.prices.price(i.meal_type)) * Decimal::from(i.quantity))
            .sum();
        to_f64(sum)
    }

    /// Validate and price the draft
    pub fn price(&self) -> AppResult<PricedOrder> {
        price_items(&self.prices, &self.sabjis, &self.items)
    }

    /// Build the place-order payload after validation
    pub fn to_request(&self, user_id: &str) -> AppResult<OrderCreate> {
        self.price()?;
        Ok(OrderCreate {
            user_id: user_id.to_string(),
            menu_id: self.menu_id.clone(),
            items: self.items.clone(),
        })
    }
}
