use chrono::NaiveDate;
use shared::menu_filter;
use shared::models::{MealType, Menu, Order};
use shared::{AppError, ErrorCode, OrderDraft};
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::{Failure, ScreenResult};

/// Today's menus and the order being composed
#[derive(Debug, Default)]
pub struct MenuScreen {
    menus: Vec<Menu>,
    draft: Option<OrderDraft>,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn draft(&self) -> Option<&OrderDraft> {
        self.draft.as_ref()
    }

    /// Load every menu and keep the ones available on the current UTC day
    pub async fn load<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<()> {
        self.load_for(ctx, menu_filter::today_utc()).await
    }

    pub async fn load_for<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        today: NaiveDate,
    ) -> ScreenResult<()> {
        match ctx.api().list_menus().await {
            Ok(menus) => {
                self.menus = menu_filter::todays_menus(&menus, today);
                tracing::debug!(total = menus.len(), today = self.menus.len(), "menus loaded");
                Ok(())
            }
            Err(e) => {
                self.menus.clear();
                Err(ctx.list_failure(e, "Failed to load menus").await)
            }
        }
    }

    /// Start an order for one of the loaded menus
    pub fn select(&mut self, menu_id: &str) -> ScreenResult<&OrderDraft> {
        let menu = self
            .menus
            .iter()
            .find(|m| m.id == menu_id)
            .ok_or_else(|| AppError::new(ErrorCode::MenuNotFound).with_detail("menu", menu_id))?;
        let draft = OrderDraft::new(menu)?;
        tracing::debug!(menu_id, "order started");
        Ok(&*self.draft.insert(draft))
    }

    /// Close the order sheet without placing
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    fn draft_mut(&mut self) -> ScreenResult<&mut OrderDraft> {
        self.draft
            .as_mut()
            .ok_or_else(|| Failure::Alert("Missing required information".into()))
    }

    pub fn add_item(&mut self) -> ScreenResult<()> {
        self.draft_mut()?.add_item();
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> ScreenResult<()> {
        Ok(self.draft_mut()?.remove_item(index)?)
    }

    pub fn set_meal_type(&mut self, index: usize, meal_type: MealType) -> ScreenResult<()> {
        Ok(self.draft_mut()?.set_meal_type(index, meal_type)?)
    }

    pub fn set_sabji(&mut self, index: usize, sabji: &str) -> ScreenResult<()> {
        Ok(self.draft_mut()?.set_sabji(index, sabji)?)
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> ScreenResult<()> {
        Ok(self.draft_mut()?.set_quantity(index, quantity)?)
    }

    pub fn increment(&mut self, index: usize) -> ScreenResult<()> {
        Ok(self.draft_mut()?.increment(index)?)
    }

    pub fn decrement(&mut self, index: usize) -> ScreenResult<()> {
        Ok(self.draft_mut()?.decrement(index)?)
    }

    pub fn total(&self) -> f64 {
        self.draft.as_ref().map(OrderDraft::total).unwrap_or(0.0)
    }

    /// Send the draft; success clears it
    pub async fn place_order<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<Order> {
        let user = ctx.require_user().await?;
        let request = self.draft_mut()?.to_request(&user.id)?;
        let order = match ctx.api().place_order(&request).await {
            Ok(order) => order,
            Err(e) => return Err(ctx.action_failure(e, "Failed to place order").await),
        };
        tracing::info!(order_id = %order.id, total = order.grand_total, "order placed");
        self.draft = None;
        Ok(order)
    }
}
