use chrono::NaiveDate;
use shared::models::Order;
use shared::theme::StatusStyle;
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::ScreenResult;

/// One order as listed to the customer
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRow {
    pub order: Order,
    pub style: StatusStyle,
}

impl OrderRow {
    pub fn display_id(&self) -> &str {
        self.order.display_id()
    }
}

/// The signed-in customer's orders, optionally for a single day
#[derive(Debug, Default)]
pub struct OrdersScreen {
    pub date: Option<NaiveDate>,
    rows: Vec<OrderRow>,
}

impl OrdersScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[OrderRow] {
        &self.rows
    }

    pub async fn load<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<()> {
        let user = ctx.require_user().await?;
        let theme = ctx.theme().await;
        match ctx.api().list_orders(&user.id, self.date).await {
            Ok(orders) => {
                self.rows = orders
                    .into_iter()
                    .map(|order| OrderRow {
                        style: theme.status_style_for(order.raw_status()),
                        order,
                    })
                    .collect();
                Ok(())
            }
            Err(e) => {
                self.rows.clear();
                Err(ctx.list_failure(e, "Failed to load orders").await)
            }
        }
    }

    /// Filter by day (or clear the filter) and reload
    pub async fn filter_by<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        date: Option<NaiveDate>,
    ) -> ScreenResult<()> {
        self.date = date;
        self.load(ctx).await
    }
}
