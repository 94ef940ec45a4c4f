use std::collections::HashSet;

use shared::models::Order;
use shared::theme::StatusStyle;
use shared::{AppError, ErrorCode, OrderStatus, TransitionTable};
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::ScreenResult;

/// Incoming orders for the signed-in provider
#[derive(Debug, Default)]
pub struct ProviderOrdersScreen {
    orders: Vec<Order>,
    expanded: HashSet<String>,
    transitions: TransitionTable,
}

impl ProviderOrdersScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transitions(transitions: TransitionTable) -> Self {
        Self {
            transitions,
            ..Self::default()
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub async fn load<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<()> {
        let user = ctx.require_user().await?;
        match ctx.api().provider_orders(&user.id).await {
            Ok(orders) => {
                self.expanded.retain(|id| orders.iter().any(|o| &o.id == id));
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                self.orders.clear();
                Err(ctx.list_failure(e, "Failed to load orders").await)
            }
        }
    }

    /// Expand or collapse an order card; returns whether it is now expanded
    pub fn toggle_expanded(&mut self, order_id: &str) -> bool {
        if self.expanded.remove(order_id) {
            false
        } else {
            self.expanded.insert(order_id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, order_id: &str) -> bool {
        self.expanded.contains(order_id)
    }

    pub async fn status_style<H: HttpClient>(&self, ctx: &AppContext<H>, order: &Order) -> StatusStyle {
        ctx.theme().await.status_style_for(order.raw_status())
    }

    /// Action button for an order, if its status can move forward
    pub fn next_action(&self, order: &Order) -> Option<(OrderStatus, &'static str)> {
        let from = order.status()?;
        let next = from.next()?;
        if !self.transitions.can_transition(from, next) {
            return None;
        }
        Some((next, from.action_label()?))
    }

    pub fn can_cancel(&self, order: &Order) -> bool {
        order.status().is_some_and(|s| self.transitions.can_cancel(s))
    }

    fn current_status(&self, order_id: &str) -> ScreenResult<OrderStatus> {
        let order = self
            .orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound).with_detail("order", order_id))?;
        order.status().ok_or_else(|| {
            AppError::new(ErrorCode::InvalidStatusTransition)
                .with_detail("from", order.raw_status().unwrap_or_default())
                .into()
        })
    }

    /// Move an order one step along the flow
    pub async fn advance<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        order_id: &str,
    ) -> ScreenResult<OrderStatus> {
        let from = self.current_status(order_id)?;
        let next = from.next().ok_or_else(|| {
            AppError::new(ErrorCode::InvalidStatusTransition).with_detail("from", from.as_str())
        })?;
        self.change_status(ctx, order_id, from, next).await
    }

    /// Cancel an order that has not been confirmed yet
    pub async fn cancel<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        order_id: &str,
    ) -> ScreenResult<OrderStatus> {
        let from = self.current_status(order_id)?;
        self.change_status(ctx, order_id, from, OrderStatus::Cancelled).await
    }

    async fn change_status<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        order_id: &str,
        from: OrderStatus,
        to: OrderStatus,
    ) -> ScreenResult<OrderStatus> {
        let to = self.transitions.transition(from, to)?;
        if let Err(e) = ctx.api().update_order_status(order_id, to).await {
            return Err(ctx.action_failure(e, "Failed to update order status").await);
        }
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = Some(to.into());
        }
        tracing::info!(order_id, from = from.as_str(), to = to.as_str(), "order status updated");
        Ok(to)
    }
}
