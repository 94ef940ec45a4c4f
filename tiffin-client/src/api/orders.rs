//! Order endpoints

use chrono::NaiveDate;
use shared::client::{OrderListResponse, OrderResponse};
use shared::models::{Order, OrderCreate, OrderStatusUpdate};
use shared::order::OrderStatus;

use super::{TiffinClient, with_query};
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> TiffinClient<H> {
    pub async fn place_order(&self, order: &OrderCreate) -> ClientResult<Order> {
        let resp: OrderResponse = self.http.post("/order", order).await?;
        Ok(resp.order)
    }

    /// A customer's orders, optionally restricted to one day
    pub async fn list_orders(&self, user_id: &str, date: Option<NaiveDate>) -> ClientResult<Vec<Order>> {
        let day = date.map(|d| d.format("%Y-%m-%d").to_string());
        let mut params = vec![("userId", user_id)];
        if let Some(day) = day.as_deref() {
            params.push(("date", day));
        }
        let resp: OrderListResponse = self.http.get(&with_query("/order", &params)?).await?;
        Ok(resp.orders)
    }

    /// Orders placed with a provider
    pub async fn provider_orders(&self, provider_id: &str) -> ClientResult<Vec<Order>> {
        let path = with_query("/provider/provider", &[("providerId", provider_id)])?;
        let resp: OrderListResponse = self.http.get(&path).await?;
        Ok(resp.orders)
    }

    pub async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> ClientResult<Order> {
        let req = OrderStatusUpdate { status };
        let resp: OrderResponse = self
            .http
            .patch(&format!("/order/{}/status", order_id), &req)
            .await?;
        Ok(resp.order)
    }
}
