//! Provider analytics endpoints

use shared::analytics::sort_best_sellers;
use shared::models::{
    AnalyticsSummary, AverageOrderValue, BestSeller, BestSellers, DailyRevenue, GrowthRate,
    MonthlyRevenue,
};

use super::{TiffinClient, with_query};
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> TiffinClient<H> {
    pub async fn analytics_summary(&self, provider_id: &str) -> ClientResult<AnalyticsSummary> {
        self.http
            .get(&format!("/analytics/{}/summary", provider_id))
            .await
    }

    pub async fn growth_rate(&self, provider_id: &str) -> ClientResult<GrowthRate> {
        self.http
            .get(&format!("/analytics/{}/growth-rate", provider_id))
            .await
    }

    pub async fn average_order_value(&self, provider_id: &str) -> ClientResult<AverageOrderValue> {
        self.http
            .get(&format!("/analytics/{}/average-order-value", provider_id))
            .await
    }

    pub async fn monthly_revenue(&self, provider_id: &str, year: i32) -> ClientResult<MonthlyRevenue> {
        let year = year.to_string();
        let path = with_query(
            &format!("/analytics/{}/monthly-revenue", provider_id),
            &[("year", year.as_str())],
        )?;
        self.http.get(&path).await
    }

    pub async fn daily_revenue(
        &self,
        provider_id: &str,
        year: i32,
        month: u32,
    ) -> ClientResult<DailyRevenue> {
        let (year, month) = (year.to_string(), month.to_string());
        let path = with_query(
            &format!("/analytics/{}/daily-revenue", provider_id),
            &[("year", year.as_str()), ("month", month.as_str())],
        )?;
        self.http.get(&path).await
    }

    /// Top sellers, ranked locally by units then revenue
    pub async fn best_sellers(&self, provider_id: &str, limit: usize) -> ClientResult<Vec<BestSeller>> {
        let limit_param = limit.to_string();
        let path = with_query(
            &format!("/analytics/{}/best-sellers", provider_id),
            &[("limit", limit_param.as_str())],
        )?;
        let resp: BestSellers = self.http.get(&path).await?;
        let mut items = resp.items;
        sort_best_sellers(&mut items);
        items.truncate(limit);
        Ok(items)
    }
}
