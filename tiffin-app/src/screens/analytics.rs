//! Provider analytics dashboard
//!
//! Six independent requests run concurrently. Each panel keeps its own
//! result, so one failing endpoint leaves the others on screen.

use shared::analytics::{self, current_period};
use shared::chart::{self, Bar, ChartFrame, HIT_RADIUS, Point};
use shared::models::{
    AnalyticsSummary, AverageOrderValue, BestSeller, DailyRevenue, GrowthRate, MonthlyRevenue,
};
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::{Loadable, ScreenResult};

/// Number of best sellers shown
pub const BEST_SELLER_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsScreen {
    pub year: i32,
    pub month: u32,
    pub frame: ChartFrame,
    pub summary: Loadable<AnalyticsSummary>,
    pub growth: Loadable<GrowthRate>,
    pub average_order_value: Loadable<AverageOrderValue>,
    pub monthly: Loadable<MonthlyRevenue>,
    pub daily: Loadable<DailyRevenue>,
    pub best_sellers: Loadable<Vec<BestSeller>>,
}

impl AnalyticsScreen {
    /// Load the dashboard for the current UTC month
    pub async fn load<H: HttpClient>(ctx: &AppContext<H>) -> ScreenResult<Self> {
        let (year, month) = current_period();
        Self::load_period(ctx, year, month).await
    }

    pub async fn load_period<H: HttpClient>(
        ctx: &AppContext<H>,
        year: i32,
        month: u32,
    ) -> ScreenResult<Self> {
        let user = ctx.require_user().await?;
        let api = ctx.api();
        let provider_id = user.id.as_str();

        let (summary, growth, aov, monthly, daily, best) = tokio::join!(
            api.analytics_summary(provider_id),
            api.growth_rate(provider_id),
            api.average_order_value(provider_id),
            api.monthly_revenue(provider_id, year),
            api.daily_revenue(provider_id, year, month),
            api.best_sellers(provider_id, BEST_SELLER_LIMIT),
        );

        let screen = Self {
            year,
            month,
            frame: ChartFrame::default(),
            summary: Loadable::from_result(summary, "Failed to load summary"),
            growth: Loadable::from_result(growth, "Failed to load growth rate"),
            average_order_value: Loadable::from_result(aov, "Failed to load average order value"),
            monthly: Loadable::from_result(monthly, "Failed to load monthly revenue"),
            daily: Loadable::from_result(daily, "Failed to load daily revenue"),
            best_sellers: Loadable::from_result(best, "Failed to load best sellers"),
        };
        tracing::debug!(
            provider_id,
            year,
            month,
            summary = screen.summary.is_loaded(),
            monthly = screen.monthly.is_loaded(),
            daily = screen.daily.is_loaded(),
            "analytics loaded"
        );
        Ok(screen)
    }

    /// Revenue per month, January first
    pub fn monthly_values(&self) -> Vec<f64> {
        self.monthly.value().map(analytics::monthly_series).unwrap_or_default()
    }

    /// Revenue per day of the selected month
    pub fn daily_values(&self) -> Vec<f64> {
        self.daily.value().map(analytics::daily_series).unwrap_or_default()
    }

    pub fn monthly_points(&self) -> Vec<Point> {
        self.frame.line_points(&self.monthly_values())
    }

    pub fn daily_bars(&self) -> Vec<Bar> {
        self.frame.bar_rects(&self.daily_values())
    }

    /// Month under a touch on the monthly chart, as `(label, revenue)`
    pub fn month_at(&self, touch: Point) -> Option<(&'static str, f64)> {
        let points = self.monthly_points();
        let index = chart::nearest_point(&points, touch, HIT_RADIUS)?;
        let revenue = *self.monthly_values().get(index)?;
        Some((chart::month_label(index as u32 + 1), revenue))
    }

    /// Day under a touch on the daily chart, as `(day, revenue)`
    pub fn day_at(&self, touch: Point) -> Option<(u32, f64)> {
        let centers: Vec<Point> = self.daily_bars().iter().map(Bar::center).collect();
        let index = chart::nearest_point(&centers, touch, HIT_RADIUS)?;
        let revenue = *self.daily_values().get(index)?;
        Some((index as u32 + 1, revenue))
    }
}
