use shared::models::User;
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::ScreenResult;
use crate::screens::{Landing, Route, load_home_user};

/// Provider dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderHome {
    pub user: User,
}

impl ProviderHome {
    /// Customers are sent to their own home
    pub async fn load<H: HttpClient>(ctx: &AppContext<H>) -> ScreenResult<Landing<Self>> {
        let user = load_home_user(ctx).await?;
        if !user.is_provider() {
            tracing::debug!(user_id = %user.id, "not a provider, redirecting");
            return Ok(Landing::Redirect(Route::CustomerHome));
        }
        Ok(Landing::Show(Self { user }))
    }

    pub fn greeting(&self) -> String {
        let name = self.user.name.trim();
        format!("Hello {}", if name.is_empty() { "Provider" } else { name })
    }
}
