use shared::menu_filter;
use shared::models::User;
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::ScreenResult;
use crate::screens::load_home_user;

/// Customer dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerHome {
    pub user: User,
    /// Menus orderable today; `None` when the list could not be loaded
    pub todays_menus: Option<usize>,
}

impl CustomerHome {
    pub async fn load<H: HttpClient>(ctx: &AppContext<H>) -> ScreenResult<Self> {
        let user = load_home_user(ctx).await?;
        let todays_menus = match ctx.api().list_menus().await {
            Ok(menus) => Some(menu_filter::todays_menus_utc(&menus).len()),
            Err(e) => {
                tracing::warn!(error = %e, "menu count unavailable");
                None
            }
        };
        Ok(Self { user, todays_menus })
    }

    pub fn greeting(&self) -> String {
        let name = self.user.name.trim();
        format!("Hello {}", if name.is_empty() { "User" } else { name })
    }
}
