//! Screen controllers
//!
//! Each controller owns the state of one screen and talks to the backend
//! through the [`AppContext`](crate::context::AppContext) it is handed. The
//! rendering layer reads the public state and calls the async actions.

pub mod account;
pub mod analytics;
pub mod auth;
pub mod customer;
pub mod launch;
pub mod provider;

use shared::models::User;

/// Where the app navigates next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    CustomerHome,
    ProviderHome,
}

impl Route {
    /// Home screen for a signed-in user
    pub fn home_for(user: &User) -> Self {
        if user.is_provider() {
            Route::ProviderHome
        } else {
            Route::CustomerHome
        }
    }
}

/// Authoritative user for a home screen; no user means back to login
pub(crate) async fn load_home_user<H: tiffin_client::HttpClient>(
    ctx: &crate::context::AppContext<H>,
) -> crate::failure::ScreenResult<User> {
    match ctx.session().refresh_user().await {
        Ok(Some(user)) => Ok(user),
        Ok(None) => Err(crate::failure::Failure::Silent),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load user");
            Err(crate::failure::Failure::Silent)
        }
    }
}

/// A screen that either shows its content or sends the user elsewhere
#[derive(Debug, Clone, PartialEq)]
pub enum Landing<T> {
    Show(T),
    Redirect(Route),
}
