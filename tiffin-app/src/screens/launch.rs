use tiffin_client::HttpClient;

use super::Route;
use crate::context::AppContext;

/// Pick the first screen: restore the saved session and route by role
///
/// A session the backend no longer accepts goes to login. When the backend
/// cannot be reached the saved user is trusted.
pub async fn launch<H: HttpClient>(ctx: &AppContext<H>) -> Route {
    if ctx.session().restore().await.is_none() {
        return Route::Login;
    }
    match ctx.session().refresh_user().await {
        Ok(Some(user)) => Route::home_for(&user),
        Ok(None) => Route::Login,
        Err(e) => {
            tracing::warn!(error = %e, "session check failed");
            match ctx.session().current_user().await {
                Some(user) => Route::home_for(&user),
                None => Route::Login,
            }
        }
    }
}
