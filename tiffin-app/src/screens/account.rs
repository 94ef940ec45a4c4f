//! Account screens shared by both roles: security, contact and profile

use shared::models::User;
use shared::validation::{self, PasswordChangeForm};
use shared::{Theme, ThemeMode};
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::{Failure, ScreenResult};

/// Signed-in user for a form submit
///
/// A missing user is told to sign in again instead of failing silently.
async fn submitting_user<H: HttpClient>(ctx: &AppContext<H>) -> ScreenResult<User> {
    ctx.require_user()
        .await
        .map_err(|_| Failure::Alert("User not found. Please login again.".into()))
}

/// Change password
pub async fn change_password<H: HttpClient>(
    ctx: &AppContext<H>,
    form: &PasswordChangeForm,
) -> ScreenResult<String> {
    validation::validate_password_change(form)?;
    let user = submitting_user(ctx).await?;
    match ctx
        .api()
        .update_password(&user.id, &form.current_password, &form.new_password)
        .await
    {
        Ok(resp) => {
            tracing::info!(user_id = %user.id, "password updated");
            Ok(resp.message)
        }
        Err(e) => Err(ctx.action_failure(e, "Failed to update password").await),
    }
}

/// Send a support message
pub async fn send_contact<H: HttpClient>(
    ctx: &AppContext<H>,
    subject: &str,
    message: &str,
) -> ScreenResult<String> {
    validation::validate_contact(subject, message)?;
    let user = submitting_user(ctx).await?;
    match ctx.api().contact(&user.id, subject, message).await {
        Ok(resp) => Ok(resp.message),
        Err(e) => Err(ctx.action_failure(e, "Failed to send message").await),
    }
}

/// Profile tab
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileScreen {
    pub user: User,
    pub theme: Theme,
}

impl ProfileScreen {
    pub async fn load<H: HttpClient>(ctx: &AppContext<H>) -> ScreenResult<Self> {
        let user = super::load_home_user(ctx).await?;
        Ok(Self {
            user,
            theme: ctx.theme().await,
        })
    }

    pub fn is_dark(&self) -> bool {
        self.theme.mode == ThemeMode::Dark
    }

    pub async fn toggle_theme<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<Theme> {
        self.theme = ctx.toggle_theme().await?;
        Ok(self.theme)
    }

    pub async fn logout<H: HttpClient>(ctx: &AppContext<H>) -> ScreenResult<super::Route> {
        ctx.session()
            .logout()
            .await
            .map_err(|e| Failure::Alert(e.user_message("Failed to logout")))?;
        Ok(super::Route::Login)
    }
}
