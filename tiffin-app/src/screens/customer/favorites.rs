use shared::models::Provider;
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::ScreenResult;

#[derive(Debug, Default)]
pub struct FavoritesScreen {
    providers: Vec<Provider>,
}

impl FavoritesScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub async fn load<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<()> {
        let user = ctx.require_user().await?;
        match ctx.api().favorites(&user.id).await {
            Ok(providers) => {
                self.providers = providers;
                Ok(())
            }
            Err(e) => {
                self.providers.clear();
                Err(ctx.list_failure(e, "Failed to load favorites").await)
            }
        }
    }

    /// Remove a provider from favorites; the local list follows on success
    pub async fn remove<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        provider_id: &str,
    ) -> ScreenResult<()> {
        let user = ctx.require_user().await?;
        if let Err(e) = ctx.api().remove_favorite(&user.id, provider_id).await {
            return Err(ctx.action_failure(e, "Failed to remove favorite").await);
        }
        self.providers.retain(|p| p.id != provider_id);
        tracing::info!(provider_id, "favorite removed");
        Ok(())
    }
}
