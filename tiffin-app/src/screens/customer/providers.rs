use std::collections::HashSet;

use shared::menu_filter;
use shared::models::Provider;
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::{Failure, ScreenResult};

/// A provider with its favorite flag
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRow<'a> {
    pub provider: &'a Provider,
    pub is_favorite: bool,
}

/// Browse providers and mark favorites
#[derive(Debug, Default)]
pub struct ProvidersScreen {
    providers: Vec<Provider>,
    favorites: HashSet<String>,
    pub query: String,
}

impl ProvidersScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch providers and favorites together
    pub async fn load<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<()> {
        let user = ctx.require_user().await?;
        let (providers, favorites) =
            tokio::join!(ctx.api().list_providers(), ctx.api().favorites(&user.id));

        let providers = match providers {
            Ok(providers) => providers,
            Err(e) => {
                let failure = ctx.action_failure(e, "Failed to load providers").await;
                return Err(match failure {
                    Failure::Silent => Failure::Silent,
                    Failure::Alert(_) => Failure::Alert("Failed to load providers".into()),
                });
            }
        };
        self.providers = providers;

        match favorites {
            Ok(favorites) => {
                self.favorites = favorites.into_iter().map(|p| p.id).collect();
                Ok(())
            }
            Err(e) => {
                self.favorites.clear();
                Err(ctx.list_failure(e, "Failed to load favorites").await)
            }
        }
    }

    /// Providers matching the current search, with favorite flags
    pub fn rows(&self) -> Vec<ProviderRow<'_>> {
        menu_filter::search_providers(&self.providers, &self.query)
            .into_iter()
            .map(|provider| ProviderRow {
                is_favorite: self.favorites.contains(&provider.id),
                provider,
            })
            .collect()
    }

    pub fn is_favorite(&self, provider_id: &str) -> bool {
        self.favorites.contains(provider_id)
    }

    /// Add or remove a favorite; returns the new flag
    pub async fn toggle_favorite<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        provider_id: &str,
    ) -> ScreenResult<bool> {
        let user = ctx.require_user().await?;
        let api = ctx.api();
        let was_favorite = self.is_favorite(provider_id);
        let result = if was_favorite {
            api.remove_favorite(&user.id, provider_id).await
        } else {
            api.add_favorite(&user.id, provider_id).await
        };
        if let Err(e) = result {
            return Err(ctx.action_failure(e, "Failed to update favorite").await);
        }

        if was_favorite {
            self.favorites.remove(provider_id);
        } else {
            self.favorites.insert(provider_id.to_string());
        }
        tracing::info!(provider_id, favorite = !was_favorite, "favorite toggled");
        Ok(!was_favorite)
    }
}
