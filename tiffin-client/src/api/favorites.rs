//! Provider directory and favorites endpoints

use shared::client::{FavoriteRequest, FavoritesResponse, MessageResponse, ProviderListResponse};
use shared::models::Provider;

use super::TiffinClient;
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> TiffinClient<H> {
    pub async fn list_providers(&self) -> ClientResult<Vec<Provider>> {
        let resp: ProviderListResponse = self.http.get("/user/providers").await?;
        Ok(resp.providers)
    }

    pub async fn favorites(&self, user_id: &str) -> ClientResult<Vec<Provider>> {
        let resp: FavoritesResponse = self
            .http
            .get(&format!("/user/{}/favorites", user_id))
            .await?;
        Ok(resp.favorite_providers)
    }

    pub async fn add_favorite(&self, user_id: &str, provider_id: &str) -> ClientResult<MessageResponse> {
        let req = FavoriteRequest {
            provider_id: provider_id.to_string(),
        };
        self.http
            .post(&format!("/user/{}/favorites", user_id), &req)
            .await
    }

    pub async fn remove_favorite(
        &self,
        user_id: &str,
        provider_id: &str,
    ) -> ClientResult<MessageResponse> {
        self.http
            .delete(&format!("/user/{}/favorites/{}", user_id, provider_id))
            .await
    }
}
