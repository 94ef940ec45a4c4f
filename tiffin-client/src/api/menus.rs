//! Provider menu endpoints

use shared::client::{DeleteMenuRequest, MenuListResponse, MenuResponse, MessageResponse};
use shared::models::{Menu, MenuCreate, MenuUpdate};

use super::TiffinClient;
use crate::ClientResult;
use crate::http::HttpClient;

impl<H: HttpClient> TiffinClient<H> {
    pub async fn create_menu(&self, menu: &MenuCreate) -> ClientResult<Menu> {
        let resp: MenuResponse = self.http.post("/provider/create-menu", menu).await?;
        Ok(resp.menu)
    }

    /// Every menu the backend knows about, unfiltered
    pub async fn list_menus(&self) -> ClientResult<Vec<Menu>> {
        let resp: MenuListResponse = self.http.get("/provider").await?;
        Ok(resp.menus)
    }

    pub async fn update_menu(&self, menu_id: &str, update: &MenuUpdate) -> ClientResult<Menu> {
        let resp: MenuResponse = self
            .http
            .put(&format!("/provider/{}", menu_id), update)
            .await?;
        Ok(resp.menu)
    }

    pub async fn delete_menu(&self, menu_id: &str, provider_id: &str) -> ClientResult<MessageResponse> {
        let req = DeleteMenuRequest {
            provider_id: provider_id.to_string(),
        };
        self.http
            .delete_with_body(&format!("/provider/{}", menu_id), &req)
            .await
    }
}
