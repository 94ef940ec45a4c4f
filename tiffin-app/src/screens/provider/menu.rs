use shared::menu_filter;
use shared::models::{Menu, MenuCreate, MenuUpdate};
use shared::validation::{self, MenuForm};
use shared::{AppError, ErrorCode};
use tiffin_client::HttpClient;

use crate::context::AppContext;
use crate::failure::{Failure, ScreenResult};

/// Create/edit sheet for one menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEditor {
    /// `None` while creating
    pub menu_id: Option<String>,
    pub form: MenuForm,
}

impl MenuEditor {
    pub fn is_editing(&self) -> bool {
        self.menu_id.is_some()
    }
}

/// The provider's own menus
#[derive(Debug, Default)]
pub struct ProviderMenuScreen {
    menus: Vec<Menu>,
    editor: Option<MenuEditor>,
}

impl ProviderMenuScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menus(&self) -> &[Menu] {
        &self.menus
    }

    pub fn editor(&self) -> Option<&MenuEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut MenuEditor> {
        self.editor.as_mut()
    }

    /// Load all menus and keep this provider's
    pub async fn load<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<()> {
        let user = ctx
            .require_user()
            .await
            .map_err(|_| Failure::Alert("Provider ID not found. Please login again.".into()))?;
        match ctx.api().list_menus().await {
            Ok(menus) => {
                self.menus = menu_filter::menus_for_provider(&menus, &user.id);
                tracing::debug!(count = self.menus.len(), "provider menus loaded");
                Ok(())
            }
            Err(e) => {
                self.menus.clear();
                Err(ctx.list_failure(e, "Failed to load menus").await)
            }
        }
    }

    /// Open an empty form dated today (UTC)
    pub fn start_create(&mut self) -> &mut MenuEditor {
        self.editor.insert(MenuEditor {
            menu_id: None,
            form: MenuForm {
                date: menu_filter::today_utc().format("%Y-%m-%d").to_string(),
                sabjis: vec![String::new()],
                ..MenuForm::default()
            },
        })
    }

    /// Open the form filled from an existing menu
    pub fn start_edit(&mut self, menu_id: &str) -> ScreenResult<&mut MenuEditor> {
        let menu = self
            .menus
            .iter()
            .find(|m| m.id == menu_id)
            .ok_or_else(|| AppError::new(ErrorCode::MenuNotFound).with_detail("menu", menu_id))?;
        let date = menu
            .date
            .as_deref()
            .and_then(menu_filter::menu_day)
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let sabjis = if menu.sabjis.is_empty() {
            vec![String::new()]
        } else {
            menu.sabjis.clone()
        };
        let editor = MenuEditor {
            menu_id: Some(menu.id.clone()),
            form: MenuForm {
                date,
                sabjis,
                full_price: menu.prices.full.to_string(),
                half_price: menu.prices.half.to_string(),
                rice_only_price: menu.prices.rice_only.to_string(),
            },
        };
        Ok(self.editor.insert(editor))
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Validate and submit the open form, then reload the list
    pub async fn save<H: HttpClient>(&mut self, ctx: &AppContext<H>) -> ScreenResult<String> {
        let editor = self
            .editor
            .as_ref()
            .ok_or_else(|| Failure::Alert("No menu is being edited".into()))?;
        let valid = validation::validate_menu_form(&editor.form)?;
        let user = ctx
            .require_user()
            .await
            .map_err(|_| Failure::Alert("Provider ID not found".into()))?;

        let message = match &editor.menu_id {
            Some(menu_id) => {
                let update = MenuUpdate {
                    date: Some(valid.date),
                    sabjis: Some(valid.sabjis),
                    prices: Some(valid.prices),
                    is_active: None,
                };
                if let Err(e) = ctx.api().update_menu(menu_id, &update).await {
                    return Err(ctx.action_failure(e, "Failed to update menu").await);
                }
                tracing::info!(menu_id = %menu_id, "menu updated");
                "Menu updated successfully"
            }
            None => {
                let create = MenuCreate {
                    provider_id: user.id.clone(),
                    date: valid.date,
                    sabjis: valid.sabjis,
                    prices: valid.prices,
                };
                match ctx.api().create_menu(&create).await {
                    Ok(menu) => tracing::info!(menu_id = %menu.id, "menu created"),
                    Err(e) => return Err(ctx.action_failure(e, "Failed to create menu").await),
                }
                "Menu created successfully"
            }
        };

        self.editor = None;
        if let Err(failure) = self.load(ctx).await {
            tracing::warn!(error = %failure, "menu list refresh failed after save");
        }
        Ok(message.to_string())
    }

    pub async fn delete<H: HttpClient>(
        &mut self,
        ctx: &AppContext<H>,
        menu_id: &str,
    ) -> ScreenResult<String> {
        let user = ctx
            .require_user()
            .await
            .map_err(|_| Failure::Alert("Provider ID not found".into()))?;
        if let Err(e) = ctx.api().delete_menu(menu_id, &user.id).await {
            return Err(ctx.action_failure(e, "Failed to delete menu").await);
        }
        self.menus.retain(|m| m.id != menu_id);
        tracing::info!(menu_id, "menu deleted");
        Ok("Menu deleted successfully".to_string())
    }
}
