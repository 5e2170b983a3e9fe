//! Menu endpoint group. Listing is public; mutations are admin-only.
//! Image URLs come back relative from the backend's upload folder and are
//! resolved to absolute URLs here so pages never see a bare `/uploads` path.

use serde::{Deserialize, Serialize};

use super::client::{Ack, ApiClient, Envelope};
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, Serialize)]
pub struct MenuItemUpsert<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub price: f64,
    pub category: Option<&'a str>,
    #[serde(rename = "imageUrl")]
    pub image_url: Option<&'a str>,
    pub available: bool,
}

impl ApiClient {
    fn resolve_item_image(&self, item: &mut MenuItem) {
        if let Some(url) = item.image_url.take() {
            item.image_url = Some(self.absolute_asset_url(&url));
        }
    }

    pub async fn menu(&self) -> AppResult<Envelope<Vec<MenuItem>>> {
        let mut envelope: Envelope<Vec<MenuItem>> = self.get_json("menu", None).await?;
        if let Some(items) = envelope.data.as_mut() {
            for item in items.iter_mut() {
                self.resolve_item_image(item);
            }
        }
        Ok(envelope)
    }

    pub async fn menu_item(&self, item_id: &str) -> AppResult<Envelope<MenuItem>> {
        let mut envelope: Envelope<MenuItem> = self.get_json(&format!("menu/{}", item_id), None).await?;
        if let Some(item) = envelope.data.as_mut() {
            self.resolve_item_image(item);
        }
        Ok(envelope)
    }

    pub async fn create_menu_item(&self, item: &MenuItemUpsert<'_>, token: &str) -> AppResult<Envelope<MenuItem>> {
        self.post_json("menu", item, Some(token)).await
    }

    pub async fn update_menu_item(
        &self,
        item_id: &str,
        item: &MenuItemUpsert<'_>,
        token: &str,
    ) -> AppResult<Envelope<MenuItem>> {
        self.put_json(&format!("menu/{}", item_id), item, Some(token)).await
    }

    pub async fn delete_menu_item(&self, item_id: &str, token: &str) -> AppResult<Ack> {
        self.delete_json(&format!("menu/{}", item_id), Some(token)).await
    }
}
