use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        api::{ApiResponse, IdDto, MessageResponse},
        menu_item::{MenuItemDto, SaveMenuItemDto},
    },
};

pub struct MenuItemApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn menu_items(&self) -> MenuItemApi<'_> {
        MenuItemApi { client: self }
    }
}

impl MenuItemApi<'_> {
    pub async fn get_all(&self) -> Result<Vec<MenuItemDto>, ApiError> {
        let response: ApiResponse<Vec<MenuItemDto>> = self.client.get("/api/menu/items").await?;

        Ok(response.data)
    }

    pub async fn create(&self, item: &SaveMenuItemDto) -> Result<IdDto, ApiError> {
        let response: ApiResponse<IdDto> = self.client.post("/api/menu/items", item).await?;

        Ok(response.data)
    }

    pub async fn update(&self, id: i32, item: &SaveMenuItemDto) -> Result<MenuItemDto, ApiError> {
        let response: ApiResponse<MenuItemDto> = self
            .client
            .put(&format!("/api/menu/items/{}", id), item)
            .await?;

        Ok(response.data)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .delete::<MessageResponse>(&format!("/api/menu/items/{}", id))
            .await?;

        Ok(())
    }
}
