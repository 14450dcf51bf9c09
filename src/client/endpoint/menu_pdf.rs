use reqwest::multipart::{Form, Part};

use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        api::{ApiResponse, MessageResponse},
        menu_pdf::{MenuPdfDto, UpdateMenuPdfDto},
    },
};

pub struct MenuPdfApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn menu_pdfs(&self) -> MenuPdfApi<'_> {
        MenuPdfApi { client: self }
    }
}

impl MenuPdfApi<'_> {
    pub async fn get_all(&self) -> Result<Vec<MenuPdfDto>, ApiError> {
        let response: ApiResponse<Vec<MenuPdfDto>> = self.client.get("/api/menu").await?;

        Ok(response.data)
    }

    /// Absolute URL of the active menu file, if one is active.
    pub async fn active_pdf_url(&self) -> Result<Option<String>, ApiError> {
        let pdfs = self.get_all().await?;

        Ok(pdfs
            .into_iter()
            .find(|pdf| pdf.is_active)
            .map(|pdf| self.client.url(&pdf.file_url)))
    }

    /// Uploads a PDF; `title` defaults server-side to the file name.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        title: Option<&str>,
        set_active: bool,
    ) -> Result<MenuPdfDto, ApiError> {
        let response: ApiResponse<MenuPdfDto> = self
            .client
            .post_multipart("/api/menu", || {
                let mut form = Form::new()
                    .part("pdf", Part::bytes(bytes.clone()).file_name(file_name.to_string()))
                    .text("set_active", if set_active { "1" } else { "0" });
                if let Some(title) = title {
                    form = form.text("title", title.to_string());
                }
                form
            })
            .await?;

        Ok(response.data)
    }

    pub async fn update(&self, id: i32, update: &UpdateMenuPdfDto) -> Result<MenuPdfDto, ApiError> {
        let response: ApiResponse<MenuPdfDto> =
            self.client.put(&format!("/api/menu/{}", id), update).await?;

        Ok(response.data)
    }

    pub async fn set_active(&self, id: i32) -> Result<MenuPdfDto, ApiError> {
        self.update(
            id,
            &UpdateMenuPdfDto {
                is_active: Some(true),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn update_title(&self, id: i32, title: &str) -> Result<MenuPdfDto, ApiError> {
        self.update(
            id,
            &UpdateMenuPdfDto {
                title: Some(title.to_string()),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .delete::<MessageResponse>(&format!("/api/menu/{}", id))
            .await?;

        Ok(())
    }

    pub fn download_url(&self) -> String {
        self.client.url("/api/menu/download")
    }
}
