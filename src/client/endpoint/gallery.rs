use reqwest::multipart::{Form, Part};

use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        api::{ApiResponse, MessageResponse},
        gallery::{
            CreateGalleryImageDto, CreatedGalleryImageDto, GalleryImageDto, UpdateGalleryImageDto,
        },
    },
};

pub struct GalleryApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn gallery(&self) -> GalleryApi<'_> {
        GalleryApi { client: self }
    }
}

impl GalleryApi<'_> {
    pub async fn get_all(&self) -> Result<Vec<GalleryImageDto>, ApiError> {
        let response: ApiResponse<Vec<GalleryImageDto>> = self.client.get("/api/gallery").await?;

        Ok(response.data)
    }

    /// Adds an image hosted elsewhere.
    pub async fn create(
        &self,
        image: &CreateGalleryImageDto,
    ) -> Result<CreatedGalleryImageDto, ApiError> {
        let response: ApiResponse<CreatedGalleryImageDto> =
            self.client.post("/api/gallery", image).await?;

        Ok(response.data)
    }

    /// Uploads an image file; the server keeps it under `/uploads/gallery`.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        alt: Option<&str>,
        title: Option<&str>,
    ) -> Result<CreatedGalleryImageDto, ApiError> {
        let response: ApiResponse<CreatedGalleryImageDto> = self
            .client
            .post_multipart("/api/gallery", || {
                let mut form = Form::new().part(
                    "image",
                    Part::bytes(bytes.clone()).file_name(file_name.to_string()),
                );
                if let Some(alt) = alt {
                    form = form.text("alt", alt.to_string());
                }
                if let Some(title) = title {
                    form = form.text("title", title.to_string());
                }
                form
            })
            .await?;

        Ok(response.data)
    }

    pub async fn update(
        &self,
        id: i32,
        update: &UpdateGalleryImageDto,
    ) -> Result<GalleryImageDto, ApiError> {
        let response: ApiResponse<GalleryImageDto> = self
            .client
            .put(&format!("/api/gallery/{}", id), update)
            .await?;

        Ok(response.data)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .delete::<MessageResponse>(&format!("/api/gallery/{}", id))
            .await?;

        Ok(())
    }
}
