use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        api::{ApiResponse, MessageResponse},
        faq::{CreateFaqDto, FaqDto, UpdateFaqDto},
    },
};

pub struct FaqApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn faqs(&self) -> FaqApi<'_> {
        FaqApi { client: self }
    }
}

impl FaqApi<'_> {
    /// Lists FAQs; `include_inactive` requires an admin session.
    pub async fn get_all(&self, include_inactive: bool) -> Result<Vec<FaqDto>, ApiError> {
        let path = if include_inactive {
            "/api/faqs?all=1"
        } else {
            "/api/faqs"
        };
        let response: ApiResponse<Vec<FaqDto>> = self.client.get(path).await?;

        Ok(response.data)
    }

    pub async fn create(&self, faq: &CreateFaqDto) -> Result<FaqDto, ApiError> {
        let response: ApiResponse<FaqDto> = self.client.post("/api/faqs", faq).await?;

        Ok(response.data)
    }

    pub async fn update(&self, id: i32, update: &UpdateFaqDto) -> Result<FaqDto, ApiError> {
        let response: ApiResponse<FaqDto> =
            self.client.put(&format!("/api/faqs/{}", id), update).await?;

        Ok(response.data)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .delete::<MessageResponse>(&format!("/api/faqs/{}", id))
            .await?;

        Ok(())
    }
}
