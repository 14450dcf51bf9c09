use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{api::ApiResponse, health::HealthDto},
};

pub struct HealthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn health(&self) -> HealthApi<'_> {
        HealthApi { client: self }
    }
}

impl HealthApi<'_> {
    pub async fn check(&self) -> Result<HealthDto, ApiError> {
        let response: ApiResponse<HealthDto> = self.client.get("/api/health").await?;

        Ok(response.data)
    }
}
