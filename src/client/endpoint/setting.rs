use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{api::ApiResponse, setting::SettingsDto},
};

pub struct SettingApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn settings(&self) -> SettingApi<'_> {
        SettingApi { client: self }
    }
}

impl SettingApi<'_> {
    pub async fn get_all(&self) -> Result<SettingsDto, ApiError> {
        let response: ApiResponse<SettingsDto> = self.client.get("/api/settings").await?;

        Ok(response.data)
    }

    /// Upserts the given keys and returns every setting.
    pub async fn update(&self, settings: &SettingsDto) -> Result<SettingsDto, ApiError> {
        let response: ApiResponse<SettingsDto> = self.client.put("/api/settings", settings).await?;

        Ok(response.data)
    }
}
