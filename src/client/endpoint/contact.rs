use serde::Serialize;

use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        api::{ApiResponse, IdDto, MessageResponse, PaginatedResponse},
        contact::{ContactDto, ContactStatus, CreateContactDto, UpdateContactStatusDto},
    },
};

#[derive(Serialize, Clone, Debug, Default)]
pub struct ContactParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

pub struct ContactApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn contacts(&self) -> ContactApi<'_> {
        ContactApi { client: self }
    }
}

impl ContactApi<'_> {
    pub async fn create(&self, contact: &CreateContactDto) -> Result<IdDto, ApiError> {
        let response: ApiResponse<IdDto> = self.client.post("/api/contacts", contact).await?;

        Ok(response.data)
    }

    pub async fn get_all(
        &self,
        params: &ContactParams,
    ) -> Result<PaginatedResponse<ContactDto>, ApiError> {
        self.client.get_with_query("/api/contacts", params).await
    }

    pub async fn get(&self, id: i32) -> Result<ContactDto, ApiError> {
        let response: ApiResponse<ContactDto> =
            self.client.get(&format!("/api/contacts/{}", id)).await?;

        Ok(response.data)
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: ContactStatus,
    ) -> Result<ContactDto, ApiError> {
        let response: ApiResponse<ContactDto> = self
            .client
            .patch(
                &format!("/api/contacts/{}", id),
                &UpdateContactStatusDto { status },
            )
            .await?;

        Ok(response.data)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .delete::<MessageResponse>(&format!("/api/contacts/{}", id))
            .await?;

        Ok(())
    }
}
