use serde::Serialize;

use crate::{
    client::{api::ApiClient, error::ApiError},
    model::{
        api::{ApiResponse, IdDto, MessageResponse, PaginatedResponse},
        reservation::{
            CreateReservationDto, ReservationDto, ReservationStatus, UpdateReservationStatusDto,
        },
    },
};

/// Filters for the admin reservation listing; unset fields are omitted.
#[derive(Serialize, Clone, Debug, Default)]
pub struct ReservationParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ReservationStatus>,
    /// `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

pub struct ReservationApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn reservations(&self) -> ReservationApi<'_> {
        ReservationApi { client: self }
    }
}

impl ReservationApi<'_> {
    pub async fn get_all(
        &self,
        params: &ReservationParams,
    ) -> Result<PaginatedResponse<ReservationDto>, ApiError> {
        self.client
            .get_with_query("/api/reservations", params)
            .await
    }

    pub async fn create(&self, reservation: &CreateReservationDto) -> Result<IdDto, ApiError> {
        let response: ApiResponse<IdDto> =
            self.client.post("/api/reservations", reservation).await?;

        Ok(response.data)
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<ReservationDto, ApiError> {
        let response: ApiResponse<ReservationDto> = self
            .client
            .patch(
                &format!("/api/reservations/{}", id),
                &UpdateReservationStatusDto { status },
            )
            .await?;

        Ok(response.data)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.client
            .delete::<MessageResponse>(&format!("/api/reservations/{}", id))
            .await?;

        Ok(())
    }
}
