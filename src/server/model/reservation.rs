//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::reservation::{CreateReservationDto, ReservationDto, ReservationStatus},
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Requested date exactly as the guest entered it.
    pub date: String,
    pub guests: String,
    pub requirements: String,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    /// Converts an entity model, failing on a status outside the enumeration.
    pub fn from_entity(entity: entity::reservation::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<ReservationStatus>()
            .map_err(|_| InternalError::UnknownStatus {
                column: "reservations.status",
                id: entity.id,
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            date: entity.date,
            guests: entity.guests,
            requirements: entity.requirements,
            status,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            name: self.name,
            email: self.email,
            date: self.date,
            guests: self.guests,
            requirements: self.requirements,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateReservationParams {
    pub name: String,
    pub email: String,
    pub date: String,
    pub guests: String,
    pub requirements: String,
}

impl From<CreateReservationDto> for CreateReservationParams {
    fn from(dto: CreateReservationDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            date: dto.date.trim().to_string(),
            guests: dto.guests.trim().to_string(),
            requirements: dto.requirements.unwrap_or_default().trim().to_string(),
        }
    }
}

/// Admin list filters; `None` matches every row.
#[derive(Debug, Clone, Default)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub date: Option<String>,
}
