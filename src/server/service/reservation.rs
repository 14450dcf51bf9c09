use sea_orm::DatabaseConnection;

use crate::{
    model::reservation::ReservationStatus,
    server::{
        data::reservation::ReservationRepository,
        error::AppError,
        model::{
            reservation::{CreateReservationParams, Reservation, ReservationFilter},
            Paginated,
        },
    },
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a new reservation request in `pending` status
    pub async fn create(&self, params: CreateReservationParams) -> Result<Reservation, AppError> {
        let repo = ReservationRepository::new(self.db);

        let reservation = repo.create(params).await?;

        tracing::info!(
            "New reservation {} for {} guests on {}",
            reservation.id,
            reservation.guests,
            reservation.date
        );

        Reservation::from_entity(reservation)
    }

    /// Gets one page (1-based) of reservations matching the filter, newest first
    pub async fn get_paginated(
        &self,
        filter: ReservationFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        let (reservations, total) = repo.get_paginated(filter, page, per_page).await?;

        let items: Result<Vec<_>, _> = reservations
            .into_iter()
            .map(Reservation::from_entity)
            .collect();

        Ok(Paginated {
            items: items?,
            total,
            page,
            per_page,
        })
    }

    /// Returns None if the reservation doesn't exist
    pub async fn update_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<Option<Reservation>, AppError> {
        let repo = ReservationRepository::new(self.db);

        repo.update_status(id, status)
            .await?
            .map(Reservation::from_entity)
            .transpose()
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ReservationRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
