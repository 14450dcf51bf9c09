//! Reservation data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::reservation::ReservationStatus,
    server::model::reservation::{CreateReservationParams, ReservationFilter},
};

pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a reservation in the `pending` state.
    pub async fn create(
        &self,
        params: CreateReservationParams,
    ) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            date: ActiveValue::Set(params.date),
            guests: ActiveValue::Set(params.guests),
            requirements: ActiveValue::Set(params.requirements),
            status: ActiveValue::Set(ReservationStatus::Pending.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets one page of reservations matching `filter`, newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional status and exact date filters
    /// - `page` - 1-based page number
    /// - `per_page` - Rows per page
    ///
    /// # Returns
    /// - `Ok((rows, total))` - The page and the number of rows matching the filter
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: ReservationFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::reservation::Model>, u64), DbErr> {
        let mut query = entity::prelude::Reservation::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::reservation::Column::Status.eq(status.as_str()));
        }
        if let Some(date) = filter.date {
            query = query.filter(entity::reservation::Column::Date.eq(date));
        }

        let paginator = query
            .order_by_desc(entity::reservation::Column::CreatedAt)
            .order_by_desc(entity::reservation::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let reservations = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((reservations, total))
    }

    /// Sets the status; returns None if the reservation doesn't exist
    pub async fn update_status(
        &self,
        id: i32,
        status: ReservationStatus,
    ) -> Result<Option<entity::reservation::Model>, DbErr> {
        let Some(reservation) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::reservation::ActiveModel = reservation.into();
        active_model.status = ActiveValue::Set(status.to_string());

        active_model.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
