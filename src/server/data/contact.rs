//! Contact message data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::contact::ContactStatus, server::model::contact::CreateContactParams};

pub struct ContactRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a message in the `new` state.
    pub async fn create(&self, params: CreateContactParams) -> Result<entity::contact::Model, DbErr> {
        entity::contact::ActiveModel {
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            subject: ActiveValue::Set(params.subject),
            message: ActiveValue::Set(params.message),
            status: ActiveValue::Set(ContactStatus::New.to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::contact::Model>, DbErr> {
        entity::prelude::Contact::find_by_id(id).one(self.db).await
    }

    /// Gets one page (1-based) of messages, newest first, optionally filtered by status
    pub async fn get_paginated(
        &self,
        status: Option<ContactStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::contact::Model>, u64), DbErr> {
        let mut query = entity::prelude::Contact::find();

        if let Some(status) = status {
            query = query.filter(entity::contact::Column::Status.eq(status.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::contact::Column::CreatedAt)
            .order_by_desc(entity::contact::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let contacts = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok((contacts, total))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: ContactStatus,
    ) -> Result<Option<entity::contact::Model>, DbErr> {
        let Some(contact) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::contact::ActiveModel = contact.into();
        active_model.status = ActiveValue::Set(status.to_string());

        active_model.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Contact::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
