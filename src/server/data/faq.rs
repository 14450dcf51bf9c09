//! FAQ data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::faq::{CreateFaqParams, UpdateFaqParams};

pub struct FaqRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets FAQs in display order, optionally including hidden ones
    pub async fn get_all(&self, include_inactive: bool) -> Result<Vec<entity::faq::Model>, DbErr> {
        let mut query = entity::prelude::Faq::find();

        if !include_inactive {
            query = query.filter(entity::faq::Column::IsActive.eq(true));
        }

        query
            .order_by_asc(entity::faq::Column::SortOrder)
            .order_by_asc(entity::faq::Column::Id)
            .all(self.db)
            .await
    }

    /// Appends a FAQ after the current last one (`sort_order = max + 1`)
    pub async fn create(&self, params: CreateFaqParams) -> Result<entity::faq::Model, DbErr> {
        let txn = self.db.begin().await?;

        let sort_order = next_sort_order(&txn).await?;
        let now = Utc::now();

        let faq = entity::faq::ActiveModel {
            question: ActiveValue::Set(params.question),
            answer: ActiveValue::Set(params.answer),
            sort_order: ActiveValue::Set(sort_order),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(faq)
    }

    /// Applies a partial update and bumps `updated_at`; returns None if the FAQ doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateFaqParams,
    ) -> Result<Option<entity::faq::Model>, DbErr> {
        let Some(faq) = entity::prelude::Faq::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::faq::ActiveModel = faq.into();
        if let Some(question) = params.question {
            active_model.question = ActiveValue::Set(question);
        }
        if let Some(answer) = params.answer {
            active_model.answer = ActiveValue::Set(answer);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }
        if let Some(sort_order) = params.sort_order {
            active_model.sort_order = ActiveValue::Set(sort_order);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await.map(Some)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Faq::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

async fn next_sort_order<C: ConnectionTrait>(conn: &C) -> Result<i32, DbErr> {
    let last = entity::prelude::Faq::find()
        .order_by_desc(entity::faq::Column::SortOrder)
        .one(conn)
        .await?;

    Ok(last.map(|faq| faq.sort_order.saturating_add(1)).unwrap_or(1))
}
