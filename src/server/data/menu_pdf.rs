//! Menu PDF data repository.
//!
//! Activation always runs in a transaction that first clears the flag on every other
//! row, so at most one menu PDF is active once a write commits.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::menu_pdf::{CreateMenuPdfParams, UpdateMenuPdfParams};

pub struct MenuPdfRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuPdfRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all menu PDFs, newest upload first
    pub async fn get_all(&self) -> Result<Vec<entity::menu_pdf::Model>, DbErr> {
        entity::prelude::MenuPdf::find()
            .order_by_desc(entity::menu_pdf::Column::UploadedAt)
            .order_by_desc(entity::menu_pdf::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::menu_pdf::Model>, DbErr> {
        entity::prelude::MenuPdf::find_by_id(id).one(self.db).await
    }

    /// Gets the PDF currently offered for download, if any
    pub async fn get_active(&self) -> Result<Option<entity::menu_pdf::Model>, DbErr> {
        entity::prelude::MenuPdf::find()
            .filter(entity::menu_pdf::Column::IsActive.eq(true))
            .order_by_desc(entity::menu_pdf::Column::UploadedAt)
            .one(self.db)
            .await
    }

    /// Inserts a menu PDF row, deactivating all others first when it is active.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created row
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn create(
        &self,
        params: CreateMenuPdfParams,
    ) -> Result<entity::menu_pdf::Model, DbErr> {
        let txn = self.db.begin().await?;

        if params.is_active {
            deactivate_all(&txn).await?;
        }

        let pdf = entity::menu_pdf::ActiveModel {
            title: ActiveValue::Set(params.title),
            filename: ActiveValue::Set(params.filename),
            original_name: ActiveValue::Set(params.original_name),
            file_url: ActiveValue::Set(params.file_url),
            file_size: ActiveValue::Set(params.file_size),
            is_active: ActiveValue::Set(params.is_active),
            uploaded_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(pdf)
    }

    /// Renames and/or (de)activates a menu PDF.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The updated row
    /// - `Ok(None)` - No menu PDF with that id
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMenuPdfParams,
    ) -> Result<Option<entity::menu_pdf::Model>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(pdf) = entity::prelude::MenuPdf::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        if params.is_active == Some(true) {
            deactivate_all(&txn).await?;
        }

        let mut active_model: entity::menu_pdf::ActiveModel = pdf.into();
        if let Some(title) = params.title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(is_active) = params.is_active {
            active_model.is_active = ActiveValue::Set(is_active);
        }

        let pdf = active_model.update(&txn).await?;

        txn.commit().await?;

        Ok(Some(pdf))
    }

    /// Deletes a menu PDF row, returning it so the caller can remove the file
    pub async fn delete(&self, id: i32) -> Result<Option<entity::menu_pdf::Model>, DbErr> {
        let Some(pdf) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        entity::prelude::MenuPdf::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(Some(pdf))
    }
}

async fn deactivate_all<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    entity::prelude::MenuPdf::update_many()
        .col_expr(entity::menu_pdf::Column::IsActive, Expr::value(false))
        .filter(entity::menu_pdf::Column::IsActive.eq(true))
        .exec(conn)
        .await?;

    Ok(())
}
