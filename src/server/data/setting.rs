//! Site settings data repository.
//!
//! Settings are a flat key-value table; writes are upserts keyed on `key`.

use migration::OnConflict;
use sea_orm::{
    ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
    TransactionTrait,
};

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::setting::Model>, DbErr> {
        entity::prelude::Setting::find()
            .order_by_asc(entity::setting::Column::Key)
            .all(self.db)
            .await
    }

    /// Inserts or overwrites every given key in one transaction.
    ///
    /// # Arguments
    /// - `values` - `(key, value)` pairs to store
    ///
    /// # Returns
    /// - `Ok(())` - All pairs stored
    /// - `Err(DbErr)` - Database error; no pair is stored
    pub async fn upsert_many<I>(&self, values: I) -> Result<(), DbErr>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let txn = self.db.begin().await?;

        for (key, value) in values {
            entity::prelude::Setting::insert(entity::setting::ActiveModel {
                key: ActiveValue::Set(key),
                value: ActiveValue::Set(value),
            })
            .on_conflict(
                OnConflict::column(entity::setting::Column::Key)
                    .update_column(entity::setting::Column::Value)
                    .to_owned(),
            )
            .exec_with_returning(&txn)
            .await?;
        }

        txn.commit().await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Setting::find().count(self.db).await
    }
}
