use sea_orm::DatabaseConnection;

use crate::{
    model::setting::SettingsDto,
    server::{data::setting::SettingRepository, error::AppError},
};

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every setting as a key → value map
    pub async fn get_all(&self) -> Result<SettingsDto, AppError> {
        let repo = SettingRepository::new(self.db);

        let settings = repo.get_all().await?;

        Ok(settings
            .into_iter()
            .map(|setting| (setting.key, setting.value))
            .collect())
    }

    /// Inserts or overwrites every provided key, leaving other keys untouched.
    ///
    /// # Returns
    /// - `Ok(SettingsDto)` - Full settings map after the update
    /// - `Err(AppError::BadRequest)` - A key is blank
    pub async fn update(&self, values: SettingsDto) -> Result<SettingsDto, AppError> {
        if values.keys().any(|key| key.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "Setting keys cannot be empty".to_string(),
            ));
        }

        if !values.is_empty() {
            let repo = SettingRepository::new(self.db);
            let count = values.len();

            repo.upsert_many(values).await?;

            tracing::info!("Updated {} settings", count);
        }

        self.get_all().await
    }
}
