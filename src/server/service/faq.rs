use sea_orm::DatabaseConnection;

use crate::server::{
    data::faq::FaqRepository,
    error::AppError,
    model::faq::{CreateFaqParams, Faq, UpdateFaqParams},
};

pub struct FaqService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FaqService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets FAQs in display order; inactive ones only when `include_inactive`
    pub async fn get_all(&self, include_inactive: bool) -> Result<Vec<Faq>, AppError> {
        let repo = FaqRepository::new(self.db);

        let faqs = repo.get_all(include_inactive).await?;

        Ok(faqs.into_iter().map(Faq::from_entity).collect())
    }

    /// Creates a FAQ placed after the current last one
    pub async fn create(&self, params: CreateFaqParams) -> Result<Faq, AppError> {
        let repo = FaqRepository::new(self.db);

        let faq = repo.create(params).await?;

        Ok(Faq::from_entity(faq))
    }

    /// Returns None if the FAQ doesn't exist
    pub async fn update(&self, id: i32, params: UpdateFaqParams) -> Result<Option<Faq>, AppError> {
        let repo = FaqRepository::new(self.db);

        let faq = repo.update(id, params).await?;

        Ok(faq.map(Faq::from_entity))
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = FaqRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
