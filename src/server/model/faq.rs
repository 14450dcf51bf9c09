use chrono::{DateTime, Utc};

use crate::model::faq::{CreateFaqDto, FaqDto, UpdateFaqDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Faq {
    pub fn from_entity(entity: entity::faq::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            sort_order: entity.sort_order,
            is_active: entity.is_active,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> FaqDto {
        FaqDto {
            id: self.id,
            question: self.question,
            answer: self.answer,
            sort_order: self.sort_order,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFaqParams {
    pub question: String,
    pub answer: String,
    pub is_active: bool,
}

impl From<CreateFaqDto> for CreateFaqParams {
    fn from(dto: CreateFaqDto) -> Self {
        Self {
            question: dto.question.trim().to_string(),
            answer: dto.answer.trim().to_string(),
            is_active: dto.is_active.unwrap_or(true),
        }
    }
}

/// Partial update; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFaqParams {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub is_active: Option<bool>,
    pub sort_order: Option<i32>,
}

impl From<UpdateFaqDto> for UpdateFaqParams {
    fn from(dto: UpdateFaqDto) -> Self {
        Self {
            question: dto.question.map(|q| q.trim().to_string()),
            answer: dto.answer.map(|a| a.trim().to_string()),
            is_active: dto.is_active,
            sort_order: dto.sort_order,
        }
    }
}
