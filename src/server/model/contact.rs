use chrono::{DateTime, Utc};

use crate::{
    model::contact::{ContactDto, ContactStatus, CreateContactDto},
    server::error::{internal::InternalError, AppError},
};

/// Message left through the public contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    pub fn from_entity(entity: entity::contact::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<ContactStatus>()
            .map_err(|_| InternalError::UnknownStatus {
                column: "contacts.status",
                id: entity.id,
                value: entity.status.clone(),
            })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            subject: entity.subject,
            message: entity.message,
            status,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> ContactDto {
        ContactDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateContactParams {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl From<CreateContactDto> for CreateContactParams {
    fn from(dto: CreateContactDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone.unwrap_or_default().trim().to_string(),
            subject: dto.subject.trim().to_string(),
            message: dto.message.trim().to_string(),
        }
    }
}
