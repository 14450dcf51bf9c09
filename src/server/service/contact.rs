use sea_orm::DatabaseConnection;

use crate::{
    model::contact::ContactStatus,
    server::{
        data::contact::ContactRepository,
        error::AppError,
        model::{
            contact::{Contact, CreateContactParams},
            Paginated,
        },
    },
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a message from the contact form in `new` status
    pub async fn create(&self, params: CreateContactParams) -> Result<Contact, AppError> {
        let repo = ContactRepository::new(self.db);

        let contact = repo.create(params).await?;

        tracing::info!("New contact message {} '{}'", contact.id, contact.subject);

        Contact::from_entity(contact)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Contact>, AppError> {
        let repo = ContactRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .map(Contact::from_entity)
            .transpose()
    }

    /// Gets one page (1-based) of messages, newest first
    pub async fn get_paginated(
        &self,
        status: Option<ContactStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Contact>, AppError> {
        let repo = ContactRepository::new(self.db);

        let (contacts, total) = repo.get_paginated(status, page, per_page).await?;

        let items: Result<Vec<_>, _> = contacts.into_iter().map(Contact::from_entity).collect();

        Ok(Paginated {
            items: items?,
            total,
            page,
            per_page,
        })
    }

    /// Returns None if the message doesn't exist
    pub async fn update_status(
        &self,
        id: i32,
        status: ContactStatus,
    ) -> Result<Option<Contact>, AppError> {
        let repo = ContactRepository::new(self.db);

        repo.update_status(id, status)
            .await?
            .map(Contact::from_entity)
            .transpose()
    }

    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ContactRepository::new(self.db);

        Ok(repo.delete(id).await?)
    }
}
