use sea_orm::DatabaseConnection;

use crate::server::{
    data::menu_pdf::MenuPdfRepository,
    error::AppError,
    model::menu_pdf::{CreateMenuPdfParams, MenuPdf, UpdateMenuPdfParams, UploadMenuPdfParams},
    util::upload::{is_pdf, UploadStore, MENU_DIR},
};

/// Service for menu PDFs and the files backing them.
pub struct MenuPdfService<'a> {
    db: &'a DatabaseConnection,
    uploads: &'a UploadStore,
}

impl<'a> MenuPdfService<'a> {
    pub fn new(db: &'a DatabaseConnection, uploads: &'a UploadStore) -> Self {
        Self { db, uploads }
    }

    /// Gets every uploaded PDF, newest first
    pub async fn get_all(&self) -> Result<Vec<MenuPdf>, AppError> {
        let repo = MenuPdfRepository::new(self.db);

        let pdfs = repo.get_all().await?;

        Ok(pdfs.into_iter().map(MenuPdf::from_entity).collect())
    }

    /// Gets the PDF currently shown on the menu page, if any
    pub async fn get_active(&self) -> Result<Option<MenuPdf>, AppError> {
        let repo = MenuPdfRepository::new(self.db);

        Ok(repo.get_active().await?.map(MenuPdf::from_entity))
    }

    /// Stores an uploaded PDF and records it.
    ///
    /// The file is written before the row; if the insert fails the file is removed again
    /// so no orphan is left behind.
    ///
    /// # Returns
    /// - `Ok(MenuPdf)` - Stored PDF
    /// - `Err(AppError::BadRequest)` - Upload does not start with the `%PDF-` header
    /// - `Err(AppError::IoErr)` - File could not be written
    pub async fn upload(&self, params: UploadMenuPdfParams) -> Result<MenuPdf, AppError> {
        if !is_pdf(&params.bytes) {
            return Err(AppError::BadRequest(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let title = params.resolved_title();
        let stored = self.uploads.save(MENU_DIR, "pdf", &params.bytes).await?;

        let create = CreateMenuPdfParams {
            title,
            filename: stored.filename.clone(),
            original_name: params.original_name,
            file_url: stored.url,
            file_size: stored.size as i64,
            is_active: params.set_active,
        };

        let pdf = match MenuPdfRepository::new(self.db).create(create).await {
            Ok(pdf) => pdf,
            Err(e) => {
                if let Err(io) = self.uploads.remove(MENU_DIR, &stored.filename).await {
                    tracing::warn!("Failed to remove orphaned upload {}: {}", stored.filename, io);
                }
                return Err(e.into());
            }
        };

        tracing::info!(
            "Uploaded menu PDF {} '{}' (active: {})",
            pdf.id,
            pdf.title,
            pdf.is_active
        );

        Ok(MenuPdf::from_entity(pdf))
    }

    /// Renames and/or activates a PDF
    /// Returns None if the PDF doesn't exist
    pub async fn update(
        &self,
        id: i32,
        params: UpdateMenuPdfParams,
    ) -> Result<Option<MenuPdf>, AppError> {
        let repo = MenuPdfRepository::new(self.db);

        let pdf = repo.update(id, params).await?;

        Ok(pdf.map(MenuPdf::from_entity))
    }

    /// Deletes the row and then its file.
    ///
    /// A file that cannot be removed is logged and left behind; the row is already gone
    /// at that point and the request still succeeds.
    ///
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = MenuPdfRepository::new(self.db);

        let Some(pdf) = repo.delete(id).await? else {
            return Ok(false);
        };

        if let Err(e) = self.uploads.remove(MENU_DIR, &pdf.filename).await {
            tracing::warn!("Failed to remove menu PDF file {}: {}", pdf.filename, e);
        }

        Ok(true)
    }

    /// Reads the active PDF from disk for download.
    ///
    /// # Returns
    /// - `Ok(Some((MenuPdf, bytes)))` - Active PDF and its contents
    /// - `Ok(None)` - No PDF is active
    /// - `Err(AppError::NotFound)` - Active row exists but its file is missing
    pub async fn read_active(&self) -> Result<Option<(MenuPdf, Vec<u8>)>, AppError> {
        let Some(pdf) = self.get_active().await? else {
            return Ok(None);
        };

        let path = self.uploads.path(MENU_DIR, &pdf.filename);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::error!("Active menu PDF {} is missing its file {:?}", pdf.id, path);
                return Err(AppError::NotFound("Menu PDF file not found".to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some((pdf, bytes)))
    }
}
