//! Menu PDF domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::menu_pdf::{MenuPdfDto, UpdateMenuPdfDto};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuPdf {
    pub id: i32,
    pub title: String,
    /// Name of the stored file under the menu upload directory.
    pub filename: String,
    /// File name as supplied by the uploader.
    pub original_name: String,
    pub file_url: String,
    pub file_size: i64,
    pub is_active: bool,
    pub uploaded_at: DateTime<Utc>,
}

impl MenuPdf {
    pub fn from_entity(entity: entity::menu_pdf::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            filename: entity.filename,
            original_name: entity.original_name,
            file_url: entity.file_url,
            file_size: entity.file_size,
            is_active: entity.is_active,
            uploaded_at: entity.uploaded_at,
        }
    }

    pub fn into_dto(self) -> MenuPdfDto {
        MenuPdfDto {
            id: self.id,
            title: self.title,
            filename: self.filename,
            original_name: self.original_name,
            file_url: self.file_url,
            file_size: self.file_size,
            is_active: self.is_active,
            uploaded_at: self.uploaded_at,
        }
    }
}

/// Row written for a PDF that has already been stored on disk.
#[derive(Debug, Clone)]
pub struct CreateMenuPdfParams {
    pub title: String,
    pub filename: String,
    pub original_name: String,
    pub file_url: String,
    pub file_size: i64,
    pub is_active: bool,
}

/// Upload received from the admin form.
#[derive(Debug, Clone)]
pub struct UploadMenuPdfParams {
    /// Falls back to the original file name without its extension.
    pub title: Option<String>,
    pub original_name: String,
    pub bytes: Vec<u8>,
    pub set_active: bool,
}

impl UploadMenuPdfParams {
    pub fn resolved_title(&self) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => std::path::Path::new(&self.original_name)
                .file_stem()
                .and_then(|stem| stem.to_str())
                .filter(|stem| !stem.is_empty())
                .unwrap_or("Menu")
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateMenuPdfParams {
    pub title: Option<String>,
    pub is_active: Option<bool>,
}

impl From<UpdateMenuPdfDto> for UpdateMenuPdfParams {
    fn from(dto: UpdateMenuPdfDto) -> Self {
        Self {
            title: dto
                .title
                .map(|title| title.trim().to_string())
                .filter(|title| !title.is_empty()),
            is_active: dto.is_active,
        }
    }
}
