use crate::model::gallery::{CreateGalleryImageDto, GalleryImageDto, UpdateGalleryImageDto};

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryImage {
    pub id: i32,
    pub url: String,
    pub alt: String,
    pub title: String,
    pub sort_order: i32,
    /// Set when the image was uploaded and lives in the gallery upload directory.
    pub filename: Option<String>,
}

impl GalleryImage {
    pub fn from_entity(entity: entity::gallery_image::Model) -> Self {
        Self {
            id: entity.id,
            url: entity.url,
            alt: entity.alt,
            title: entity.title,
            sort_order: entity.sort_order,
            filename: entity.filename,
        }
    }

    pub fn into_dto(self) -> GalleryImageDto {
        GalleryImageDto {
            id: self.id,
            url: self.url,
            alt: self.alt,
            title: self.title,
            sort_order: self.sort_order,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGalleryImageParams {
    pub url: String,
    pub alt: String,
    pub title: String,
    pub filename: Option<String>,
}

impl From<CreateGalleryImageDto> for CreateGalleryImageParams {
    fn from(dto: CreateGalleryImageDto) -> Self {
        Self {
            url: dto.url.trim().to_string(),
            alt: dto.alt.unwrap_or_default(),
            title: dto.title.unwrap_or_default(),
            filename: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGalleryImageParams {
    pub alt: Option<String>,
    pub title: Option<String>,
    pub sort_order: Option<i32>,
}

impl From<UpdateGalleryImageDto> for UpdateGalleryImageParams {
    fn from(dto: UpdateGalleryImageDto) -> Self {
        Self {
            alt: dto.alt,
            title: dto.title,
            sort_order: dto.sort_order,
        }
    }
}
