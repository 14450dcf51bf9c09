use crate::server::{
    data::gallery_image::GalleryImageRepository,
    model::gallery::{CreateGalleryImageParams, UpdateGalleryImageParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn params(url: &str) -> CreateGalleryImageParams {
    CreateGalleryImageParams {
        url: url.to_string(),
        alt: "Plated dish".to_string(),
        title: String::new(),
        filename: None,
    }
}
