use crate::server::{
    data::faq::FaqRepository,
    model::faq::{CreateFaqParams, UpdateFaqParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod update;
