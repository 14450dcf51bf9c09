use crate::{
    model::contact::ContactStatus,
    server::{data::contact::ContactRepository, model::contact::CreateContactParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_paginated;
mod update_status;
