use crate::server::data::admin_user::AdminUserRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_username;
mod update_password;
