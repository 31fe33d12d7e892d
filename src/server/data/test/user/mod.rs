use crate::{
    model::user::UserRole,
    server::{data::user::UserRepository, model::user::CreateUserParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod find_by_username;
