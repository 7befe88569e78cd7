pub mod clients;
pub mod error;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod services;
pub mod utility;

pub use error::ApiError;
pub use models::app_state::AppState;

use diesel_migrations::{embed_migrations, EmbeddedMigrations};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();
