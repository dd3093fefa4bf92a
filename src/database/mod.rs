pub mod loader;
pub mod manager;
pub mod models;

pub use manager::{connect_pool, health_check, run_migrations, DatabaseError};
pub use models::{Person, Receipt};
