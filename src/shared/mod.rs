pub mod config;
pub mod database;
pub mod errors;
pub mod pagination;
pub mod utils;

pub use config::Config;
pub use database::Database;
