pub mod models;
pub mod persistence;

pub use persistence::ContentRepositoryImpl;
