pub mod models;
pub mod persistence;

pub use persistence::{ActivityLikeRepositoryImpl, ActivityRepositoryImpl};
