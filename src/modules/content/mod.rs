//! The content catalog: movies and books, their denormalized rating
//! figures, and the read-through import path from external catalogs.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ContentService;
pub use domain::{
    Content, ContentDetails, ContentRepository, ContentStats, ContentSummary, ContentType,
    NewBook, NewMovie,
};
pub use infrastructure::ContentRepositoryImpl;
