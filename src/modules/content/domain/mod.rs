pub mod entities;
pub mod repositories;
pub mod stats;
pub mod value_objects;

pub use entities::{
    BookDetails, Content, ContentDetails, ContentStats, ContentSummary, MovieDetails, NewBook,
    NewMovie,
};
pub use repositories::ContentRepository;
pub use value_objects::ContentType;
