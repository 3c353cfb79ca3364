//! Custom lists: user-curated, ordered collections of contents.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::ListService;
pub use domain::{
    CustomList, ListChanges, ListDetail, ListItem, ListItemDetail, ListRepository, ListSummary,
};
pub use infrastructure::ListRepositoryImpl;
