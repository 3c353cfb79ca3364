pub mod entities;
pub mod repositories;

pub use entities::{CustomList, ListChanges, ListDetail, ListItem, ListItemDetail, ListSummary};
pub use repositories::ListRepository;
