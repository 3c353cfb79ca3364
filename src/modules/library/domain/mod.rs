pub mod entities;
pub mod repositories;

pub use entities::{LibraryEntry, LibraryStatus};
pub use repositories::LibraryRepository;
