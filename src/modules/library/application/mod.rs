pub mod service;

pub use service::LibraryService;
