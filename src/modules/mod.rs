pub mod catalog;
pub mod content;
pub mod feed;
pub mod library;
pub mod lists;
pub mod ratings;
pub mod users;
