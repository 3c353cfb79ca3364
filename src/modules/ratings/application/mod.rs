pub mod rating_service;
pub mod review_service;

pub use rating_service::RatingService;
pub use review_service::ReviewService;
