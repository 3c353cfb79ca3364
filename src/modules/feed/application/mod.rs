pub mod engagement_service;
pub mod feed_service;

pub use engagement_service::EngagementService;
pub use feed_service::FeedService;
