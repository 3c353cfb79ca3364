pub mod entities;
pub mod repositories;

pub use entities::{Activity, ActivityLikeState, ActivityType, FeedItem, NewActivity};
pub use repositories::{ActivityLikeRepository, ActivityRepository};
