//! The activity feed: an append-only event trail per user, assembled
//! into personal, global, and profile feeds, plus likes on activities.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{EngagementService, FeedService};
pub use domain::{
    Activity, ActivityLikeRepository, ActivityLikeState, ActivityRepository, ActivityType,
    FeedItem, NewActivity,
};
pub use infrastructure::{ActivityLikeRepositoryImpl, ActivityRepositoryImpl};
