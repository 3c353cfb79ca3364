pub mod entities;
pub mod repositories;

pub use entities::{ProfileChanges, User, UserProfile, UserStats, UserSummary};
pub use repositories::{FollowRepository, UserRepository};
