//! Public profiles, the directed follow graph and per-user statistics.
//! Registration and credential handling live in an external identity
//! service; this module only ever sees resolved user ids.

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::UserService;
pub use domain::entities::{ProfileChanges, User, UserProfile, UserStats, UserSummary};
pub use domain::repositories::{FollowRepository, UserRepository};
pub use infrastructure::persistence::{FollowRepositoryImpl, UserRepositoryImpl};
