//! Ratings and reviews, including review likes with their maintained
//! counter. Every write that changes rating or review counts pushes a
//! stats recount onto the owning content row.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{RatingService, ReviewService};
pub use domain::{
    NewRating, NewReview, Rating, RatingRepository, Review, ReviewRepository, ReviewWithAuthor,
};
pub use infrastructure::{RatingRepositoryImpl, ReviewRepositoryImpl};
