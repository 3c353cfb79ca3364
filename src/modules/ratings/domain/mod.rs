pub mod entities;
pub mod repositories;

pub use entities::{NewRating, NewReview, Rating, Review, ReviewWithAuthor};
pub use repositories::{RatingRepository, ReviewRepository};
