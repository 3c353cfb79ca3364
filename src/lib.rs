pub mod modules;
mod schema;
pub mod shared;

use std::sync::Arc;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use modules::{
    catalog::{
        domain::{BookCatalog, MovieCatalog},
        infrastructure::{GoogleBooksClient, TmdbClient},
    },
    content::{
        application::ContentService, domain::ContentRepository,
        infrastructure::ContentRepositoryImpl,
    },
    feed::{
        application::{EngagementService, FeedService},
        domain::{ActivityLikeRepository, ActivityRepository},
        infrastructure::{ActivityLikeRepositoryImpl, ActivityRepositoryImpl},
    },
    library::{
        application::LibraryService, domain::LibraryRepository,
        infrastructure::LibraryRepositoryImpl,
    },
    lists::{application::ListService, domain::ListRepository, infrastructure::ListRepositoryImpl},
    ratings::{
        application::{RatingService, ReviewService},
        domain::{RatingRepository, ReviewRepository},
        infrastructure::{RatingRepositoryImpl, ReviewRepositoryImpl},
    },
    users::{
        application::UserService,
        domain::repositories::{FollowRepository, UserRepository},
        infrastructure::{FollowRepositoryImpl, UserRepositoryImpl},
    },
};
use shared::errors::{AppError, AppResult};
use shared::{Config, Database};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub fn run_migrations(database: &Database) -> AppResult<()> {
    let mut conn = database.get_connection()?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| AppError::DatabaseError(format!("Failed to run migrations: {}", e)))?;
    Ok(())
}

/// All services wired against one database pool and the external
/// catalog clients. The composition root for embedders.
pub struct AppServices {
    pub users: UserService,
    pub contents: ContentService,
    pub ratings: RatingService,
    pub reviews: ReviewService,
    pub library: LibraryService,
    pub lists: ListService,
    pub feed: FeedService,
    pub engagement: EngagementService,
}

impl AppServices {
    pub fn build(config: &Config) -> AppResult<Self> {
        let database = Arc::new(Database::new(config)?);
        run_migrations(&database)?;

        let movie_catalog: Arc<dyn MovieCatalog> =
            Arc::new(TmdbClient::new(config.tmdb_api_key.clone())?);
        let book_catalog: Arc<dyn BookCatalog> =
            Arc::new(GoogleBooksClient::new(config.google_books_api_key.clone())?);

        Ok(Self::wire(database, movie_catalog, book_catalog))
    }

    /// Wiring without migrations or live catalog clients, for embedders
    /// that bring their own.
    pub fn wire(
        database: Arc<Database>,
        movie_catalog: Arc<dyn MovieCatalog>,
        book_catalog: Arc<dyn BookCatalog>,
    ) -> Self {
        let user_repo: Arc<dyn UserRepository> =
            Arc::new(UserRepositoryImpl::new(Arc::clone(&database)));
        let follow_repo: Arc<dyn FollowRepository> =
            Arc::new(FollowRepositoryImpl::new(Arc::clone(&database)));
        let content_repo: Arc<dyn ContentRepository> =
            Arc::new(ContentRepositoryImpl::new(Arc::clone(&database)));
        let rating_repo: Arc<dyn RatingRepository> =
            Arc::new(RatingRepositoryImpl::new(Arc::clone(&database)));
        let review_repo: Arc<dyn ReviewRepository> =
            Arc::new(ReviewRepositoryImpl::new(Arc::clone(&database)));
        let library_repo: Arc<dyn LibraryRepository> =
            Arc::new(LibraryRepositoryImpl::new(Arc::clone(&database)));
        let list_repo: Arc<dyn ListRepository> =
            Arc::new(ListRepositoryImpl::new(Arc::clone(&database)));
        let activity_repo: Arc<dyn ActivityRepository> =
            Arc::new(ActivityRepositoryImpl::new(Arc::clone(&database)));
        let activity_like_repo: Arc<dyn ActivityLikeRepository> =
            Arc::new(ActivityLikeRepositoryImpl::new(Arc::clone(&database)));

        Self {
            users: UserService::new(Arc::clone(&user_repo), Arc::clone(&follow_repo)),
            contents: ContentService::new(
                Arc::clone(&content_repo),
                movie_catalog,
                book_catalog,
            ),
            ratings: RatingService::new(
                Arc::clone(&rating_repo),
                Arc::clone(&content_repo),
                Arc::clone(&activity_repo),
            ),
            reviews: ReviewService::new(
                Arc::clone(&review_repo),
                Arc::clone(&content_repo),
                Arc::clone(&activity_repo),
            ),
            library: LibraryService::new(
                Arc::clone(&library_repo),
                Arc::clone(&content_repo),
                Arc::clone(&activity_repo),
            ),
            lists: ListService::new(
                Arc::clone(&list_repo),
                Arc::clone(&content_repo),
                Arc::clone(&activity_repo),
            ),
            feed: FeedService::new(
                Arc::clone(&activity_repo),
                Arc::clone(&activity_like_repo),
                Arc::clone(&follow_repo),
                Arc::clone(&user_repo),
                Arc::clone(&content_repo),
                Arc::clone(&rating_repo),
                Arc::clone(&review_repo),
                Arc::clone(&list_repo),
            ),
            engagement: EngagementService::new(activity_repo, activity_like_repo),
        }
    }
}
