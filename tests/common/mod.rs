#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use shelfstream::modules::catalog::domain::{
    BookCatalog, BookSearchResult, MovieCatalog, MovieSearchResult,
};
use shelfstream::modules::content::domain::{
    Content, ContentDetails, ContentRepository, ContentStats, ContentSummary, ContentType,
    MovieDetails, NewBook, NewMovie,
};
use shelfstream::modules::feed::domain::{
    Activity, ActivityLikeRepository, ActivityRepository, ActivityType, NewActivity,
};
use shelfstream::modules::library::domain::{LibraryEntry, LibraryRepository, LibraryStatus};
use shelfstream::modules::lists::domain::{
    CustomList, ListChanges, ListDetail, ListItem, ListRepository, ListSummary,
};
use shelfstream::modules::ratings::domain::{
    NewRating, NewReview, Rating, RatingRepository, Review, ReviewRepository, ReviewWithAuthor,
};
use shelfstream::modules::users::domain::entities::{
    ProfileChanges, User, UserStats, UserSummary,
};
use shelfstream::modules::users::domain::repositories::{FollowRepository, UserRepository};
use shelfstream::shared::errors::AppResult;
use shelfstream::shared::pagination::Page;

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
        async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
        async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, UserSummary>>;
        async fn update_profile(&self, id: Uuid, changes: ProfileChanges) -> AppResult<User>;
        async fn stats(&self, id: Uuid) -> AppResult<UserStats>;
    }
}

mock! {
    pub FollowRepo {}

    #[async_trait]
    impl FollowRepository for FollowRepo {
        async fn insert(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<()>;
        async fn delete(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<bool>;
        async fn exists(&self, follower_id: Uuid, followed_id: Uuid) -> AppResult<bool>;
        async fn followed_ids(&self, user_id: Uuid) -> AppResult<Vec<Uuid>>;
        async fn followers_of(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>>;
        async fn following_of(&self, user_id: Uuid) -> AppResult<Vec<UserSummary>>;
    }
}

mock! {
    pub ContentRepo {}

    #[async_trait]
    impl ContentRepository for ContentRepo {
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Content>>;
        async fn find_movie_by_tmdb_id(&self, tmdb_id: i32) -> AppResult<Option<Content>>;
        async fn find_book_by_google_id(&self, google_books_id: &str) -> AppResult<Option<Content>>;
        async fn insert_movie(&self, new_movie: NewMovie) -> AppResult<Content>;
        async fn insert_book(&self, new_book: NewBook) -> AppResult<Content>;
        async fn exists(&self, id: Uuid) -> AppResult<bool>;
        async fn list(&self, kind: Option<ContentType>, page: Page) -> AppResult<Vec<Content>>;
        async fn top_rated(&self, kind: Option<ContentType>, limit: i64) -> AppResult<Vec<Content>>;
        async fn most_popular(&self, kind: Option<ContentType>, limit: i64) -> AppResult<Vec<Content>>;
        async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, ContentSummary>>;
        async fn refresh_stats(&self, content_id: Uuid) -> AppResult<()>;
    }
}

mock! {
    pub MovieCatalogClient {}

    #[async_trait]
    impl MovieCatalog for MovieCatalogClient {
        async fn search_movies(&self, query: &str, page: i32) -> AppResult<Vec<MovieSearchResult>>;
        async fn movie_details(&self, tmdb_id: i32) -> AppResult<Option<NewMovie>>;
        async fn popular_movies(&self, page: i32) -> AppResult<Vec<MovieSearchResult>>;
        async fn top_rated_movies(&self, page: i32) -> AppResult<Vec<MovieSearchResult>>;
    }
}

mock! {
    pub BookCatalogClient {}

    #[async_trait]
    impl BookCatalog for BookCatalogClient {
        async fn search_books(&self, query: &str, page: i32) -> AppResult<Vec<BookSearchResult>>;
        async fn book_details(&self, google_books_id: &str) -> AppResult<Option<NewBook>>;
        async fn search_by_isbn(&self, isbn: &str) -> AppResult<Option<BookSearchResult>>;
    }
}

mock! {
    pub RatingRepo {}

    #[async_trait]
    impl RatingRepository for RatingRepo {
        async fn insert(&self, new_rating: NewRating) -> AppResult<Rating>;
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rating>>;
        async fn find_by_user_and_content(
            &self,
            user_id: Uuid,
            content_id: Uuid,
        ) -> AppResult<Option<Rating>>;
        async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, Rating>>;
        async fn update_score(&self, id: Uuid, score: f64) -> AppResult<Rating>;
        async fn delete(&self, id: Uuid) -> AppResult<bool>;
        async fn list_for_content(&self, content_id: Uuid, page: Page) -> AppResult<Vec<Rating>>;
        async fn list_for_user(&self, user_id: Uuid, page: Page) -> AppResult<Vec<Rating>>;
    }
}

mock! {
    pub ReviewRepo {}

    #[async_trait]
    impl ReviewRepository for ReviewRepo {
        async fn insert(&self, new_review: NewReview) -> AppResult<Review>;
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Review>>;
        async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, Review>>;
        async fn update_text(&self, id: Uuid, text: String) -> AppResult<Review>;
        async fn delete(&self, id: Uuid) -> AppResult<bool>;
        async fn list_for_content(
            &self,
            content_id: Uuid,
            page: Page,
        ) -> AppResult<Vec<ReviewWithAuthor>>;
        async fn list_for_user(&self, user_id: Uuid, page: Page) -> AppResult<Vec<Review>>;
        async fn like(&self, user_id: Uuid, review_id: Uuid) -> AppResult<i32>;
        async fn unlike(&self, user_id: Uuid, review_id: Uuid) -> AppResult<Option<i32>>;
    }
}

mock! {
    pub LibraryRepo {}

    #[async_trait]
    impl LibraryRepository for LibraryRepo {
        async fn find_for(&self, user_id: Uuid, content_id: Uuid) -> AppResult<Option<LibraryEntry>>;
        async fn insert(
            &self,
            user_id: Uuid,
            content_id: Uuid,
            status: LibraryStatus,
        ) -> AppResult<LibraryEntry>;
        async fn update_status(&self, id: Uuid, status: LibraryStatus) -> AppResult<LibraryEntry>;
        async fn delete_for(&self, user_id: Uuid, content_id: Uuid) -> AppResult<bool>;
        async fn list(
            &self,
            user_id: Uuid,
            status: Option<LibraryStatus>,
            page: Page,
        ) -> AppResult<Vec<LibraryEntry>>;
    }
}

mock! {
    pub ListRepo {}

    #[async_trait]
    impl ListRepository for ListRepo {
        async fn insert(
            &self,
            user_id: Uuid,
            name: String,
            description: Option<String>,
            is_public: bool,
        ) -> AppResult<CustomList>;
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CustomList>>;
        async fn update(&self, id: Uuid, changes: ListChanges) -> AppResult<CustomList>;
        async fn delete(&self, id: Uuid) -> AppResult<bool>;
        async fn count_items(&self, list_id: Uuid) -> AppResult<i64>;
        async fn find_item(&self, list_id: Uuid, content_id: Uuid) -> AppResult<Option<ListItem>>;
        async fn insert_item(
            &self,
            list_id: Uuid,
            content_id: Uuid,
            position: i32,
        ) -> AppResult<ListItem>;
        async fn delete_item(&self, list_id: Uuid, content_id: Uuid) -> AppResult<bool>;
        async fn list_for_user(&self, user_id: Uuid, only_public: bool) -> AppResult<Vec<ListSummary>>;
        async fn detail(&self, id: Uuid) -> AppResult<Option<ListDetail>>;
        async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, ListSummary>>;
    }
}

mock! {
    pub ActivityRepo {}

    #[async_trait]
    impl ActivityRepository for ActivityRepo {
        async fn insert(&self, new_activity: NewActivity) -> AppResult<Activity>;
        async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Activity>>;
        async fn page_for_authors(&self, author_ids: &[Uuid], page: Page) -> AppResult<Vec<Activity>>;
        async fn page_for_author(&self, author_id: Uuid, page: Page) -> AppResult<Vec<Activity>>;
        async fn page_all(&self, page: Page) -> AppResult<Vec<Activity>>;
        async fn delete_for_list(&self, list_id: Uuid) -> AppResult<usize>;
    }
}

mock! {
    pub ActivityLikeRepo {}

    #[async_trait]
    impl ActivityLikeRepository for ActivityLikeRepo {
        async fn exists(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<bool>;
        async fn insert(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<()>;
        async fn delete(&self, user_id: Uuid, activity_id: Uuid) -> AppResult<bool>;
        async fn count(&self, activity_id: Uuid) -> AppResult<i64>;
        async fn counts_by_activity(&self, activity_ids: &[Uuid]) -> AppResult<HashMap<Uuid, i64>>;
        async fn liked_by(&self, user_id: Uuid, activity_ids: &[Uuid]) -> AppResult<HashSet<Uuid>>;
        async fn likers(
            &self,
            activity_id: Uuid,
            limit: i64,
        ) -> AppResult<Vec<(UserSummary, DateTime<Utc>)>>;
    }
}

// ------------------------------------------------------------------
// Entity factories
// ------------------------------------------------------------------

pub fn user_fixture(id: Uuid, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        avatar_url: None,
        bio: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn user_summary_fixture(id: Uuid, username: &str) -> UserSummary {
    UserSummary {
        id,
        username: username.to_string(),
        avatar_url: None,
    }
}

pub fn movie_fixture(id: Uuid, title: &str) -> Content {
    Content {
        id,
        title: title.to_string(),
        original_title: None,
        description: None,
        cover_image_url: None,
        tmdb_id: Some(603),
        google_books_id: None,
        stats: ContentStats::default(),
        details: ContentDetails::Movie(MovieDetails::default()),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn rating_fixture(id: Uuid, user_id: Uuid, content_id: Uuid, score: f64) -> Rating {
    Rating {
        id,
        user_id,
        content_id,
        score,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn review_fixture(id: Uuid, user_id: Uuid, content_id: Uuid, text: &str) -> Review {
    Review {
        id,
        user_id,
        content_id,
        text: text.to_string(),
        likes_count: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn library_entry_fixture(user_id: Uuid, content_id: Uuid, status: LibraryStatus) -> LibraryEntry {
    LibraryEntry {
        id: Uuid::new_v4(),
        user_id,
        content_id,
        status,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn list_fixture(id: Uuid, user_id: Uuid, name: &str, is_public: bool) -> CustomList {
    CustomList {
        id,
        user_id,
        name: name.to_string(),
        description: None,
        is_public,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

pub fn list_item_fixture(list_id: Uuid, content_id: Uuid, position: i32) -> ListItem {
    ListItem {
        id: Uuid::new_v4(),
        list_id,
        content_id,
        position,
        added_at: Utc::now(),
    }
}

pub fn activity_fixture(user_id: Uuid, activity_type: ActivityType) -> Activity {
    Activity {
        id: Uuid::new_v4(),
        user_id,
        activity_type,
        content_id: None,
        rating_id: None,
        review_id: None,
        list_id: None,
        extra: None,
        created_at: Utc::now(),
    }
}

pub fn activity_from(new_activity: &NewActivity) -> Activity {
    Activity {
        id: Uuid::new_v4(),
        user_id: new_activity.user_id,
        activity_type: new_activity.activity_type,
        content_id: new_activity.content_id,
        rating_id: new_activity.rating_id,
        review_id: new_activity.review_id,
        list_id: new_activity.list_id,
        extra: new_activity.extra.clone(),
        created_at: Utc::now(),
    }
}
