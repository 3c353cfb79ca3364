/// Read-through catalog imports: local rows win, first access imports,
/// a lost insert race falls back to the winner's row.
mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{movie_fixture, MockBookCatalogClient, MockContentRepo, MockMovieCatalogClient};
use shelfstream::modules::content::application::ContentService;
use shelfstream::modules::content::domain::{MovieDetails, NewMovie};
use shelfstream::shared::errors::AppError;

fn service(
    content_repo: MockContentRepo,
    movie_catalog: MockMovieCatalogClient,
) -> ContentService {
    ContentService::new(
        Arc::new(content_repo),
        Arc::new(movie_catalog),
        Arc::new(MockBookCatalogClient::new()),
    )
}

fn new_movie(tmdb_id: i32, title: &str) -> NewMovie {
    NewMovie {
        title: title.to_string(),
        original_title: None,
        description: None,
        cover_image_url: None,
        tmdb_id,
        details: MovieDetails::default(),
    }
}

#[tokio::test]
async fn known_movie_is_served_without_touching_the_catalog() {
    let existing = movie_fixture(Uuid::new_v4(), "The Matrix");
    let existing_id = existing.id;

    let mut content_repo = MockContentRepo::new();
    content_repo
        .expect_find_movie_by_tmdb_id()
        .returning(move |_| Ok(Some(existing.clone())));

    // The bare catalog mock fails the test on any outbound call
    let content = service(content_repo, MockMovieCatalogClient::new())
        .get_or_fetch_movie(603)
        .await
        .unwrap();

    assert_eq!(content.id, existing_id);
}

#[tokio::test]
async fn first_access_imports_the_movie_from_the_catalog() {
    let imported = movie_fixture(Uuid::new_v4(), "The Matrix");
    let imported_id = imported.id;

    let mut content_repo = MockContentRepo::new();
    content_repo
        .expect_find_movie_by_tmdb_id()
        .returning(|_| Ok(None));
    content_repo
        .expect_insert_movie()
        .withf(|new| new.tmdb_id == 603)
        .times(1)
        .returning(move |_| Ok(imported.clone()));

    let mut movie_catalog = MockMovieCatalogClient::new();
    movie_catalog
        .expect_movie_details()
        .returning(|_| Ok(Some(new_movie(603, "The Matrix"))));

    let content = service(content_repo, movie_catalog)
        .get_or_fetch_movie(603)
        .await
        .unwrap();

    assert_eq!(content.id, imported_id);
}

#[tokio::test]
async fn movie_unknown_to_the_catalog_is_not_found() {
    let mut content_repo = MockContentRepo::new();
    content_repo
        .expect_find_movie_by_tmdb_id()
        .returning(|_| Ok(None));

    let mut movie_catalog = MockMovieCatalogClient::new();
    movie_catalog.expect_movie_details().returning(|_| Ok(None));

    let result = service(content_repo, movie_catalog)
        .get_or_fetch_movie(999_999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn lost_import_race_falls_back_to_the_winning_row() {
    let winner = movie_fixture(Uuid::new_v4(), "The Matrix");
    let winner_id = winner.id;

    let mut content_repo = MockContentRepo::new();
    let mut lookups = 0;
    content_repo
        .expect_find_movie_by_tmdb_id()
        .returning(move |_| {
            lookups += 1;
            if lookups == 1 {
                Ok(None)
            } else {
                Ok(Some(winner.clone()))
            }
        });
    content_repo
        .expect_insert_movie()
        .returning(|_| Err(AppError::Conflict("tmdb id already imported".to_string())));

    let mut movie_catalog = MockMovieCatalogClient::new();
    movie_catalog
        .expect_movie_details()
        .returning(|_| Ok(Some(new_movie(603, "The Matrix"))));

    let content = service(content_repo, movie_catalog)
        .get_or_fetch_movie(603)
        .await
        .unwrap();

    assert_eq!(content.id, winner_id);
}

#[tokio::test]
async fn blank_search_query_is_rejected() {
    let result = service(MockContentRepo::new(), MockMovieCatalogClient::new())
        .search_movies("   ", 1)
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}
