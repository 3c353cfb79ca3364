/// Review writes and review likes: text validation, which operations
/// recount content stats, and the strict (non-idempotent) like rules.
mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{activity_from, review_fixture, MockActivityRepo, MockContentRepo, MockReviewRepo};
use shelfstream::modules::feed::domain::ActivityType;
use shelfstream::modules::ratings::application::ReviewService;
use shelfstream::shared::errors::AppError;

fn service(
    review_repo: MockReviewRepo,
    content_repo: MockContentRepo,
    activity_repo: MockActivityRepo,
) -> ReviewService {
    ReviewService::new(
        Arc::new(review_repo),
        Arc::new(content_repo),
        Arc::new(activity_repo),
    )
}

#[tokio::test]
async fn blank_review_text_is_rejected() {
    let mut content_repo = MockContentRepo::new();
    content_repo.expect_exists().returning(|_| Ok(true));

    let result = service(MockReviewRepo::new(), content_repo, MockActivityRepo::new())
        .create_review(Uuid::new_v4(), Uuid::new_v4(), "   ".to_string())
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn create_review_recounts_stats_and_logs_a_feed_event() {
    let user_id = Uuid::new_v4();
    let content_id = Uuid::new_v4();
    let review = review_fixture(Uuid::new_v4(), user_id, content_id, "Loved it.");
    let review_id = review.id;

    let mut content_repo = MockContentRepo::new();
    content_repo.expect_exists().returning(|_| Ok(true));
    content_repo
        .expect_refresh_stats()
        .withf(move |id| *id == content_id)
        .times(1)
        .returning(|_| Ok(()));

    let mut review_repo = MockReviewRepo::new();
    review_repo
        .expect_insert()
        .times(1)
        .returning(move |_| Ok(review.clone()));

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_insert()
        .withf(move |new| {
            new.activity_type == ActivityType::Review && new.review_id == Some(review_id)
        })
        .times(1)
        .returning(|new| Ok(activity_from(&new)));

    let created = service(review_repo, content_repo, activity_repo)
        .create_review(user_id, content_id, "Loved it.".to_string())
        .await
        .unwrap();

    assert_eq!(created.id, review_id);
}

#[tokio::test]
async fn editing_review_text_leaves_stats_alone() {
    let user_id = Uuid::new_v4();
    let review = review_fixture(Uuid::new_v4(), user_id, Uuid::new_v4(), "First draft");
    let review_id = review.id;
    let edited = review_fixture(review_id, user_id, review.content_id, "Second draft");

    let mut review_repo = MockReviewRepo::new();
    review_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(review.clone())));
    review_repo
        .expect_update_text()
        .times(1)
        .returning(move |_, _| Ok(edited.clone()));

    // No refresh_stats and no activity expectations: the mocks fail the
    // test if either gets called
    let updated = service(review_repo, MockContentRepo::new(), MockActivityRepo::new())
        .update_review(user_id, review_id, "Second draft".to_string())
        .await
        .unwrap();

    assert_eq!(updated.text, "Second draft");
}

#[tokio::test]
async fn deleting_a_review_triggers_a_recount() {
    let user_id = Uuid::new_v4();
    let content_id = Uuid::new_v4();
    let review = review_fixture(Uuid::new_v4(), user_id, content_id, "Gone soon");
    let review_id = review.id;

    let mut review_repo = MockReviewRepo::new();
    review_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(review.clone())));
    review_repo
        .expect_delete()
        .times(1)
        .returning(|_| Ok(true));

    let mut content_repo = MockContentRepo::new();
    content_repo
        .expect_refresh_stats()
        .withf(move |id| *id == content_id)
        .times(1)
        .returning(|_| Ok(()));

    let result = service(review_repo, content_repo, MockActivityRepo::new())
        .delete_review(user_id, review_id)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn liking_a_review_returns_the_new_count() {
    let review = review_fixture(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "Nice");
    let review_id = review.id;

    let mut review_repo = MockReviewRepo::new();
    review_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(review.clone())));
    review_repo.expect_like().returning(|_, _| Ok(5));

    let count = service(review_repo, MockContentRepo::new(), MockActivityRepo::new())
        .like_review(Uuid::new_v4(), review_id)
        .await
        .unwrap();

    assert_eq!(count, 5);
}

#[tokio::test]
async fn liking_a_review_twice_is_a_conflict() {
    let review = review_fixture(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "Nice");
    let review_id = review.id;

    let mut review_repo = MockReviewRepo::new();
    review_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(review.clone())));
    review_repo
        .expect_like()
        .returning(|_, _| Err(AppError::Conflict("already liked".to_string())));

    let result = service(review_repo, MockContentRepo::new(), MockActivityRepo::new())
        .like_review(Uuid::new_v4(), review_id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn unliking_without_a_like_is_not_found() {
    let review = review_fixture(Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4(), "Nice");
    let review_id = review.id;

    let mut review_repo = MockReviewRepo::new();
    review_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(review.clone())));
    review_repo.expect_unlike().returning(|_, _| Ok(None));

    let result = service(review_repo, MockContentRepo::new(), MockActivityRepo::new())
        .unlike_review(Uuid::new_v4(), review_id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
