/// Activity likes are idempotent and always report live counts, unlike
/// their stricter review-like cousins.
mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{activity_fixture, MockActivityLikeRepo, MockActivityRepo};
use shelfstream::modules::feed::application::EngagementService;
use shelfstream::modules::feed::domain::ActivityType;
use shelfstream::shared::errors::AppError;

fn service(
    activity_repo: MockActivityRepo,
    like_repo: MockActivityLikeRepo,
) -> EngagementService {
    EngagementService::new(Arc::new(activity_repo), Arc::new(like_repo))
}

#[tokio::test]
async fn liking_an_unknown_activity_is_not_found() {
    let mut activity_repo = MockActivityRepo::new();
    activity_repo.expect_find_by_id().returning(|_| Ok(None));

    let result = service(activity_repo, MockActivityLikeRepo::new())
        .like_activity(Uuid::new_v4(), Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn first_like_inserts_a_row_and_reports_the_state() {
    let user_id = Uuid::new_v4();
    let activity = activity_fixture(Uuid::new_v4(), ActivityType::Rating);
    let activity_id = activity.id;

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(activity.clone())));

    let mut like_repo = MockActivityLikeRepo::new();
    like_repo.expect_exists().returning(|_, _| Ok(false));
    like_repo
        .expect_insert()
        .withf(move |user, act| *user == user_id && *act == activity_id)
        .times(1)
        .returning(|_, _| Ok(()));
    like_repo.expect_count().returning(|_| Ok(1));

    let state = service(activity_repo, like_repo)
        .like_activity(user_id, activity_id)
        .await
        .unwrap();

    assert!(state.is_liked);
    assert_eq!(state.likes_count, 1);
}

#[tokio::test]
async fn repeated_like_is_idempotent() {
    let activity = activity_fixture(Uuid::new_v4(), ActivityType::Review);
    let activity_id = activity.id;

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(activity.clone())));

    let mut like_repo = MockActivityLikeRepo::new();
    like_repo.expect_exists().returning(|_, _| Ok(true));
    // No insert expectation: a second row would fail the test
    like_repo.expect_count().returning(|_| Ok(3));

    let state = service(activity_repo, like_repo)
        .like_activity(Uuid::new_v4(), activity_id)
        .await
        .unwrap();

    assert!(state.is_liked);
    assert_eq!(state.likes_count, 3);
}

#[tokio::test]
async fn unliking_without_a_like_is_not_found() {
    let activity = activity_fixture(Uuid::new_v4(), ActivityType::Rating);
    let activity_id = activity.id;

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(activity.clone())));

    let mut like_repo = MockActivityLikeRepo::new();
    like_repo.expect_delete().returning(|_, _| Ok(false));

    let result = service(activity_repo, like_repo)
        .unlike_activity(Uuid::new_v4(), activity_id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn unlike_reports_the_remaining_count() {
    let activity = activity_fixture(Uuid::new_v4(), ActivityType::Rating);
    let activity_id = activity.id;

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(activity.clone())));

    let mut like_repo = MockActivityLikeRepo::new();
    like_repo.expect_delete().returning(|_, _| Ok(true));
    like_repo.expect_count().returning(|_| Ok(2));

    let state = service(activity_repo, like_repo)
        .unlike_activity(Uuid::new_v4(), activity_id)
        .await
        .unwrap();

    assert!(!state.is_liked);
    assert_eq!(state.likes_count, 2);
}

#[tokio::test]
async fn anonymous_like_status_is_never_liked() {
    let activity = activity_fixture(Uuid::new_v4(), ActivityType::Rating);
    let activity_id = activity.id;

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(activity.clone())));

    let mut like_repo = MockActivityLikeRepo::new();
    like_repo.expect_count().returning(|_| Ok(7));

    let state = service(activity_repo, like_repo)
        .like_status(None, activity_id)
        .await
        .unwrap();

    assert!(!state.is_liked);
    assert_eq!(state.likes_count, 7);
}
