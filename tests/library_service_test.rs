/// Library semantics: first add vs re-add, and which of the two shows
/// up in the feed.
mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{activity_from, library_entry_fixture, MockActivityRepo, MockContentRepo,
    MockLibraryRepo};
use shelfstream::modules::feed::domain::ActivityType;
use shelfstream::modules::library::application::LibraryService;
use shelfstream::modules::library::domain::LibraryStatus;
use shelfstream::shared::errors::AppError;

fn service(
    library_repo: MockLibraryRepo,
    content_repo: MockContentRepo,
    activity_repo: MockActivityRepo,
) -> LibraryService {
    LibraryService::new(
        Arc::new(library_repo),
        Arc::new(content_repo),
        Arc::new(activity_repo),
    )
}

#[tokio::test]
async fn adding_unknown_content_is_not_found() {
    let mut content_repo = MockContentRepo::new();
    content_repo.expect_exists().returning(|_| Ok(false));

    let result = service(MockLibraryRepo::new(), content_repo, MockActivityRepo::new())
        .add_entry(Uuid::new_v4(), Uuid::new_v4(), LibraryStatus::Watched)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn first_add_logs_a_feed_event_with_the_status() {
    let user_id = Uuid::new_v4();
    let content_id = Uuid::new_v4();
    let entry = library_entry_fixture(user_id, content_id, LibraryStatus::ToRead);

    let mut content_repo = MockContentRepo::new();
    content_repo.expect_exists().returning(|_| Ok(true));

    let mut library_repo = MockLibraryRepo::new();
    library_repo.expect_find_for().returning(|_, _| Ok(None));
    library_repo
        .expect_insert()
        .times(1)
        .returning(move |_, _, _| Ok(entry.clone()));

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_insert()
        .withf(move |new| {
            new.activity_type == ActivityType::LibraryAdd
                && new.content_id == Some(content_id)
                && new.extra.as_ref().and_then(|e| e.get("status")).is_some()
        })
        .times(1)
        .returning(|new| Ok(activity_from(&new)));

    let created = service(library_repo, content_repo, activity_repo)
        .add_entry(user_id, content_id, LibraryStatus::ToRead)
        .await
        .unwrap();

    assert_eq!(created.status, LibraryStatus::ToRead);
}

#[tokio::test]
async fn re_add_updates_the_status_without_a_second_feed_event() {
    let user_id = Uuid::new_v4();
    let content_id = Uuid::new_v4();
    let existing = library_entry_fixture(user_id, content_id, LibraryStatus::ToWatch);
    let entry_id = existing.id;
    let moved = library_entry_fixture(user_id, content_id, LibraryStatus::Watched);

    let mut content_repo = MockContentRepo::new();
    content_repo.expect_exists().returning(|_| Ok(true));

    let mut library_repo = MockLibraryRepo::new();
    library_repo
        .expect_find_for()
        .returning(move |_, _| Ok(Some(existing.clone())));
    library_repo
        .expect_update_status()
        .withf(move |id, status| *id == entry_id && *status == LibraryStatus::Watched)
        .times(1)
        .returning(move |_, _| Ok(moved.clone()));

    // The bare MockActivityRepo fails the test if any event is recorded
    let updated = service(library_repo, content_repo, MockActivityRepo::new())
        .add_entry(user_id, content_id, LibraryStatus::Watched)
        .await
        .unwrap();

    assert_eq!(updated.status, LibraryStatus::Watched);
}

#[tokio::test]
async fn removing_a_missing_entry_is_not_found() {
    let mut library_repo = MockLibraryRepo::new();
    library_repo.expect_delete_for().returning(|_, _| Ok(false));

    let result = service(library_repo, MockContentRepo::new(), MockActivityRepo::new())
        .remove_entry(Uuid::new_v4(), Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
