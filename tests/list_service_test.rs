/// Custom list rules: append positions, ownership, privacy, and the
/// feed-event cleanup that makes list deletion special.
mod common;

use std::sync::Arc;

use uuid::Uuid;

use common::{
    activity_from, list_fixture, list_item_fixture, MockActivityRepo, MockContentRepo,
    MockListRepo,
};
use shelfstream::modules::feed::domain::ActivityType;
use shelfstream::modules::lists::application::ListService;
use shelfstream::modules::lists::domain::ListDetail;
use shelfstream::shared::errors::AppError;

fn service(
    list_repo: MockListRepo,
    content_repo: MockContentRepo,
    activity_repo: MockActivityRepo,
) -> ListService {
    ListService::new(
        Arc::new(list_repo),
        Arc::new(content_repo),
        Arc::new(activity_repo),
    )
}

#[tokio::test]
async fn blank_list_name_is_rejected() {
    let result = service(MockListRepo::new(), MockContentRepo::new(), MockActivityRepo::new())
        .create_list(Uuid::new_v4(), "  ".to_string(), None, true)
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn creating_a_list_logs_a_feed_event() {
    let user_id = Uuid::new_v4();
    let list = list_fixture(Uuid::new_v4(), user_id, "Favorites", true);
    let list_id = list.id;

    let mut list_repo = MockListRepo::new();
    list_repo
        .expect_insert()
        .times(1)
        .returning(move |_, _, _, _| Ok(list.clone()));

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_insert()
        .withf(move |new| {
            new.activity_type == ActivityType::ListCreate && new.list_id == Some(list_id)
        })
        .times(1)
        .returning(|new| Ok(activity_from(&new)));

    let created = service(list_repo, MockContentRepo::new(), activity_repo)
        .create_list(user_id, "Favorites".to_string(), None, true)
        .await
        .unwrap();

    assert_eq!(created.id, list_id);
}

#[tokio::test]
async fn added_item_takes_the_next_append_position() {
    let user_id = Uuid::new_v4();
    let content_id = Uuid::new_v4();
    let list = list_fixture(Uuid::new_v4(), user_id, "Favorites", true);
    let list_id = list.id;
    let item = list_item_fixture(list_id, content_id, 3);

    let mut list_repo = MockListRepo::new();
    list_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(list.clone())));
    list_repo.expect_find_item().returning(|_, _| Ok(None));
    list_repo.expect_count_items().returning(|_| Ok(3));
    list_repo
        .expect_insert_item()
        .withf(move |_, _, position| *position == 3)
        .times(1)
        .returning(move |_, _, _| Ok(item.clone()));

    let mut content_repo = MockContentRepo::new();
    content_repo.expect_exists().returning(|_| Ok(true));

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_insert()
        .withf(move |new| {
            new.activity_type == ActivityType::ListAdd
                && new.list_id == Some(list_id)
                && new.content_id == Some(content_id)
        })
        .times(1)
        .returning(|new| Ok(activity_from(&new)));

    let added = service(list_repo, content_repo, activity_repo)
        .add_item(user_id, list_id, content_id)
        .await
        .unwrap();

    assert_eq!(added.position, 3);
}

#[tokio::test]
async fn adding_a_duplicate_item_is_a_conflict() {
    let user_id = Uuid::new_v4();
    let content_id = Uuid::new_v4();
    let list = list_fixture(Uuid::new_v4(), user_id, "Favorites", true);
    let list_id = list.id;
    let existing = list_item_fixture(list_id, content_id, 0);

    let mut list_repo = MockListRepo::new();
    list_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(list.clone())));
    list_repo
        .expect_find_item()
        .returning(move |_, _| Ok(Some(existing.clone())));

    let mut content_repo = MockContentRepo::new();
    content_repo.expect_exists().returning(|_| Ok(true));

    let result = service(list_repo, content_repo, MockActivityRepo::new())
        .add_item(user_id, list_id, content_id)
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn touching_a_foreign_list_is_forbidden() {
    let owner = Uuid::new_v4();
    let list = list_fixture(Uuid::new_v4(), owner, "Favorites", true);
    let list_id = list.id;

    let mut list_repo = MockListRepo::new();
    list_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(list.clone())));

    let result = service(list_repo, MockContentRepo::new(), MockActivityRepo::new())
        .add_item(Uuid::new_v4(), list_id, Uuid::new_v4())
        .await;

    assert!(matches!(result, Err(AppError::Forbidden(_))));
}

#[tokio::test]
async fn deleting_a_list_removes_its_feed_events() {
    let user_id = Uuid::new_v4();
    let list = list_fixture(Uuid::new_v4(), user_id, "Favorites", true);
    let list_id = list.id;

    let mut list_repo = MockListRepo::new();
    list_repo
        .expect_find_by_id()
        .returning(move |_| Ok(Some(list.clone())));
    list_repo
        .expect_delete()
        .withf(move |id| *id == list_id)
        .times(1)
        .returning(|_| Ok(true));

    let mut activity_repo = MockActivityRepo::new();
    activity_repo
        .expect_delete_for_list()
        .withf(move |id| *id == list_id)
        .times(1)
        .returning(|_| Ok(2));

    let result = service(list_repo, MockContentRepo::new(), activity_repo)
        .delete_list(user_id, list_id)
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn private_lists_are_hidden_from_other_viewers() {
    let owner = Uuid::new_v4();
    let list = list_fixture(Uuid::new_v4(), owner, "Secret", false);
    let list_id = list.id;

    let mut list_repo = MockListRepo::new();
    list_repo.expect_detail().returning(move |_| {
        Ok(Some(ListDetail {
            list: list.clone(),
            items: Vec::new(),
        }))
    });

    let svc = service(list_repo, MockContentRepo::new(), MockActivityRepo::new());

    let stranger = svc.get_list(Some(Uuid::new_v4()), list_id).await;
    assert!(matches!(stranger, Err(AppError::Forbidden(_))));

    let anonymous = svc.get_list(None, list_id).await;
    assert!(matches!(anonymous, Err(AppError::Forbidden(_))));

    let as_owner = svc.get_list(Some(owner), list_id).await;
    assert!(as_owner.is_ok());
}
