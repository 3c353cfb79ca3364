use std::collections::HashSet;
use std::sync::Arc;

use uuid::Uuid;

use super::super::domain::{
    entities::{Activity, FeedItem},
    repositories::{ActivityLikeRepository, ActivityRepository},
};
use crate::modules::content::domain::repositories::ContentRepository;
use crate::modules::lists::domain::repositories::ListRepository;
use crate::modules::ratings::domain::repositories::{RatingRepository, ReviewRepository};
use crate::modules::users::domain::repositories::{FollowRepository, UserRepository};
use crate::shared::errors::AppResult;
use crate::shared::pagination::Page;

/// Assembles feed pages: selects the raw activities, then resolves their
/// weak references in batches. References that no longer resolve are
/// rendered as absent rather than dropping the whole item.
pub struct FeedService {
    activity_repo: Arc<dyn ActivityRepository>,
    like_repo: Arc<dyn ActivityLikeRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    user_repo: Arc<dyn UserRepository>,
    content_repo: Arc<dyn ContentRepository>,
    rating_repo: Arc<dyn RatingRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    list_repo: Arc<dyn ListRepository>,
}

impl FeedService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        activity_repo: Arc<dyn ActivityRepository>,
        like_repo: Arc<dyn ActivityLikeRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        user_repo: Arc<dyn UserRepository>,
        content_repo: Arc<dyn ContentRepository>,
        rating_repo: Arc<dyn RatingRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        list_repo: Arc<dyn ListRepository>,
    ) -> Self {
        Self {
            activity_repo,
            like_repo,
            follow_repo,
            user_repo,
            content_repo,
            rating_repo,
            review_repo,
            list_repo,
        }
    }

    /// Activities from the people the viewer follows, newest first.
    pub async fn personal_feed(&self, viewer: Uuid, page: Page) -> AppResult<Vec<FeedItem>> {
        let followed = self.follow_repo.followed_ids(viewer).await?;
        if followed.is_empty() {
            return Ok(Vec::new());
        }

        let activities = self.activity_repo.page_for_authors(&followed, page).await?;
        self.enrich(Some(viewer), activities).await
    }

    /// Everyone's activities. Anonymous viewers get `is_liked_by_viewer`
    /// as false throughout.
    pub async fn global_feed(
        &self,
        viewer: Option<Uuid>,
        page: Page,
    ) -> AppResult<Vec<FeedItem>> {
        let activities = self.activity_repo.page_all(page).await?;
        self.enrich(viewer, activities).await
    }

    /// One user's own activity trail.
    pub async fn user_feed(
        &self,
        viewer: Option<Uuid>,
        author_id: Uuid,
        page: Page,
    ) -> AppResult<Vec<FeedItem>> {
        let activities = self.activity_repo.page_for_author(author_id, page).await?;
        self.enrich(viewer, activities).await
    }

    async fn enrich(
        &self,
        viewer: Option<Uuid>,
        activities: Vec<Activity>,
    ) -> AppResult<Vec<FeedItem>> {
        if activities.is_empty() {
            return Ok(Vec::new());
        }

        let activity_ids: Vec<Uuid> = activities.iter().map(|a| a.id).collect();
        let author_ids: Vec<Uuid> = dedup(activities.iter().map(|a| a.user_id));
        let content_ids: Vec<Uuid> = dedup(activities.iter().filter_map(|a| a.content_id));
        let rating_ids: Vec<Uuid> = dedup(activities.iter().filter_map(|a| a.rating_id));
        let review_ids: Vec<Uuid> = dedup(activities.iter().filter_map(|a| a.review_id));
        let list_ids: Vec<Uuid> = dedup(activities.iter().filter_map(|a| a.list_id));

        let authors = self.user_repo.summaries_by_ids(&author_ids).await?;
        let contents = self.content_repo.summaries_by_ids(&content_ids).await?;
        let ratings = self.rating_repo.find_by_ids(&rating_ids).await?;
        let reviews = self.review_repo.find_by_ids(&review_ids).await?;
        let lists = self.list_repo.summaries_by_ids(&list_ids).await?;
        let like_counts = self.like_repo.counts_by_activity(&activity_ids).await?;
        let liked = match viewer {
            Some(viewer) => self.like_repo.liked_by(viewer, &activity_ids).await?,
            None => HashSet::new(),
        };

        let items = activities
            .into_iter()
            .filter_map(|activity| {
                let author = authors.get(&activity.user_id)?.clone();

                let rating = activity.rating_id.and_then(|id| ratings.get(&id));
                let review = activity.review_id.and_then(|id| reviews.get(&id));

                Some(FeedItem {
                    id: activity.id,
                    activity_type: activity.activity_type,
                    author,
                    content: activity
                        .content_id
                        .and_then(|id| contents.get(&id).cloned()),
                    rating_score: rating.map(|r| r.score),
                    review_text: review.map(|r| r.text.clone()),
                    review_likes_count: review.map(|r| r.likes_count),
                    list: activity.list_id.and_then(|id| lists.get(&id).cloned()),
                    extra: activity.extra,
                    likes_count: like_counts.get(&activity.id).copied().unwrap_or(0),
                    is_liked_by_viewer: liked.contains(&activity.id),
                    created_at: activity.created_at,
                })
            })
            .collect();

        Ok(items)
    }
}

fn dedup(ids: impl Iterator<Item = Uuid>) -> Vec<Uuid> {
    let mut seen = HashSet::new();
    ids.filter(|id| seen.insert(*id)).collect()
}
