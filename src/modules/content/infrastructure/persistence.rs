use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use tokio::task;
use uuid::Uuid;

use super::models::{
    BookModel, ContentModel, MovieModel, NewBookRow, NewContentRow, NewMovieRow,
};
use crate::modules::content::domain::{
    entities::{
        BookDetails, Content, ContentDetails, ContentStats, ContentSummary, MovieDetails, NewBook,
        NewMovie,
    },
    repositories::ContentRepository,
    stats::average_score,
    value_objects::ContentType,
};
use crate::schema::{books, contents, movies, ratings, reviews};
use crate::shared::database::{Database, DbConnection};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::pagination::Page;

pub struct ContentRepositoryImpl {
    db: Arc<Database>,
}

impl ContentRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn movie_details(model: MovieModel) -> MovieDetails {
        MovieDetails {
            release_date: model.release_date,
            runtime: model.runtime,
            director: model.director,
            cast_names: model.cast_names,
            genres: model.genres,
            original_language: model.original_language,
            imdb_id: model.imdb_id,
        }
    }

    fn book_details(model: BookModel) -> BookDetails {
        BookDetails {
            authors: model.authors,
            publisher: model.publisher,
            published_date: model.published_date,
            page_count: model.page_count,
            isbn_10: model.isbn_10,
            isbn_13: model.isbn_13,
            categories: model.categories,
            language: model.language,
        }
    }

    fn to_entity(model: ContentModel, details: ContentDetails) -> Content {
        Content {
            id: model.id,
            title: model.title,
            original_title: model.original_title,
            description: model.description,
            cover_image_url: model.cover_image_url,
            tmdb_id: model.tmdb_id,
            google_books_id: model.google_books_id,
            stats: ContentStats {
                average_rating: model.average_rating,
                total_ratings: model.total_ratings,
                total_reviews: model.total_reviews,
            },
            details,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }

    /// Attaches kind-specific detail rows to a page of content rows with two
    /// batched lookups instead of one join per row.
    fn assemble(conn: &mut DbConnection, models: Vec<ContentModel>) -> AppResult<Vec<Content>> {
        let movie_ids: Vec<Uuid> = models
            .iter()
            .filter(|m| m.content_type == ContentType::Movie)
            .map(|m| m.id)
            .collect();
        let book_ids: Vec<Uuid> = models
            .iter()
            .filter(|m| m.content_type == ContentType::Book)
            .map(|m| m.id)
            .collect();

        let mut movie_rows: HashMap<Uuid, MovieModel> = HashMap::new();
        if !movie_ids.is_empty() {
            for row in movies::table
                .filter(movies::content_id.eq_any(&movie_ids))
                .load::<MovieModel>(conn)?
            {
                movie_rows.insert(row.content_id, row);
            }
        }

        let mut book_rows: HashMap<Uuid, BookModel> = HashMap::new();
        if !book_ids.is_empty() {
            for row in books::table
                .filter(books::content_id.eq_any(&book_ids))
                .load::<BookModel>(conn)?
            {
                book_rows.insert(row.content_id, row);
            }
        }

        models
            .into_iter()
            .map(|model| {
                let details = match model.content_type {
                    ContentType::Movie => ContentDetails::Movie(
                        movie_rows
                            .remove(&model.id)
                            .map(Self::movie_details)
                            .unwrap_or_default(),
                    ),
                    ContentType::Book => ContentDetails::Book(
                        book_rows
                            .remove(&model.id)
                            .map(Self::book_details)
                            .unwrap_or_default(),
                    ),
                };
                Ok(Self::to_entity(model, details))
            })
            .collect()
    }

    fn load_one(
        conn: &mut DbConnection,
        model: Option<ContentModel>,
    ) -> AppResult<Option<Content>> {
        let Some(model) = model else {
            return Ok(None);
        };
        Ok(Self::assemble(conn, vec![model])?.into_iter().next())
    }
}

#[async_trait]
impl ContentRepository for ContentRepositoryImpl {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Content>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Content>> {
            let mut conn = db.get_connection()?;
            let model = contents::table
                .filter(contents::id.eq(id))
                .first::<ContentModel>(&mut conn)
                .optional()?;
            Self::load_one(&mut conn, model)
        })
        .await?
    }

    async fn find_movie_by_tmdb_id(&self, tmdb_id: i32) -> AppResult<Option<Content>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Content>> {
            let mut conn = db.get_connection()?;
            let model = contents::table
                .filter(contents::tmdb_id.eq(tmdb_id))
                .first::<ContentModel>(&mut conn)
                .optional()?;
            Self::load_one(&mut conn, model)
        })
        .await?
    }

    async fn find_book_by_google_id(&self, google_books_id: &str) -> AppResult<Option<Content>> {
        let db = Arc::clone(&self.db);
        let volume_id = google_books_id.to_string();

        task::spawn_blocking(move || -> AppResult<Option<Content>> {
            let mut conn = db.get_connection()?;
            let model = contents::table
                .filter(contents::google_books_id.eq(&volume_id))
                .first::<ContentModel>(&mut conn)
                .optional()?;
            Self::load_one(&mut conn, model)
        })
        .await?
    }

    async fn insert_movie(&self, new_movie: NewMovie) -> AppResult<Content> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Content> {
            let mut conn = db.get_connection()?;

            conn.transaction::<Content, AppError, _>(|conn| {
                let content_row = NewContentRow {
                    id: Uuid::new_v4(),
                    content_type: ContentType::Movie,
                    title: new_movie.title,
                    original_title: new_movie.original_title,
                    description: new_movie.description,
                    cover_image_url: new_movie.cover_image_url,
                    tmdb_id: Some(new_movie.tmdb_id),
                    google_books_id: None,
                };

                let model = diesel::insert_into(contents::table)
                    .values(&content_row)
                    .get_result::<ContentModel>(conn)?;

                let detail_row = NewMovieRow {
                    content_id: model.id,
                    release_date: new_movie.details.release_date,
                    runtime: new_movie.details.runtime,
                    director: new_movie.details.director,
                    cast_names: new_movie.details.cast_names,
                    genres: new_movie.details.genres,
                    original_language: new_movie.details.original_language,
                    imdb_id: new_movie.details.imdb_id,
                };

                let detail = diesel::insert_into(movies::table)
                    .values(&detail_row)
                    .get_result::<MovieModel>(conn)?;

                Ok(Self::to_entity(
                    model,
                    ContentDetails::Movie(Self::movie_details(detail)),
                ))
            })
        })
        .await?
    }

    async fn insert_book(&self, new_book: NewBook) -> AppResult<Content> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Content> {
            let mut conn = db.get_connection()?;

            conn.transaction::<Content, AppError, _>(|conn| {
                let content_row = NewContentRow {
                    id: Uuid::new_v4(),
                    content_type: ContentType::Book,
                    title: new_book.title,
                    original_title: new_book.original_title,
                    description: new_book.description,
                    cover_image_url: new_book.cover_image_url,
                    tmdb_id: None,
                    google_books_id: Some(new_book.google_books_id),
                };

                let model = diesel::insert_into(contents::table)
                    .values(&content_row)
                    .get_result::<ContentModel>(conn)?;

                let detail_row = NewBookRow {
                    content_id: model.id,
                    authors: new_book.details.authors,
                    publisher: new_book.details.publisher,
                    published_date: new_book.details.published_date,
                    page_count: new_book.details.page_count,
                    isbn_10: new_book.details.isbn_10,
                    isbn_13: new_book.details.isbn_13,
                    categories: new_book.details.categories,
                    language: new_book.details.language,
                };

                let detail = diesel::insert_into(books::table)
                    .values(&detail_row)
                    .get_result::<BookModel>(conn)?;

                Ok(Self::to_entity(
                    model,
                    ContentDetails::Book(Self::book_details(detail)),
                ))
            })
        })
        .await?
    }

    async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<bool> {
            let mut conn = db.get_connection()?;
            let count: i64 = contents::table
                .filter(contents::id.eq(id))
                .count()
                .get_result(&mut conn)?;
            Ok(count > 0)
        })
        .await?
    }

    async fn list(&self, kind: Option<ContentType>, page: Page) -> AppResult<Vec<Content>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Content>> {
            let mut conn = db.get_connection()?;

            let mut query = contents::table.into_boxed();
            if let Some(kind) = kind {
                query = query.filter(contents::content_type.eq(kind));
            }

            let models = query
                .order(contents::created_at.desc())
                .offset(page.offset())
                .limit(page.limit())
                .load::<ContentModel>(&mut conn)?;

            Self::assemble(&mut conn, models)
        })
        .await?
    }

    async fn top_rated(&self, kind: Option<ContentType>, limit: i64) -> AppResult<Vec<Content>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Content>> {
            let mut conn = db.get_connection()?;

            let mut query = contents::table
                .filter(contents::total_ratings.gt(0))
                .into_boxed();
            if let Some(kind) = kind {
                query = query.filter(contents::content_type.eq(kind));
            }

            let models = query
                .order((
                    contents::average_rating.desc(),
                    contents::total_ratings.desc(),
                ))
                .limit(limit)
                .load::<ContentModel>(&mut conn)?;

            Self::assemble(&mut conn, models)
        })
        .await?
    }

    async fn most_popular(
        &self,
        kind: Option<ContentType>,
        limit: i64,
    ) -> AppResult<Vec<Content>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Content>> {
            let mut conn = db.get_connection()?;

            let mut query = contents::table
                .filter(contents::total_reviews.gt(0))
                .into_boxed();
            if let Some(kind) = kind {
                query = query.filter(contents::content_type.eq(kind));
            }

            let models = query
                .order((
                    contents::total_reviews.desc(),
                    contents::average_rating.desc(),
                ))
                .limit(limit)
                .load::<ContentModel>(&mut conn)?;

            Self::assemble(&mut conn, models)
        })
        .await?
    }

    async fn summaries_by_ids(&self, ids: &[Uuid]) -> AppResult<HashMap<Uuid, ContentSummary>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let db = Arc::clone(&self.db);
        let ids = ids.to_vec();

        task::spawn_blocking(move || -> AppResult<HashMap<Uuid, ContentSummary>> {
            let mut conn = db.get_connection()?;

            let rows = contents::table
                .filter(contents::id.eq_any(&ids))
                .select((
                    contents::id,
                    contents::content_type,
                    contents::title,
                    contents::cover_image_url,
                ))
                .load::<(Uuid, ContentType, String, Option<String>)>(&mut conn)?;

            Ok(rows
                .into_iter()
                .map(|(id, content_type, title, cover_image_url)| {
                    (
                        id,
                        ContentSummary {
                            id,
                            content_type,
                            title,
                            cover_image_url,
                        },
                    )
                })
                .collect())
        })
        .await?
    }

    async fn refresh_stats(&self, content_id: Uuid) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            let scores: Vec<f64> = ratings::table
                .filter(ratings::content_id.eq(content_id))
                .select(ratings::score)
                .load(&mut conn)?;

            let review_count: i64 = reviews::table
                .filter(reviews::content_id.eq(content_id))
                .count()
                .get_result(&mut conn)?;

            // Zero rows updated means the content was deleted meanwhile,
            // which is not an error for a recount.
            diesel::update(contents::table.filter(contents::id.eq(content_id)))
                .set((
                    contents::average_rating.eq(average_score(&scores)),
                    contents::total_ratings.eq(scores.len() as i32),
                    contents::total_reviews.eq(review_count as i32),
                    contents::updated_at.eq(Utc::now()),
                ))
                .execute(&mut conn)?;

            Ok(())
        })
        .await?
    }
}
