use chrono::NaiveDate;

use super::dto::{TmdbMovieDetail, TmdbMovieSummary};
use crate::modules::catalog::domain::MovieSearchResult;
use crate::modules::content::domain::{MovieDetails, NewMovie};

const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";
const CAST_LIMIT: usize = 10;

pub struct TmdbMapper;

impl TmdbMapper {
    pub fn to_search_result(summary: TmdbMovieSummary) -> MovieSearchResult {
        MovieSearchResult {
            tmdb_id: summary.id,
            title: summary.title,
            original_title: summary.original_title,
            overview: non_empty(summary.overview),
            poster_url: poster_url(summary.poster_path.as_deref()),
            release_date: parse_release_date(summary.release_date.as_deref()),
            vote_average: summary.vote_average,
        }
    }

    pub fn to_new_movie(detail: TmdbMovieDetail) -> NewMovie {
        let director = detail.credits.as_ref().and_then(|credits| {
            credits
                .crew
                .iter()
                .find(|member| member.job.as_deref() == Some("Director"))
                .map(|member| member.name.clone())
        });

        let cast_names = detail.credits.as_ref().and_then(|credits| {
            let names: Vec<&str> = credits
                .cast
                .iter()
                .take(CAST_LIMIT)
                .map(|member| member.name.as_str())
                .collect();
            if names.is_empty() {
                None
            } else {
                Some(names.join(", "))
            }
        });

        let genres = if detail.genres.is_empty() {
            None
        } else {
            Some(
                detail
                    .genres
                    .iter()
                    .map(|g| g.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        };

        NewMovie {
            title: detail.title,
            original_title: detail.original_title,
            description: non_empty(detail.overview),
            cover_image_url: poster_url(detail.poster_path.as_deref()),
            tmdb_id: detail.id,
            details: MovieDetails {
                release_date: parse_release_date(detail.release_date.as_deref()),
                runtime: detail.runtime,
                director,
                cast_names,
                genres,
                original_language: detail.original_language,
                imdb_id: non_empty(detail.imdb_id),
            },
        }
    }
}

fn poster_url(path: Option<&str>) -> Option<String> {
    path.map(|p| format!("{}{}", POSTER_BASE_URL, p))
}

fn parse_release_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
