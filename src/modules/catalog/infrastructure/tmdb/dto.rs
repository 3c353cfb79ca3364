use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbPagedResponse {
    pub page: i32,
    pub results: Vec<TmdbMovieSummary>,
    pub total_pages: i32,
    pub total_results: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieSummary {
    pub id: i32,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    // TMDb sends "" instead of null for unknown dates
    pub release_date: Option<String>,
    pub vote_average: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetail {
    pub id: i32,
    pub title: String,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<i32>,
    pub genres: Vec<TmdbGenre>,
    pub original_language: Option<String>,
    pub imdb_id: Option<String>,
    pub credits: Option<TmdbCredits>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCredits {
    pub cast: Vec<TmdbCastMember>,
    pub crew: Vec<TmdbCrewMember>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    pub name: String,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    pub name: String,
    pub job: Option<String>,
}
