use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use super::required;
use crate::auth::scope;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{Authorized, RecordId, ValidatedJson};
use crate::repos::movies::{self, Movie};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub success: bool,
    pub movies: Vec<Movie>,
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub success: bool,
    pub movie: Movie,
}

#[derive(Debug, Serialize)]
pub struct MovieDeletedResponse {
    pub success: bool,
    pub movie_id: i32,
}

/// Body for create and update. `release` is an RFC 3339 timestamp.
#[derive(Debug, Deserialize)]
pub struct MovieRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub release: Option<OffsetDateTime>,
}

impl MovieRequest {
    fn into_fields(self) -> Result<(String, OffsetDateTime), AppError> {
        Ok((
            required(self.title, "title")?,
            required(self.release, "release")?,
        ))
    }
}

async fn list_movies(
    _auth: Authorized<scope::GetMovies>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let movies = with_txn(&app_state, |txn| {
        Box::pin(async move { movies::list_movies(txn).await.map_err(AppError::from) })
    })
    .await?;

    if movies.is_empty() {
        return Err(AppError::not_found(ErrorCode::NoMovies, "No movies stored"));
    }

    Ok(HttpResponse::Ok().json(MoviesResponse {
        success: true,
        movies,
    }))
}

async fn create_movie(
    auth: Authorized<scope::PostMovie>,
    app_state: web::Data<AppState>,
    body: Result<ValidatedJson<MovieRequest>, AppError>,
) -> Result<HttpResponse, AppError> {
    let (title, release) = body?.into_inner().into_fields()?;

    let movie = with_txn(&app_state, |txn| {
        Box::pin(async move {
            movies::create_movie(txn, &title, release)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    info!(movie_id = movie.id, sub = ?auth.claims().sub, "Movie created");
    Ok(HttpResponse::Ok().json(MovieResponse {
        success: true,
        movie,
    }))
}

async fn update_movie(
    auth: Authorized<scope::PatchMovie>,
    app_state: web::Data<AppState>,
    path: Result<RecordId, AppError>,
    body: Result<ValidatedJson<MovieRequest>, AppError>,
) -> Result<HttpResponse, AppError> {
    let id = path?.get();
    let (title, release) = body?.into_inner().into_fields()?;

    let movie = with_txn(&app_state, |txn| {
        Box::pin(async move {
            movies::update_movie(txn, id, &title, release)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    info!(movie_id = id, sub = ?auth.claims().sub, "Movie updated");
    Ok(HttpResponse::Ok().json(MovieResponse {
        success: true,
        movie,
    }))
}

async fn delete_movie(
    auth: Authorized<scope::DeleteMovie>,
    app_state: web::Data<AppState>,
    path: Result<RecordId, AppError>,
) -> Result<HttpResponse, AppError> {
    let id = path?.get();

    let movie_id = with_txn(&app_state, |txn| {
        Box::pin(async move { movies::delete_movie(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    info!(movie_id, sub = ?auth.claims().sub, "Movie deleted");
    Ok(HttpResponse::Ok().json(MovieDeletedResponse {
        success: true,
        movie_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_movies))
            .route(web::post().to(create_movie)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_movie))
            .route(web::delete().to(delete_movie)),
    );
}
