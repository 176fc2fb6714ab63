//! Movie repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::movies_sea as movies_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Movie domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    #[serde(with = "time::serde::rfc3339")]
    pub release: OffsetDateTime,
}

fn movie_not_found(id: i32) -> DomainError {
    DomainError::not_found(NotFoundKind::Movie, format!("Movie {id} not found"))
}

/// All movies ordered by id. An empty store yields an empty vec.
pub async fn list_movies<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Movie>, DomainError> {
    let rows = movies_adapter::list_movies(conn).await?;
    Ok(rows.into_iter().map(Movie::from).collect())
}

pub async fn create_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    release: OffsetDateTime,
) -> Result<Movie, DomainError> {
    let dto = movies_adapter::MovieCreate::new(title, release);
    let movie = movies_adapter::create_movie(conn, dto).await?;
    Ok(Movie::from(movie))
}

pub async fn update_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    title: &str,
    release: OffsetDateTime,
) -> Result<Movie, DomainError> {
    let dto = movies_adapter::MovieUpdate {
        id,
        title: title.to_string(),
        release,
    };
    movies_adapter::update_movie(conn, dto)
        .await?
        .map(Movie::from)
        .ok_or_else(|| movie_not_found(id))
}

/// Delete by id, returning the id that was removed.
pub async fn delete_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<i32, DomainError> {
    match movies_adapter::delete_movie(conn, id).await? {
        0 => Err(movie_not_found(id)),
        _ => Ok(id),
    }
}

impl From<crate::entities::movies::Model> for Movie {
    fn from(model: crate::entities::movies::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            release: model.release,
        }
    }
}
