//! SeaORM adapter for the movie store.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set, Unchanged,
};

use crate::entities::movies;

pub mod dto;

pub use dto::{MovieCreate, MovieUpdate};

pub async fn list_movies<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<movies::Model>, sea_orm::DbErr> {
    movies::Entity::find()
        .order_by_asc(movies::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<movies::Model>, sea_orm::DbErr> {
    movies::Entity::find_by_id(id).one(conn).await
}

pub async fn create_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MovieCreate,
) -> Result<movies::Model, sea_orm::DbErr> {
    let active = movies::ActiveModel {
        id: NotSet,
        title: Set(dto.title),
        release: Set(dto.release),
    };

    active.insert(conn).await
}

/// Returns `None` when no movie has `dto.id`.
pub async fn update_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MovieUpdate,
) -> Result<Option<movies::Model>, sea_orm::DbErr> {
    if find_by_id(conn, dto.id).await?.is_none() {
        return Ok(None);
    }

    let active = movies::ActiveModel {
        id: Unchanged(dto.id),
        title: Set(dto.title),
        release: Set(dto.release),
    };

    active.update(conn).await.map(Some)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_movie<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = movies::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
