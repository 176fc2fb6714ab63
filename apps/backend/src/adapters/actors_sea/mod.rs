//! SeaORM adapter for the actor store.

use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set, Unchanged,
};

use crate::entities::actors;

pub mod dto;

pub use dto::{ActorCreate, ActorUpdate};

pub async fn list_actors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<actors::Model>, sea_orm::DbErr> {
    actors::Entity::find()
        .order_by_asc(actors::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<Option<actors::Model>, sea_orm::DbErr> {
    actors::Entity::find_by_id(id).one(conn).await
}

pub async fn create_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ActorCreate,
) -> Result<actors::Model, sea_orm::DbErr> {
    let active = actors::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        age: Set(dto.age),
        gender: Set(dto.gender),
    };

    active.insert(conn).await
}

/// Returns `None` when no actor has `dto.id`.
pub async fn update_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ActorUpdate,
) -> Result<Option<actors::Model>, sea_orm::DbErr> {
    if find_by_id(conn, dto.id).await?.is_none() {
        return Ok(None);
    }

    let active = actors::ActiveModel {
        id: Unchanged(dto.id),
        name: Set(dto.name),
        age: NotSet,
        gender: Set(dto.gender),
    };

    active.update(conn).await.map(Some)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<u64, sea_orm::DbErr> {
    let result = actors::Entity::delete_by_id(id).exec(conn).await?;
    Ok(result.rows_affected)
}
