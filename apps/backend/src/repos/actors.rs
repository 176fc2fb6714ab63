//! Actor repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::actors_sea as actors_adapter;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Actor domain model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Actor {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

fn actor_not_found(id: i32) -> DomainError {
    DomainError::not_found(NotFoundKind::Actor, format!("Actor {id} not found"))
}

/// All actors ordered by id. An empty store yields an empty vec.
pub async fn list_actors<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Actor>, DomainError> {
    let rows = actors_adapter::list_actors(conn).await?;
    Ok(rows.into_iter().map(Actor::from).collect())
}

pub async fn create_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    age: i32,
    gender: &str,
) -> Result<Actor, DomainError> {
    let dto = actors_adapter::ActorCreate::new(name, age, gender);
    let actor = actors_adapter::create_actor(conn, dto).await?;
    Ok(Actor::from(actor))
}

/// Replace the actor's name and gender. Age is left as stored.
pub async fn update_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
    name: &str,
    gender: &str,
) -> Result<Actor, DomainError> {
    let dto = actors_adapter::ActorUpdate {
        id,
        name: name.to_string(),
        gender: gender.to_string(),
    };
    actors_adapter::update_actor(conn, dto)
        .await?
        .map(Actor::from)
        .ok_or_else(|| actor_not_found(id))
}

/// Delete by id, returning the id that was removed.
pub async fn delete_actor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: i32,
) -> Result<i32, DomainError> {
    match actors_adapter::delete_actor(conn, id).await? {
        0 => Err(actor_not_found(id)),
        _ => Ok(id),
    }
}

impl From<crate::entities::actors::Model> for Actor {
    fn from(model: crate::entities::actors::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            gender: model.gender,
        }
    }
}
