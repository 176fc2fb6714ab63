use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::required;
use crate::auth::scope;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{Authorized, RecordId, ValidatedJson};
use crate::repos::actors::{self, Actor};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct ActorsResponse {
    pub success: bool,
    pub actors: Vec<Actor>,
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub success: bool,
    pub actor: Actor,
}

#[derive(Debug, Serialize)]
pub struct ActorDeletedResponse {
    pub success: bool,
    pub actor_id: i32,
}

/// Body for create and update. Every field is required; presence is checked
/// after authorization.
#[derive(Debug, Deserialize)]
pub struct ActorRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub gender: Option<String>,
}

struct ActorFields {
    name: String,
    age: i32,
    gender: String,
}

impl ActorRequest {
    fn into_fields(self) -> Result<ActorFields, AppError> {
        Ok(ActorFields {
            name: required(self.name, "name")?,
            age: required(self.age, "age")?,
            gender: required(self.gender, "gender")?,
        })
    }
}

async fn list_actors(
    _auth: Authorized<scope::GetActors>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let actors = with_txn(&app_state, |txn| {
        Box::pin(async move { actors::list_actors(txn).await.map_err(AppError::from) })
    })
    .await?;

    if actors.is_empty() {
        return Err(AppError::not_found(ErrorCode::NoActors, "No actors stored"));
    }

    Ok(HttpResponse::Ok().json(ActorsResponse {
        success: true,
        actors,
    }))
}

async fn create_actor(
    auth: Authorized<scope::PostActor>,
    app_state: web::Data<AppState>,
    body: Result<ValidatedJson<ActorRequest>, AppError>,
) -> Result<HttpResponse, AppError> {
    let fields = body?.into_inner().into_fields()?;

    let actor = with_txn(&app_state, |txn| {
        Box::pin(async move {
            actors::create_actor(txn, &fields.name, fields.age, &fields.gender)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    info!(actor_id = actor.id, sub = ?auth.claims().sub, "Actor created");
    Ok(HttpResponse::Ok().json(ActorResponse {
        success: true,
        actor,
    }))
}

async fn update_actor(
    auth: Authorized<scope::PatchActor>,
    app_state: web::Data<AppState>,
    path: Result<RecordId, AppError>,
    body: Result<ValidatedJson<ActorRequest>, AppError>,
) -> Result<HttpResponse, AppError> {
    let id = path?.get();
    // Age must be supplied but is not changed by an update.
    let fields = body?.into_inner().into_fields()?;

    let actor = with_txn(&app_state, |txn| {
        Box::pin(async move {
            actors::update_actor(txn, id, &fields.name, &fields.gender)
                .await
                .map_err(AppError::from)
        })
    })
    .await?;

    info!(actor_id = id, sub = ?auth.claims().sub, "Actor updated");
    Ok(HttpResponse::Ok().json(ActorResponse {
        success: true,
        actor,
    }))
}

async fn delete_actor(
    auth: Authorized<scope::DeleteActor>,
    app_state: web::Data<AppState>,
    path: Result<RecordId, AppError>,
) -> Result<HttpResponse, AppError> {
    let id = path?.get();

    let actor_id = with_txn(&app_state, |txn| {
        Box::pin(async move { actors::delete_actor(txn, id).await.map_err(AppError::from) })
    })
    .await?;

    info!(actor_id, sub = ?auth.claims().sub, "Actor deleted");
    Ok(HttpResponse::Ok().json(ActorDeletedResponse {
        success: true,
        actor_id,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_actors))
            .route(web::post().to(create_actor)),
    )
    .service(
        web::resource("/{id}")
            .route(web::patch().to(update_actor))
            .route(web::delete().to(delete_actor)),
    );
}
