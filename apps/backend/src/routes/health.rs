use actix_web::{web, HttpResponse};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use tracing::warn;

use crate::db::require_db;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    db: &'static str,
}

async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let db = match require_db(&app_state) {
        Ok(conn) => {
            let probe = Statement::from_string(conn.get_database_backend(), "SELECT 1");
            match conn.execute(probe).await {
                Ok(_) => "ok",
                Err(e) => {
                    warn!(error = %e, "Health probe query failed");
                    "error"
                }
            }
        }
        Err(_) => "error",
    };

    HttpResponse::Ok().json(HealthResponse { status: "ok", db })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(health));
}
