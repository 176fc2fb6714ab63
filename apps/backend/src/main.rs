use actix_web::{web, App, HttpServer};
use agency::config::auth::security_from_env;
use agency::config::db::DbProfile;
use agency::config::server::ServerConfig;
use agency::infra::state::build_state;
use agency::middleware::{cors_middleware, AccessControlHeaders, RequestTrace, StructuredLogger};
use agency::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or sourced manually for local runs).
    let server = ServerConfig::from_env().unwrap_or_else(|e| exit_with("server config", &e));
    let security = security_from_env().unwrap_or_else(|e| exit_with("auth config", &e));

    let app_state = build_state(security)
        .with_db(DbProfile::Prod)
        .build()
        .await
        .unwrap_or_else(|e| exit_with("application state", &e));

    info!(
        host = %server.host,
        port = server.port,
        jwks = %app_state.security.jwks_url(),
        "Starting casting agency API"
    );

    let data = web::Data::new(app_state);
    let cors_origins = server.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .wrap(AccessControlHeaders)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::to(routes::not_found))
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}

fn exit_with(stage: &str, err: &agency::AppError) -> ! {
    error!(stage, error = %err, "Startup failed");
    eprintln!("Failed to initialize {stage}: {err}");
    std::process::exit(1);
}
