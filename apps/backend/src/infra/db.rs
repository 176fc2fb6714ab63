use std::future::Future;
use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{database_url, DbProfile};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_INTERVAL_MS: u64 = 500;

/// Hide the password in a connection URL before it reaches the logs.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    match rest.split_once('@') {
        Some((userinfo, host)) => {
            let user = userinfo.split(':').next().unwrap_or_default();
            format!("{scheme}://{user}:***@{host}")
        }
        None => url.to_string(),
    }
}

fn connect_options(url: &str) -> ConnectOptions {
    let mut opts = ConnectOptions::new(url.to_string());
    opts.acquire_timeout(Duration::from_secs(5))
        .connect_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    // Every pooled connection to `sqlite::memory:` would be its own database.
    if url.starts_with("sqlite::memory:") || url.contains("mode=memory") {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(16);
    }
    opts
}

/// Retry a connection attempt with fixed interval delays
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, "Database connection succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if attempt < max_attempts => {
                warn!(attempt, max_attempts, error = %e, "Database connection failed; retrying");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Connect to an explicit URL. Does not run migrations.
pub async fn connect_url(url: &str) -> Result<DatabaseConnection, AppError> {
    let started = Instant::now();
    let conn = retry_connection(
        || async { Database::connect(connect_options(url)).await.map_err(AppError::from) },
        CONNECT_ATTEMPTS,
        CONNECT_INTERVAL_MS,
    )
    .await?;

    info!(
        url = %sanitize_db_url(url),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Database connected"
    );
    Ok(conn)
}

/// Connect using `DATABASE_URL` checked against `profile`. Does not run migrations.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = database_url(profile)?;
    connect_url(&url).await
}

/// Apply all pending migrations.
pub async fn migrate_up(conn: &DatabaseConnection) -> Result<(), AppError> {
    migrate(conn, MigrationCommand::Up).await?;
    Ok(())
}

/// Single entrypoint used by the server and tests: connect, then migrate.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;
    migrate_up(&conn).await?;
    Ok(conn)
}
