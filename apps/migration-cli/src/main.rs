use clap::Parser;
use migration::sea_orm::Database;
use migration::{migrate, MigrationCommand};

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Casting agency database migration tool")]
struct Args {
    /// Migration command to run: up | down | fresh | reset | refresh | status
    command: MigrationCommand,

    /// Database URL; falls back to DATABASE_URL
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let db = match Database::connect(&args.database_url).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect to database: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, args.command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
