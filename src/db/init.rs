//! Database connection bootstrap.
use crate::db::{DatabaseConnection, DatabaseKind, Db as _};
use std::env;

/// Connects to a database and applies migrations.
/// We use `SQLite` by default, but we can override this by setting the
/// `DATABASE_URL` environment variable (e.g. to a Postgres URL).
///
/// # Errors
/// Errors if connection to database fails.
/// Connections can fail if the database is not running, or if the database URL is invalid.
pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| String::from("sqlite://covergrid.sqlite3?mode=rwc"));
    let connection = DatabaseConnection::connect(&db_url).await?;
    tracing::info!("Connected to database");
    migrate(&connection).await?;
    Ok(connection)
}

/// Applies the migrations matching the connection kind.
///
/// # Errors
/// Errors if a migration cannot be applied.
pub async fn migrate(connection: &DatabaseConnection) -> anyhow::Result<()> {
    match connection.kind {
        DatabaseKind::Sqlite => {
            sqlx::migrate!("./migrations/sqlite")
                .run(&connection.pool)
                .await?;
        }
        DatabaseKind::Postgres => {
            sqlx::migrate!("./migrations/postgres")
                .run(&connection.pool)
                .await?;
        }
    }
    Ok(())
}
