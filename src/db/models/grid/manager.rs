//! Manager for the grid model.
use crate::db::DatabaseConnection;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::Row as _;

use super::{Grid, Slot};

#[async_trait]
impl super::Manager for DatabaseConnection {
    /// Insert a new grid into the database.
    ///
    /// Saves always insert; grids are never updated in place. The creation
    /// timestamp is set here, once.
    ///
    /// # Errors
    /// Errors if the grid cannot be inserted into the database.
    async fn create(
        &self,
        user_id: &str,
        name: Option<&str>,
        manga: &[Slot],
    ) -> anyhow::Result<Option<i64>> {
        let manga_json = serde_json::to_string(manga)?;
        let created_at = Utc::now().to_rfc3339();
        // The Any driver does not surface last_insert_id on either backend,
        // so both go through RETURNING (SQLite has supported it since 3.35).
        let statement = "
            INSERT INTO grid ( user_id, name, manga, created_at )
            VALUES ( $1, $2, $3, $4 )
            RETURNING id
        ";
        let mut connection = self.pool.acquire().await?;
        let row = sqlx::query(statement)
            .bind(user_id)
            .bind(name)
            .bind(manga_json)
            .bind(created_at)
            .fetch_one(&mut *connection)
            .await?;
        Ok(Some(row.try_get("id")?))
    }

    /// Find all grids belonging to one owner.
    ///
    /// `created_at` is RFC 3339 text, so the lexicographic descending order
    /// is newest first. Ties fall back to the id.
    ///
    /// # Errors
    /// Errors if can't establish a connection to the database.
    async fn find_all_by_user(&self, user_id: &str) -> anyhow::Result<Vec<Grid>> {
        let statement = "
            SELECT *
            FROM grid
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
        ";
        let mut connection = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, Grid>(statement)
            .bind(user_id)
            .fetch_all(&mut *connection)
            .await?;
        Ok(rows)
    }
}
