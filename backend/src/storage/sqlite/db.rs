use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::warn;

use crate::storage::traits::{DocumentStorage, StoredDocument};

/// DbConnection manages the SQLite document store
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url)
                .await
                .with_context(|| format!("Failed to create database {}", url))?
        }

        let pool = SqlitePool::connect(url)
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                data TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStorage for DbConnection {
    async fn put_document(&self, collection: &str, id: &str, body: &Value) -> Result<()> {
        let data = serde_json::to_string(body)?;
        let now = Utc::now().to_rfc3339();

        // Upsert keeps the original rowid so list order stays insertion order
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?)
            ON CONFLICT (collection, id) DO UPDATE SET
                data = excluded.data,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(&data)
        .bind(&now)
        .bind(&now)
        .execute(&*self.pool)
        .await?;
        Ok(())
    }

    async fn get_document(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let row = sqlx::query("SELECT data FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        match row {
            Some(r) => {
                let data: String = r.get("data");
                let body = serde_json::from_str(&data)
                    .with_context(|| format!("Corrupt document {}/{}", collection, id))?;
                Ok(Some(body))
            }
            None => Ok(None),
        }
    }

    async fn list_documents(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        let rows = sqlx::query("SELECT id, data FROM documents WHERE collection = ? ORDER BY ROWID")
            .bind(collection)
            .fetch_all(&*self.pool)
            .await?;

        let mut documents = Vec::with_capacity(rows.len());
        for row in rows {
            let id: String = row.get("id");
            let data: String = row.get("data");
            match serde_json::from_str(&data) {
                Ok(body) => documents.push(StoredDocument { id, body }),
                Err(e) => warn!("Skipping unreadable document {}/{}: {}", collection, id, e),
            }
        }
        Ok(documents)
    }

    async fn delete_document(&self, collection: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
