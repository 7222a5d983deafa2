use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Sqlite;
use tracing::info;

use crate::storage::traits::{Connection, StorageTransaction};

// The database URL for the production database
pub const DATABASE_URL: &str = "sqlite:gradebook.db";

/// DbConnection manages the SQLite pool
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection, creating the database file if needed
    pub async fn new(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        Self::setup_schema(&pool).await?;

        info!("Connected to database at {}", url);
        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a private in-memory database.
    ///
    /// The pool holds exactly one connection that never expires, since an
    /// in-memory database disappears with its last connection.
    pub async fn init_in_memory() -> Result<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                firstname TEXT NOT NULL,
                lastname TEXT NOT NULL,
                birthdate TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS grades (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                value INTEGER NOT NULL CHECK (value BETWEEN 0 AND 20),
                subject TEXT NOT NULL,
                student_id INTEGER NOT NULL,
                FOREIGN KEY (student_id) REFERENCES students (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        // Grades are always looked up by student
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_grades_student_id
            ON grades(student_id);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl Connection for DbConnection {
    type Transaction = SqliteTransaction;

    async fn begin(&self) -> Result<SqliteTransaction> {
        let tx = self.pool.begin().await?;
        Ok(SqliteTransaction { tx })
    }
}

/// An open SQLite transaction. Repositories run their queries through it.
pub struct SqliteTransaction {
    pub(crate) tx: sqlx::Transaction<'static, Sqlite>,
}

#[async_trait]
impl StorageTransaction for SqliteTransaction {
    async fn commit(self) -> Result<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::Row;

    #[tokio::test]
    async fn test_schema_is_created() {
        let db = DbConnection::init_in_memory().await.expect("Failed to create test database");

        let rows = sqlx::query("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .fetch_all(db.pool())
            .await
            .expect("Failed to list tables");
        let tables: Vec<String> = rows.iter().map(|r| r.get("name")).collect();

        assert!(tables.contains(&"students".to_string()));
        assert!(tables.contains(&"grades".to_string()));
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let first = DbConnection::init_in_memory().await.unwrap();
        let second = DbConnection::init_in_memory().await.unwrap();

        sqlx::query("INSERT INTO students (firstname, lastname, birthdate) VALUES ('A', 'B', '1990-01-01')")
            .execute(first.pool())
            .await
            .unwrap();

        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM students")
            .fetch_one(second.pool())
            .await
            .unwrap()
            .get("n");
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_uncommitted_transaction_rolls_back() {
        let db = DbConnection::init_in_memory().await.unwrap();

        {
            let mut tx = db.begin().await.unwrap();
            sqlx::query("INSERT INTO students (firstname, lastname, birthdate) VALUES ('A', 'B', '1990-01-01')")
                .execute(&mut *tx.tx)
                .await
                .unwrap();
        }

        let count: i64 = sqlx::query("SELECT COUNT(*) AS n FROM students")
            .fetch_one(db.pool())
            .await
            .unwrap()
            .get("n");
        assert_eq!(count, 0);
    }
}
