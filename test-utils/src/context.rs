use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

/// Distinguishes named shared-cache databases created within one test binary.
static SHARED_DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Test context containing the database connection for a single test.
///
/// Provides an in-memory SQLite database connection for isolated unit and integration
/// testing. The database is created lazily on first access and persists for the lifetime
/// of the test context.
pub struct TestContext {
    /// Optional database connection to an in-memory SQLite instance.
    ///
    /// Initialized lazily when `database()` is first called.
    pub db: Option<DatabaseConnection>,

    /// Maximum pool size. Above 1 the pool opens a named shared-cache in-memory
    /// database so every connection sees the same tables.
    pool_size: u32,
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self::with_pool_size(1)
    }

    /// Creates an empty test context whose pool may hold up to `pool_size` connections.
    ///
    /// Concurrent tests need more than one connection; with a single connection an
    /// open transaction serialises every other caller on its own.
    pub fn with_pool_size(pool_size: u32) -> Self {
        Self {
            db: None,
            pool_size: pool_size.max(1),
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = if self.pool_size == 1 {
                    Database::connect("sqlite::memory:").await?
                } else {
                    let id = SHARED_DB_COUNTER.fetch_add(1, Ordering::Relaxed);
                    let mut options = ConnectOptions::new(format!(
                        "sqlite:file:test-db-{}?mode=memory&cache=shared",
                        id
                    ));
                    // The database lives only while a connection stays open
                    options
                        .max_connections(self.pool_size)
                        .min_connections(1)
                        .sqlx_logging(false);
                    Database::connect(options).await?
                };

                let db_ref = self.db.insert(db);

                Ok(&*db_ref) // Re-borrow as immutable
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Executes each statement in sequence. Typically called internally by
    /// `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
