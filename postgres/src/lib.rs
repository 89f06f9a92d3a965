//! `PostgreSQL` data store for the event hotels API.
//!
//! [`PostgresHotelStore`] implements both the core's `HotelStore` and the
//! auth crate's `SessionStore` over one connection pool. Queries are checked
//! at runtime (`sqlx::query_as` with `FromRow` rows), so building the crate
//! does not need a live `DATABASE_URL`.
//!
//! # Example
//!
//! ```ignore
//! use hotels_postgres::PostgresHotelStore;
//! use sqlx::PgPool;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = PgPool::connect("postgres://localhost/hotels").await?;
//!     let store = PostgresHotelStore::new(pool);
//!     store.migrate().await?;
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod hotels;
mod rows;
mod sessions;

use sqlx::PgPool;

/// `PostgreSQL`-backed store.
///
/// Cloning is cheap: the pool is reference counted.
#[derive(Clone)]
pub struct PostgresHotelStore {
    pool: PgPool,
}

impl PostgresHotelStore {
    /// Create a store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Access the underlying connection pool.
    ///
    /// Useful for health checks or manual queries.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run the embedded database migrations.
    ///
    /// # Errors
    ///
    /// Returns error if a migration fails.
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations applied");
        Ok(())
    }

    /// Check that the database answers.
    ///
    /// # Errors
    ///
    /// Returns error if the probe query fails.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
