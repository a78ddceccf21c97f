/// Database layer for TeamFlow
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool construction with health checks
/// - `handle`: process-wide init-once-and-reuse pool handle
/// - `migrations`: embedded sqlx migration runner
///
/// # Example
///
/// ```no_run
/// use teamflow_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: std::env::var("DATABASE_URL")?,
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod handle;
pub mod migrations;
pub mod pool;
