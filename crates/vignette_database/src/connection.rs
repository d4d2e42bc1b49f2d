//! Connection pooling and migrations.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use vignette_error::{DatabaseError, DatabaseErrorKind};

/// Pooled PostgreSQL connections shared by the repositories.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Default maximum number of pooled connections.
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// Build a connection pool for `database_url`.
///
/// The pool is warmed up with one connection so a bad URL fails at startup
/// rather than on the first request.
///
/// # Errors
///
/// Returns a connection error if the pool cannot be built or the database
/// is unreachable.
pub fn establish_pool(database_url: &str, max_size: u32) -> DatabaseResult<PgPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))?;

    {
        let _conn = pool.get()?;
    }

    tracing::info!(max_size, "Database pool ready");
    Ok(pool)
}

/// Run pending migrations.
pub fn run_migrations(conn: &mut PgConnection) -> DatabaseResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;

    for version in &applied {
        tracing::info!(%version, "Applied migration");
    }
    Ok(())
}

/// Run `work` on a pooled connection on the blocking thread pool.
pub(crate) async fn with_connection<T, F>(pool: &PgPool, work: F) -> DatabaseResult<T>
where
    T: Send + 'static,
    F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || -> DatabaseResult<T> {
        let mut conn = pool.get()?;
        work(&mut *conn)
    })
    .await
    .map_err(|e| DatabaseError::new(DatabaseErrorKind::Task(e.to_string())))?
}
