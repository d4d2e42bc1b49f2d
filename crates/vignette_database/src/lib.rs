//! PostgreSQL persistence for Vignette.
//!
//! This crate provides the Diesel schema, row models and repository
//! implementations backing the workflow engine's storage seams.
//!
//! # Features
//!
//! - Connection pooling with r2d2
//! - Embedded migrations, applied at startup
//! - [`PostgresProjectRepository`]: projects with parts embedded as JSONB
//! - [`PostgresConversationStore`]: append-only conversation turns
//!
//! Blocking Diesel calls run on Tokio's blocking thread pool.
//!
//! # Example
//!
//! ```rust,ignore
//! use vignette_database::{establish_pool, run_migrations, PostgresProjectRepository, DEFAULT_POOL_SIZE};
//!
//! let pool = establish_pool(&database_url, DEFAULT_POOL_SIZE)?;
//! run_migrations(&mut pool.get()?)?;
//! let repo = PostgresProjectRepository::new(pool.clone());
//! ```

#![forbid(unsafe_code)]

mod connection;
mod conversation_store;
mod conversions;
mod models;
mod project_repository;

pub mod schema;

pub use connection::{DEFAULT_POOL_SIZE, PgPool, establish_pool, run_migrations};
pub use conversation_store::PostgresConversationStore;
pub use models::{MessageRow, NewMessageRow, NewProjectRow, ProjectChangeset, ProjectRow};
pub use project_repository::PostgresProjectRepository;

use vignette_error::DatabaseError;

/// Result type for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;
