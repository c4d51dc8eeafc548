//! PostgreSQL plumbing shared by the domain crates.
//!
//! - [`postgres`]: connection pool configuration, connect (with retry), migrations, health checks
//! - [`repository`]: [`BaseRepository`], the generic sea-orm CRUD layer the domain repositories wrap
//! - [`common`]: [`DatabaseError`] and the retry helpers
//!
//! ```ignore
//! use database::postgres::{self, PostgresConfig};
//! use migration::Migrator;
//!
//! let db = postgres::connect_from_config_with_retry(PostgresConfig::from_env()?, None).await?;
//! postgres::run_migrations::<Migrator>(&db, "store_api").await?;
//! ```

pub mod common;
pub mod postgres;
pub mod repository;

pub use common::DatabaseError;
pub use repository::BaseRepository;
