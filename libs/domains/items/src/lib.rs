//! Items Domain
//!
//! CRUD for items. An item optionally belongs to an item type; the reference
//! is a plain id enforced by the database foreign key.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Pass-through with request logging
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres / in-memory)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← sea-orm entity, JSON model
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, ItemService, PgItemRepository};
//! use sea_orm::DatabaseConnection;
//!
//! fn build(db: DatabaseConnection) -> axum::Router {
//!     let service = ItemService::new(PgItemRepository::new(db));
//!     handlers::router(service, "labellaStoreAppItem")
//! }
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::{ApiDoc, ENTITY_NAME};
pub use models::Item;
pub use postgres::PgItemRepository;
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
