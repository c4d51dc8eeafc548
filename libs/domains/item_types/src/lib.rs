//! ItemTypes Domain
//!
//! CRUD for item types, the categories items are filed under.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← REST endpoints, alert headers
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
//! use domain_item_types::{handlers, InMemoryItemTypeRepository, ItemTypeService};
//!
//! let service = ItemTypeService::new(InMemoryItemTypeRepository::new());
//! let router = handlers::router(service, "labellaStoreAppItem");
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ItemTypeError, ItemTypeResult};
pub use handlers::{ApiDoc, ENTITY_NAME};
pub use models::ItemType;
pub use postgres::PgItemTypeRepository;
pub use repository::{InMemoryItemTypeRepository, ItemTypeRepository};
pub use service::ItemTypeService;
