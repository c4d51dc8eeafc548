#[cfg(feature = "sea_orm_resource")]
pub use sea_orm_resource::SeaOrmResource;

/// REST resource metadata for a persisted entity.
///
/// Usually derived with `SeaOrmResource`, which reads the sea-orm `table_name`.
///
/// ```ignore
/// use core_proc_macros::{ApiResource, SeaOrmResource};
///
/// #[derive(DeriveEntityModel, SeaOrmResource)]
/// #[sea_orm(table_name = "item_types")]
/// pub struct Model { /* ... */ }
///
/// assert_eq!(Model::URL, "/item-types");
/// ```
pub trait ApiResource {
    /// Base path of the resource relative to `/api` (e.g. "/item-types")
    const URL: &'static str;
    /// OpenAPI tag (e.g. "Item Types")
    const TAG: &'static str;
}
