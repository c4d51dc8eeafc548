use axum::Router;
use domain_item_types::{ItemTypeService, PgItemTypeRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgItemTypeRepository::new(state.db.clone());
    let service = ItemTypeService::new(repository);
    handlers::router(service, state.config.application.name.clone())
}
