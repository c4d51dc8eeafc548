use axum::Router;
use domain_items::{ItemService, PgItemRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);
    handlers::router(service, state.config.application.name.clone())
}
