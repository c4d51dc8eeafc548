use axum::Router;
use axum::routing::get;
use core_proc_macros::ApiResource;

use crate::state::AppState;

pub mod health;
pub mod item_types;
pub mod items;

/// API routes without the `/api` prefix; `create_router` adds it.
///
/// Each sub-router already carries its own state.
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest(
            domain_item_types::entity::Model::URL,
            item_types::router(state),
        )
        .nest(domain_items::entity::Model::URL, items::router(state))
}

/// `/ready` with a real database probe, merged next to `/health`.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
