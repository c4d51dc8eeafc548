use core_proc_macros::ApiResource;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Labella Store Item API",
        version = "0.1.0",
        description = "CRUD API for items and item types"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_item_types::entity::Model::URL, api = domain_item_types::ApiDoc),
        (path = domain_items::entity::Model::URL, api = domain_items::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_both_resources() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        assert!(paths.contains(&"/item-types"));
        assert!(paths.contains(&"/item-types/{id}"));
        assert!(paths.contains(&"/items"));
        assert!(paths.contains(&"/items/{id}"));
    }
}
