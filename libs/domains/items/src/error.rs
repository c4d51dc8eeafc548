use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("A new item cannot already have an ID")]
    IdExists,

    #[error("Invalid id")]
    IdNull,

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ItemError {
    /// Alert key for id violations
    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            ItemError::IdExists => Some("idexists"),
            ItemError::IdNull => Some("idnull"),
            _ => None,
        }
    }
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::IdExists | ItemError::IdNull | ItemError::Validation(_) => {
                AppError::BadRequest(err.to_string())
            }
            ItemError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
