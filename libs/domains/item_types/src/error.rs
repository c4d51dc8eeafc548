use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

/// ItemType domain errors
#[derive(Debug, Error)]
pub enum ItemTypeError {
    #[error("A new itemType cannot already have an ID")]
    IdExists,

    #[error("Invalid id")]
    IdNull,

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl ItemTypeError {
    /// Key reported as `error.{key}` in the alert header, for id violations only
    pub fn error_key(&self) -> Option<&'static str> {
        match self {
            ItemTypeError::IdExists => Some("idexists"),
            ItemTypeError::IdNull => Some("idnull"),
            ItemTypeError::Database(_) => None,
        }
    }
}

pub type ItemTypeResult<T> = Result<T, ItemTypeError>;

impl From<ItemTypeError> for AppError {
    fn from(err: ItemTypeError) -> Self {
        match err {
            ItemTypeError::IdExists | ItemTypeError::IdNull => AppError::BadRequest(err.to_string()),
            ItemTypeError::Database(e) => AppError::Database(e),
        }
    }
}

impl IntoResponse for ItemTypeError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
