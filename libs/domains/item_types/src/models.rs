use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item type, used both as request body and response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ItemType {
    /// Store-assigned identifier; must be absent on create and present on update
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Furniture")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub description: Option<String>,
}

impl ItemType {
    /// Unsaved item type
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
