use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Item, used both as request body and response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Item {
    /// Store-assigned identifier; must be absent on create and present on update
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Cordless drill")]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 1024))]
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    #[schema(example = 79.9)]
    pub price: Option<f64>,
    /// Owning item type, if any
    #[serde(default)]
    pub item_type_id: Option<i64>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            price: None,
            item_type_id: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_item_type(mut self, item_type_id: i64) -> Self {
        self.item_type_id = Some(item_type_id);
        self
    }
}
