//! Category types

use serde::{Deserialize, Serialize};

/// A grouping that employees reference through `category_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /add-category`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddCategoryRequest {
    #[serde(default)]
    pub category: Option<String>,
}
