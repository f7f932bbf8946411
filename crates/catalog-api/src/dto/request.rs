//! Request bodies.

use serde::{Deserialize, Serialize};

use catalog_service::category::{CreateCategoryInput, UpdateCategoryInput};

/// Create category request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    /// Category name.
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Active flag, active when omitted.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl From<CreateCategoryRequest> for CreateCategoryInput {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            is_active: req.is_active,
        }
    }
}

/// Update category request body. The ID comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    /// New name.
    pub name: String,
    /// New description; omitted or `null` clears it.
    #[serde(default)]
    pub description: Option<String>,
    /// New active flag; omitted leaves it unchanged.
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UpdateCategoryRequest {
    /// Attach the path ID to build the use case input.
    pub fn into_input(self, id: String) -> UpdateCategoryInput {
        UpdateCategoryInput {
            id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
        }
    }
}
