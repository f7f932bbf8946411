//! Category output DTO.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::traits::Entity;
use catalog_entity::category::{Category, CategoryId};

/// Category as returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOutput {
    /// Category ID.
    pub id: CategoryId,
    /// Name.
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Active flag.
    pub is_active: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

impl From<&Category> for CategoryOutput {
    fn from(category: &Category) -> Self {
        Self {
            id: *category.id(),
            name: category.name().to_string(),
            description: category.description().map(str::to_string),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self::from(&category)
    }
}
