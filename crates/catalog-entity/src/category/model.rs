//! Category entity model.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors};

use catalog_core::define_id;
use catalog_core::traits::Entity;

define_id!(
    /// Unique identifier for a category.
    CategoryId
);

/// A category that groups catalog items.
///
/// Two categories are equal iff their IDs are equal.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct Category {
    id: CategoryId,
    #[validate(
        length(min = 1, max = 255, message = "name must be between 1 and 255 characters"),
        custom(function = "not_blank")
    )]
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

/// Data required to create a category. Omitted fields take defaults.
#[derive(Debug, Clone, Default)]
pub struct NewCategory {
    /// Explicit ID; a random one is generated when absent.
    pub id: Option<CategoryId>,
    /// Category name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Active flag, `true` when absent.
    pub is_active: Option<bool>,
    /// Creation time, now when absent.
    pub created_at: Option<DateTime<Utc>>,
}

impl NewCategory {
    /// Start a new category with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the active flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Set the creation time.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Use an explicit ID.
    pub fn id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }
}

impl Category {
    /// Build and validate a category.
    pub fn new(props: NewCategory) -> Result<Self, ValidationErrors> {
        let category = Self {
            id: props.id.unwrap_or_default(),
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(Utc::now),
        };
        category.validate()?;
        Ok(category)
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Whether the category is active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// When the category was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Return a copy with a new name and description, revalidated.
    pub fn update(
        self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Result<Self, ValidationErrors> {
        let updated = Self {
            name: name.into(),
            description,
            ..self
        };
        updated.validate()?;
        Ok(updated)
    }

    /// Return an active copy.
    pub fn activate(self) -> Self {
        Self {
            is_active: true,
            ..self
        }
    }

    /// Return an inactive copy.
    pub fn deactivate(self) -> Self {
        Self {
            is_active: false,
            ..self
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("name may not be blank")));
    }
    Ok(())
}
