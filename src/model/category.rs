use serde::{Deserialize, Serialize};

resource_id!(
    /// Type-safe identifier for Categories.
    CategoryId,
    "pcat"
);

/// Represents a product category in the catalog.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](resource_actor::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// See [`impl ActorEntity for Category`](#impl-ActorEntity-for-Category) for details on:
/// - Creation parameters ([`CategoryCreate`])
/// - List filtering ([`CategoryFilter`])
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub handle: String,
    pub description: String,
    pub is_active: bool,
}

/// Payload for creating a new category. The handle is derived from the name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Selects categories by exact name.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub name: Option<String>,
}

impl CategoryFilter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}
