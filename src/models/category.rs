//! Category model and category references
//!
//! Records point at their category in two shapes: transactions usually
//! carry the bare id, budgets carry the inlined `{id, name}` object. Both
//! are read into [`CategoryRef`] and always compared by id.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::{deserialize_transaction_type, TransactionType};

/// Label used when a record has no usable category name
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// A user category as returned by the categories endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name
    pub name: String,

    /// Which kind of transaction this category classifies
    #[serde(default, deserialize_with = "deserialize_transaction_type")]
    pub transaction_type: TransactionType,
}

impl Category {
    /// Create a new category
    pub fn new(id: CategoryId, name: impl Into<String>, transaction_type: TransactionType) -> Self {
        Self {
            id,
            name: name.into(),
            transaction_type,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Reference from a record to its category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    /// Bare identifier
    ById(CategoryId),

    /// Inlined category object
    Inline {
        id: CategoryId,
        #[serde(default)]
        name: Option<String>,
    },
}

impl CategoryRef {
    /// The referenced category's id
    pub fn id(&self) -> CategoryId {
        match self {
            Self::ById(id) => *id,
            Self::Inline { id, .. } => *id,
        }
    }

    /// The inlined name, when present and non-empty
    pub fn inline_name(&self) -> Option<&str> {
        match self {
            Self::ById(_) => None,
            Self::Inline { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
        }
    }
}

impl From<CategoryId> for CategoryRef {
    fn from(id: CategoryId) -> Self {
        Self::ById(id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryRef {
    Known(CategoryRef),
    Other(IgnoredAny),
}

/// Serde adapter for category fields; malformed references become `None`
pub fn deserialize_category_ref<'de, D>(deserializer: D) -> Result<Option<CategoryRef>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawCategoryRef::deserialize(deserializer)? {
        RawCategoryRef::Known(category) => Some(category),
        RawCategoryRef::Other(_) => None,
    })
}

/// Look up a category's display name by id
pub fn find_category_name(categories: &[Category], id: CategoryId) -> Option<&str> {
    categories
        .iter()
        .find(|c| c.id == id)
        .map(|c| c.name.as_str())
}
