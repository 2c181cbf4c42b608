//! Error types for the recipe catalog

use thiserror::Error;

/// Why a draft was rejected by `RecipeStore::add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("recipe name is required")]
    MissingName,
    #[error("recipe category is required")]
    MissingCategory,
    #[error("at least one ingredient with a name is required")]
    MissingIngredients,
}

/// Failures of the persistence adapter
#[derive(Debug, Error)]
pub enum StorageError {
    /// No backing storage (no window, or LocalStorage disabled)
    #[error("storage is unavailable")]
    Unavailable,

    #[error("storage read failed: {0}")]
    Read(String),

    /// Includes quota exceeded in the browser
    #[error("storage write failed: {0}")]
    Write(String),

    #[error("failed to encode recipes: {0}")]
    Encode(#[from] serde_json::Error),
}
