//! Virtual Cookbook - a personal recipe catalog
//!
//! Core modules:
//! - `recipe`: Recipe records and drafts
//! - `store`: The authoritative collection, mirrored to storage
//! - `persistence`: Storage adapter trait and JSON encoding
//! - `platform`: Browser/native abstraction (clock, LocalStorage, logging)
//! - `settings`: Host-supplied configuration
//! - `bindings`: JavaScript surface (WASM only)

#[cfg(target_arch = "wasm32")]
pub mod bindings;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod recipe;
pub mod settings;
pub mod store;

pub use error::{StorageError, ValidationError};
pub use persistence::{MemoryStorage, Storage};
pub use platform::{Clock, FixedClock, SystemClock};
pub use recipe::{Ingredient, Recipe, RecipeDraft};
pub use settings::{LogLevel, Settings};
pub use store::{LoadOutcome, RecipeStore};

/// Catalog constants
pub mod consts {
    /// LocalStorage key of the recipe collection
    pub const DEFAULT_STORAGE_KEY: &str = "cookbook-recipes";

    /// Category filter sentinel matching every recipe
    pub const ALL_CATEGORIES: &str = "all";

    /// Categories offered by the add form
    pub const DEFAULT_CATEGORY_OPTIONS: [&str; 10] = [
        "Appetizers",
        "Main Courses",
        "Desserts",
        "Beverages",
        "Salads",
        "Soups",
        "Breakfast",
        "Snacks",
        "Vegetarian",
        "Vegan",
    ];
}
