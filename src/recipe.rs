//! Recipe records
//!
//! Field names are serialized in camelCase so the stored blob keeps the
//! shape `{id, name, category, ingredients, instructions, notes, image,
//! cookTime, servings, createdAt}`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// One ingredient line, e.g. `Water` / `1 cup`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
        }
    }

    /// Whitespace-only names count as blank
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// A cataloged recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Assigned by the store, never by the caller
    pub id: String,
    pub name: String,
    pub category: String,
    pub ingredients: Vec<Ingredient>,
    /// Steps in cooking order
    pub instructions: Vec<String>,
    #[serde(default)]
    pub notes: String,
    /// Encoded image payload (a data URL in the browser)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub servings: String,
    pub created_at: DateTime<Utc>,
}

impl Recipe {
    /// Case-insensitive substring match on the name or any ingredient name.
    /// `needle` must already be lowercased.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self
                .ingredients
                .iter()
                .any(|ing| ing.name.to_lowercase().contains(needle))
    }

    /// Creation date as shown on the detail view ("Added on 3/14/2025").
    /// The date is taken in UTC, not the viewer's time zone, so a recipe
    /// added late in the evening west of Greenwich shows the next day.
    pub fn created_on(&self) -> String {
        self.created_at.format("%-m/%-d/%Y").to_string()
    }
}

/// Recipe payload supplied by the UI; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
    pub name: String,
    pub category: String,
    pub ingredients: Vec<Ingredient>,
    pub instructions: Vec<String>,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub cook_time: String,
    pub servings: String,
}

impl RecipeDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Builder-style ingredient append
    pub fn ingredient(mut self, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.ingredients.push(Ingredient::new(name, quantity));
        self
    }

    /// Builder-style step append
    pub fn step(mut self, text: impl Into<String>) -> Self {
        self.instructions.push(text.into());
        self
    }

    /// Presence checks only: name, category, one named ingredient
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        if self.category.is_empty() {
            return Err(ValidationError::MissingCategory);
        }
        if self.ingredients.iter().all(Ingredient::is_blank) {
            return Err(ValidationError::MissingIngredients);
        }
        Ok(())
    }

    /// Turn a validated draft into a stored recipe, dropping blank
    /// ingredient rows and blank steps
    pub(crate) fn into_recipe(self, id: String, created_at: DateTime<Utc>) -> Recipe {
        Recipe {
            id,
            name: self.name,
            category: self.category,
            ingredients: self
                .ingredients
                .into_iter()
                .filter(|ing| !ing.is_blank())
                .collect(),
            instructions: self
                .instructions
                .into_iter()
                .filter(|step| !step.trim().is_empty())
                .collect(),
            notes: self.notes,
            image: self.image,
            cook_time: self.cook_time,
            servings: self.servings,
            created_at,
        }
    }
}
