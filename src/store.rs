//! Recipe collection
//!
//! The store owns the only authoritative list of recipes. It reads storage
//! once when loaded and rewrites the whole collection after every mutation.
//! A failed write is logged; the in-memory collection stays as mutated.

use chrono::{DateTime, Utc};

use crate::consts::ALL_CATEGORIES;
use crate::error::{StorageError, ValidationError};
use crate::persistence::{self, Storage};
use crate::platform::{Clock, SystemClock};
use crate::recipe::{Recipe, RecipeDraft};
use crate::settings::Settings;

/// What `load` found in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Nothing stored yet
    Empty,
    /// Stored collection parsed (recipe count)
    Restored(usize),
    /// Stored data was unreadable or malformed and was ignored
    Discarded,
}

/// The recipe collection and its storage mirror
pub struct RecipeStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    key: String,
    recipes: Vec<Recipe>,
    load_outcome: LoadOutcome,
}

impl<S: Storage> RecipeStore<S> {
    /// Load with default settings and the wall clock
    pub fn load(storage: S) -> Self {
        Self::load_with(storage, SystemClock, &Settings::default())
    }
}

impl<S: Storage, C: Clock> RecipeStore<S, C> {
    /// Read the stored collection once. Never fails: absent or malformed
    /// data yields an empty collection.
    pub fn load_with(storage: S, clock: C, settings: &Settings) -> Self {
        let key = settings.storage_key.clone();
        let (recipes, load_outcome) = match storage.read(&key) {
            Ok(Some(text)) => match persistence::decode(&text) {
                Ok(recipes) => {
                    log::info!("Loaded {} recipes", recipes.len());
                    let count = recipes.len();
                    (recipes, LoadOutcome::Restored(count))
                }
                Err(e) => {
                    log::warn!("Discarding malformed recipe data under '{}': {}", key, e);
                    (Vec::new(), LoadOutcome::Discarded)
                }
            },
            Ok(None) => {
                log::info!("No recipes found, starting fresh");
                (Vec::new(), LoadOutcome::Empty)
            }
            Err(e) => {
                log::warn!("Could not read recipes: {}", e);
                (Vec::new(), LoadOutcome::Discarded)
            }
        };

        Self {
            storage,
            clock,
            key,
            recipes,
            load_outcome,
        }
    }

    pub fn load_outcome(&self) -> LoadOutcome {
        self.load_outcome
    }

    /// All recipes in insertion order
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Validate and append a draft, then persist.
    /// Returns the stored recipe with its assigned id and timestamp.
    pub fn add(&mut self, draft: RecipeDraft) -> Result<Recipe, ValidationError> {
        if let Err(e) = draft.validate() {
            log::debug!("Rejected recipe draft '{}': {}", draft.name, e);
            return Err(e);
        }

        let created_at = self.clock.now();
        let id = self.next_id(created_at);
        let recipe = draft.into_recipe(id, created_at);
        log::debug!("Adding recipe {} '{}'", recipe.id, recipe.name);

        self.recipes.push(recipe.clone());
        self.persist();
        Ok(recipe)
    }

    /// Remove by id. Unknown ids are a no-op; storage is rewritten either way.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.recipes.len();
        self.recipes.retain(|r| r.id != id);
        let removed = self.recipes.len() != before;
        if removed {
            log::debug!("Removed recipe {}", id);
        }
        self.persist();
        removed
    }

    /// Recipes whose name or an ingredient name contains `search_term`
    /// (case-insensitive), within `category` (exact, or "all")
    pub fn filter(&self, search_term: &str, category: &str) -> Vec<&Recipe> {
        let needle = search_term.to_lowercase();
        self.recipes
            .iter()
            .filter(|r| r.mentions(&needle))
            .filter(|r| category == ALL_CATEGORIES || r.category == category)
            .collect()
    }

    /// "all" followed by each distinct category, in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORIES.to_string()];
        for recipe in &self.recipes {
            if !categories.contains(&recipe.category) {
                categories.push(recipe.category.clone());
            }
        }
        categories
    }

    /// Write the full collection now
    pub fn save(&mut self) -> Result<(), StorageError> {
        let text = persistence::encode(&self.recipes)?;
        self.storage.write(&self.key, &text)?;
        log::info!("Recipes saved ({} entries)", self.recipes.len());
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Save after a mutation; durability is best-effort
    fn persist(&mut self) {
        if let Err(e) = self.save() {
            log::error!("Failed to save recipes, keeping in-memory state: {}", e);
        }
    }

    /// Millisecond timestamp id, bumped past the newest numeric id so
    /// several adds within one millisecond stay unique. Once the numeric
    /// range is exhausted, falls back to `<millis>-<n>`.
    fn next_id(&self, now: DateTime<Utc>) -> String {
        let millis = now.timestamp_millis();
        let newest = self
            .recipes
            .iter()
            .filter_map(|r| r.id.parse::<i64>().ok())
            .max();
        let mut candidate = match newest {
            Some(n) => n.checked_add(1).map(|next| millis.max(next)),
            None => Some(millis),
        };
        while let Some(n) = candidate {
            let id = n.to_string();
            if self.get(&id).is_none() {
                return id;
            }
            candidate = n.checked_add(1);
        }

        let mut suffix: u64 = 1;
        loop {
            let id = format!("{}-{}", millis, suffix);
            if self.get(&id).is_none() {
                return id;
            }
            suffix += 1;
        }
    }
}
