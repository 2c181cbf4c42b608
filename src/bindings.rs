//! JavaScript surface for the cookbook page
//!
//! Recipes and drafts cross the boundary as JSON text in the same camelCase
//! shape that is kept in LocalStorage.

use wasm_bindgen::prelude::*;

use crate::persistence::{MemoryStorage, Storage};
use crate::platform::{self, LocalStorage};
use crate::recipe::{Recipe, RecipeDraft};
use crate::settings::Settings;
use crate::store::{LoadOutcome, RecipeStore};

#[wasm_bindgen(start)]
pub fn wasm_main() {
    platform::init_logging(log::LevelFilter::Info);
    log::info!("Virtual Cookbook starting...");
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsError::new(&e.to_string()).into())
}

/// One cookbook bound to the page's LocalStorage
#[wasm_bindgen]
pub struct Cookbook {
    store: RecipeStore<Box<dyn Storage>>,
    settings: Settings,
}

#[wasm_bindgen]
impl Cookbook {
    /// `settings_json` is optional; missing or malformed settings use defaults
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> Cookbook {
        let settings = settings_json
            .as_deref()
            .map(Settings::from_json)
            .unwrap_or_default();
        log::set_max_level(settings.log_level.to_filter());

        let storage: Box<dyn Storage> = match LocalStorage::open() {
            Ok(local) => Box::new(local),
            Err(e) => {
                log::warn!("{}; recipes will not survive a reload", e);
                Box::new(MemoryStorage::new())
            }
        };
        let store = RecipeStore::load_with(storage, platform::SystemClock, &settings);

        Cookbook { store, settings }
    }

    /// All recipes as a JSON array
    pub fn list(&self) -> Result<String, JsValue> {
        to_json(self.store.list())
    }

    /// One recipe as JSON, or `undefined`
    pub fn get(&self, id: &str) -> Result<Option<String>, JsValue> {
        self.store.get(id).map(to_json).transpose()
    }

    /// Creation date label (`m/d/yyyy`, UTC) for the detail view, or
    /// `undefined` for an unknown id
    #[wasm_bindgen(js_name = createdOn)]
    pub fn created_on(&self, id: &str) -> Option<String> {
        self.store.get(id).map(Recipe::created_on)
    }

    /// Add a draft; returns the created recipe JSON or throws with the
    /// validation message
    pub fn add(&mut self, draft_json: &str) -> Result<String, JsValue> {
        let draft: RecipeDraft = serde_json::from_str(draft_json)
            .map_err(|e| JsError::new(&format!("invalid recipe draft: {}", e)))?;
        let recipe: Recipe = self
            .store
            .add(draft)
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_json(&recipe)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.store.remove(id)
    }

    pub fn filter(&self, search_term: &str, category: &str) -> Result<String, JsValue> {
        to_json(&self.store.filter(search_term, category))
    }

    pub fn categories(&self) -> Result<String, JsValue> {
        to_json(&self.store.categories())
    }

    /// Suggestions for the add form's category picker
    #[wasm_bindgen(js_name = categoryOptions)]
    pub fn category_options(&self) -> Result<String, JsValue> {
        to_json(&self.settings.category_options)
    }

    /// True when stored data was malformed and discarded at startup
    #[wasm_bindgen(js_name = loadWarning)]
    pub fn load_warning(&self) -> bool {
        self.store.load_outcome() == LoadOutcome::Discarded
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
