//! Widget Configuration
//!
//! Optional overrides read from a `<script id="todo-config" type="application/json">`
//! element in the host page.

use serde::Deserialize;

/// Id of the page element holding JSON overrides
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// What happens to a task's completion flag when the task is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StaleDoneEntries {
    /// Leave the flag in the map
    #[default]
    Keep,
    /// Delete the flag together with the task
    Prune,
}

/// Widget settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetConfig {
    /// Storage key for the task list
    #[serde(default = "default_list_key")]
    pub list_key: String,

    /// Storage key for the completion map
    #[serde(default = "default_done_map_key")]
    pub done_map_key: String,

    #[serde(default)]
    pub stale_done_entries: StaleDoneEntries,
}

fn default_list_key() -> String {
    "list".to_string()
}

fn default_done_map_key() -> String {
    "doneMap".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            list_key: default_list_key(),
            done_map_key: default_done_map_key(),
            stale_done_entries: StaleDoneEntries::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse overrides; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load config from the host page.
    /// Returns default config if the element is missing or unparseable.
    pub fn load() -> Self {
        let Some(text) = Self::read_page_element() else {
            return Self::default();
        };
        match Self::from_json(&text) {
            Ok(config) => {
                log::info!("[CONFIG] Loaded overrides from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(err) => {
                log::warn!("[CONFIG] Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }
        }
    }

    fn read_page_element() -> Option<String> {
        let document = web_sys::window()?.document()?;
        let text = document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()?;
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
