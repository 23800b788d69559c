// src/config.rs
use serde::Deserialize;
use web_sys::window;

const CONFIG_ELEMENT_ID: &str = "app-config";

/// How long a status message stays visible.
pub const DEFAULT_MESSAGE_HIDE_MS: u32 = 5000;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for backend URLs. Empty means same origin.
    pub api_base: String,
    pub message_hide_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            message_hide_ms: DEFAULT_MESSAGE_HIDE_MS,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads `<script id="app-config" type="application/json">` from the page.
    /// Anything missing or malformed falls back to the defaults.
    pub fn load() -> Self {
        let json = match config_json_from_dom() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("{e}; using default config");
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Ignoring malformed #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn config_json_from_dom() -> Result<String, String> {
    let win = window().ok_or("no window")?;
    let doc = win.document().ok_or("no document")?;
    let el = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .ok_or_else(|| format!("no #{CONFIG_ELEMENT_ID} element"))?;
    Ok(el.text_content().unwrap_or_default())
}
