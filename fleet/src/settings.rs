//! Map widget settings shared by the host (which reads them from the
//! environment) and the hydrated client (which reads them from the page).

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

pub const DEFAULT_CENTER: [f64; 2] = [55.751_244, 37.618_423];
pub const DEFAULT_ZOOM: u8 = 11;
pub const DEFAULT_LANG: &str = "ru_RU";

const SCRIPT_BASE_URL: &str = "https://api-maps.yandex.ru/2.1/";

/// Map widget configuration and the feature set of the map view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Widget access credential. Empty means the widget will fail to load.
    pub api_key: String,
    pub lang: String,
    pub center: [f64; 2],
    pub zoom: u8,
    /// Periodically perturb marker positions and show the tracking banner.
    pub live_tracking: bool,
    /// Show the map's own category filter bar.
    pub local_filter: bool,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            lang: DEFAULT_LANG.to_owned(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            live_tracking: true,
            local_filter: true,
        }
    }
}

impl MapSettings {
    #[must_use]
    pub fn has_credential(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// URL of the widget loader script for these settings.
    #[must_use]
    pub fn script_url(&self) -> String {
        format!("{SCRIPT_BASE_URL}?apikey={}&lang={}", self.api_key.trim(), self.lang)
    }

    /// Serialize for embedding in the page head.
    ///
    /// # Errors
    ///
    /// Returns the serializer error.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse settings embedded by [`MapSettings::to_json`]. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error for malformed JSON.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
