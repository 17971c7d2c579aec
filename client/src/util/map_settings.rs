//! Map settings transport from host to hydrated client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host provides `MapSettings` as Leptos context during SSR. The shell
//! writes them into a `<meta>` tag as JSON; after hydration the browser reads
//! them back from that tag, since server context does not cross the wire.

#[cfg(test)]
#[path = "map_settings_test.rs"]
mod map_settings_test;

use fleet::MapSettings;
use leptos::prelude::*;

/// `name` attribute of the meta tag carrying the settings JSON.
pub const META_NAME: &str = "spectech:map-settings";

/// Settings JSON for the page head. Falls back to an empty object, which
/// decodes to defaults.
pub fn encode(settings: &MapSettings) -> String {
    settings.to_json().unwrap_or_else(|_| "{}".to_owned())
}

/// Parse embedded settings, using defaults for anything unreadable.
pub fn decode(raw: &str) -> MapSettings {
    MapSettings::from_json(raw).unwrap_or_default()
}

/// Settings for the current render.
pub fn current() -> MapSettings {
    #[cfg(feature = "hydrate")]
    {
        if let Some(raw) = read_meta() {
            match MapSettings::from_json(&raw) {
                Ok(settings) => return settings,
                Err(e) => log::warn!("map settings meta unreadable: {e}"),
            }
        }
    }
    use_context::<MapSettings>().unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn read_meta() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let meta = document.query_selector(&format!("meta[name=\"{META_NAME}\"]")).ok().flatten()?;
    meta.get_attribute("content")
}
