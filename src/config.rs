//! Host configuration parsed from environment variables.
//!
//! Every variable is optional. Blank values count as unset. Malformed values
//! are startup errors rather than silent fallbacks, so a typo in `MAP_ZOOM`
//! does not quietly render the map at the default zoom.

use std::str::FromStr;

use fleet::MapSettings;
use fleet::settings::{DEFAULT_CENTER, DEFAULT_LANG, DEFAULT_ZOOM};

pub const DEFAULT_PORT: u16 = 3000;
pub const MAX_ZOOM: u8 = 21;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("{var} is not a valid boolean: {value:?}")]
    InvalidBool { var: &'static str, value: String },
    #[error("{var} is out of range: {value:?}")]
    OutOfRange { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub port: u16,
    pub map: MapSettings,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MAP_API_KEY`: map widget credential, default empty
    /// - `MAP_LANG`: default `ru_RU`
    /// - `MAP_CENTER_LAT` / `MAP_CENTER_LNG`: default central Moscow
    /// - `MAP_ZOOM`: 0..=21, default 11
    /// - `MAP_LIVE_TRACKING`: default true
    /// - `MAP_LOCAL_FILTER`: default true
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`HostConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = parse_number("PORT", get("PORT"), DEFAULT_PORT)?;
        let latitude = parse_number("MAP_CENTER_LAT", get("MAP_CENTER_LAT"), DEFAULT_CENTER[0])?;
        let longitude = parse_number("MAP_CENTER_LNG", get("MAP_CENTER_LNG"), DEFAULT_CENTER[1])?;
        check_range("MAP_CENTER_LAT", latitude, -90.0..=90.0)?;
        check_range("MAP_CENTER_LNG", longitude, -180.0..=180.0)?;
        let zoom = parse_number("MAP_ZOOM", get("MAP_ZOOM"), DEFAULT_ZOOM)?;
        check_range("MAP_ZOOM", zoom, 0..=MAX_ZOOM)?;

        let map = MapSettings {
            api_key: get("MAP_API_KEY").unwrap_or_default(),
            lang: get("MAP_LANG").unwrap_or_else(|| DEFAULT_LANG.to_owned()),
            center: [latitude, longitude],
            zoom,
            live_tracking: parse_bool("MAP_LIVE_TRACKING", get("MAP_LIVE_TRACKING"), true)?,
            local_filter: parse_bool("MAP_LOCAL_FILTER", get("MAP_LOCAL_FILTER"), true)?,
        };
        Ok(Self { port, map })
    }
}

fn parse_number<T: FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}

fn parse_bool(var: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(default);
    };
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

fn check_range<T>(var: &'static str, value: T, range: std::ops::RangeInclusive<T>) -> Result<(), ConfigError>
where
    T: PartialOrd + ToString,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { var, value: value.to_string() })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
