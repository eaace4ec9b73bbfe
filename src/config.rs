use std::{env, str::FromStr};

use thiserror::Error;

use crate::models::{garden::GridSize, session::SessionDefaults};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value '{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings, read from `AGRI_SENSE_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub session_defaults: SessionDefaults,
    pub max_upload_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.into(),
            session_defaults: SessionDefaults::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; missing keys keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let bind_addr = lookup("AGRI_SENSE_BIND").unwrap_or(defaults.bind_addr);

        let default_size = defaults.session_defaults.size;
        let rows = parse_var(&lookup, "AGRI_SENSE_DEFAULT_ROWS", default_size.rows())?;
        let cols = parse_var(&lookup, "AGRI_SENSE_DEFAULT_COLS", default_size.cols())?;
        let size = GridSize::new(rows, cols).map_err(|e| ConfigError::Invalid {
            var: "AGRI_SENSE_DEFAULT_ROWS/AGRI_SENSE_DEFAULT_COLS",
            value: format!("{rows}x{cols}"),
            reason: e.to_string(),
        })?;
        let selection = parse_var(
            &lookup,
            "AGRI_SENSE_DEFAULT_PLANT",
            defaults.session_defaults.selection,
        )?;
        let max_upload_bytes =
            parse_var(&lookup, "AGRI_SENSE_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?;

        Ok(Self {
            bind_addr,
            session_defaults: SessionDefaults { size, selection },
            max_upload_bytes,
        })
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: ToString,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::plant::PlantId;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(config.session_defaults, SessionDefaults::default());
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("AGRI_SENSE_BIND", "127.0.0.1:9000"),
            ("AGRI_SENSE_DEFAULT_ROWS", "6"),
            ("AGRI_SENSE_DEFAULT_COLS", "8"),
            ("AGRI_SENSE_DEFAULT_PLANT", "basil"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert_eq!(config.session_defaults.size, GridSize::new(6, 8).unwrap());
        assert_eq!(config.session_defaults.selection, PlantId::Basil);
    }

    #[test]
    fn test_out_of_range_rows_rejected() {
        let err = config_from(&[("AGRI_SENSE_DEFAULT_ROWS", "20")]).unwrap_err();
        assert!(err.to_string().contains("20x4"), "{err}");
    }

    #[test]
    fn test_unparseable_values_rejected() {
        assert!(config_from(&[("AGRI_SENSE_MAX_UPLOAD_BYTES", "lots")]).is_err());
        assert!(config_from(&[("AGRI_SENSE_DEFAULT_PLANT", "cactus")]).is_err());
    }
}
