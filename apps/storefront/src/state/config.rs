//! # Storefront Configuration
//!
//! Settings read once at startup. Read-only afterwards, so no mutex.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TIHAR_DEFAULT_ROLE=admin                                           │
//! │     TIHAR_STATUS_POLICY=reassignable                                   │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $TIHAR_CONFIG, or                                                  │
//! │     ~/.config/tihar-connect/storefront.toml (Linux)                    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     customer role, terminal policy, 3 s timers, ₹100 minimum           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! store_name = "Tihar Connect"
//! default_role = "customer"      # customer | admin | ngo
//! status_policy = "terminal"     # terminal | reassignable
//! checkout_redirect_secs = 3
//! donation_reset_secs = 3
//! min_donation = 100
//! log_filter = "info,tihar=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tihar_core::{Money, Role, StatusPolicy};
use tracing::{debug, info, warn};

/// Default `tracing` filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,tihar=debug";

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Shown in the header.
    pub store_name: String,

    /// Currency symbol for display
    pub currency_symbol: String,

    /// Role selected when a session starts.
    pub default_role: Role,

    /// Whether approved/rejected orders may be flipped again.
    pub status_policy: StatusPolicy,

    /// Delay before a placed order sends the user back home.
    pub checkout_redirect_secs: u64,

    /// Delay before the donation thank-you clears.
    pub donation_reset_secs: u64,

    /// Smallest accepted donation, in rupees.
    pub min_donation: i64,

    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        StorefrontConfig {
            store_name: "Tihar Connect".to_string(),
            currency_symbol: "₹".to_string(),
            default_role: Role::Customer,
            status_policy: StatusPolicy::Terminal,
            checkout_redirect_secs: 3,
            donation_reset_secs: 3,
            min_donation: tihar_core::MIN_DONATION.rupees(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$TIHAR_CONFIG`, or the platform path)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var("TIHAR_CONFIG").ok().map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.checkout_redirect_secs == 0 {
            return Err(ConfigError::Invalid(
                "checkout_redirect_secs must be greater than 0".into(),
            ));
        }

        if self.donation_reset_secs == 0 {
            return Err(ConfigError::Invalid(
                "donation_reset_secs must be greater than 0".into(),
            ));
        }

        if self.min_donation <= 0 {
            return Err(ConfigError::Invalid(
                "min_donation must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `TIHAR_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("TIHAR_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(role) = lookup("TIHAR_DEFAULT_ROLE") {
            match role.parse() {
                Ok(parsed) => {
                    debug!(role = %role, "Overriding default role from environment");
                    self.default_role = parsed;
                }
                Err(_) => warn!(role = %role, "Unknown role in environment"),
            }
        }

        if let Some(policy) = lookup("TIHAR_STATUS_POLICY") {
            match policy.parse() {
                Ok(parsed) => {
                    debug!(policy = %policy, "Overriding status policy from environment");
                    self.status_policy = parsed;
                }
                Err(_) => warn!(policy = %policy, "Unknown status policy in environment"),
            }
        }

        if let Some(secs) = lookup("TIHAR_CHECKOUT_REDIRECT_SECS") {
            match secs.parse() {
                Ok(s) => self.checkout_redirect_secs = s,
                Err(_) => warn!(value = %secs, "Invalid TIHAR_CHECKOUT_REDIRECT_SECS"),
            }
        }

        if let Some(secs) = lookup("TIHAR_DONATION_RESET_SECS") {
            match secs.parse() {
                Ok(s) => self.donation_reset_secs = s,
                Err(_) => warn!(value = %secs, "Invalid TIHAR_DONATION_RESET_SECS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "tihar", "tihar-connect")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn checkout_redirect(&self) -> Duration {
        Duration::from_secs(self.checkout_redirect_secs)
    }

    pub fn donation_reset(&self) -> Duration {
        Duration::from_secs(self.donation_reset_secs)
    }

    pub fn min_donation(&self) -> Money {
        Money::from_rupees(self.min_donation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn overrides(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.checkout_redirect(), Duration::from_secs(3));
        assert_eq!(config.min_donation(), Money::from_rupees(100));
        assert_eq!(config.status_policy, StatusPolicy::Terminal);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            default_role = "admin"
            status_policy = "reassignable"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_role, Role::Admin);
        assert_eq!(config.status_policy, StatusPolicy::Reassignable);
        assert_eq!(config.donation_reset_secs, 3);
        assert_eq!(config.store_name, "Tihar Connect");
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(overrides(&[
            ("TIHAR_STORE_NAME", "Tihar Haat"),
            ("TIHAR_DEFAULT_ROLE", "ngo"),
            ("TIHAR_CHECKOUT_REDIRECT_SECS", "5"),
            ("TIHAR_DONATION_RESET_SECS", "soon"),
        ]));

        assert_eq!(config.store_name, "Tihar Haat");
        assert_eq!(config.default_role, Role::Ngo);
        assert_eq!(config.checkout_redirect_secs, 5);
        // unparseable value ignored
        assert_eq!(config.donation_reset_secs, 3);
    }

    #[test]
    fn test_validate_rejects_zero_delays() {
        let config = StorefrontConfig {
            checkout_redirect_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = StorefrontConfig {
            min_donation: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_reads_explicit_file() {
        let path = std::env::temp_dir().join(format!("tihar-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "store_name = \"Jail Bazaar\"\nmin_donation = 250\n").unwrap();

        let config = StorefrontConfig::load(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.store_name, "Jail Bazaar");
        assert_eq!(config.min_donation(), Money::from_rupees(250));
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("tihar-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "checkout_redirect_secs = \"three\"\n").unwrap();

        let result = StorefrontConfig::load(Some(path.clone()));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
