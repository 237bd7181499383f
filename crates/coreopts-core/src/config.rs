//! Session configuration.
//!
//! # Environment
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `COREOPTS_NO_LANGEXTRA` | Truthy (`1`/`true`/`yes`/`on`) disables localization |
//! | `COREOPTS_VALIDATION` | `strict` or `lenient` |
//!
//! Unset or unparsable variables leave the compiled-in default. Without the
//! `langextra` feature localization stays off whatever the environment says.

use tracing::warn;

use crate::validate::ValidationMode;

/// Environment variable that turns localization off.
pub const ENV_NO_LANGEXTRA: &str = "COREOPTS_NO_LANGEXTRA";
/// Environment variable selecting the validation mode.
pub const ENV_VALIDATION: &str = "COREOPTS_VALIDATION";

/// Knobs for one [`crate::CoreOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsConfig {
    /// Register translated catalogs with v1/v2 hosts. Ignored without the
    /// `langextra` feature; see [`OptionsConfig::localization_enabled`].
    pub localization: bool,
    /// How catalog defects are handled.
    pub validation: ValidationMode,
    /// Maximum tracked buffers per negotiation (fault injection).
    pub allocation_limit: Option<usize>,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            localization: cfg!(feature = "langextra"),
            validation: ValidationMode::default(),
            allocation_limit: None,
        }
    }
}

impl OptionsConfig {
    /// Compiled-in defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `get_env`.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = get_env(ENV_NO_LANGEXTRA) {
            config.localization = cfg!(feature = "langextra") && !env_flag(&value);
        }
        if let Some(value) = get_env(ENV_VALIDATION) {
            match ValidationMode::parse(&value) {
                Some(mode) => config.validation = mode,
                None => warn!(
                    variable = ENV_VALIDATION,
                    value = value.as_str(),
                    "unrecognized validation mode; keeping default"
                ),
            }
        }
        config
    }

    /// Enable or disable localization. Enabling is a no-op without the
    /// `langextra` feature.
    #[must_use]
    pub fn localization(mut self, enabled: bool) -> Self {
        self.localization = enabled && cfg!(feature = "langextra");
        self
    }

    /// Whether sessions query the language and attach translations.
    #[must_use]
    pub const fn localization_enabled(&self) -> bool {
        cfg!(feature = "langextra") && self.localization
    }

    /// Set the validation mode.
    #[must_use]
    pub fn validation(mut self, mode: ValidationMode) -> Self {
        self.validation = mode;
        self
    }

    /// Cap the number of buffers a negotiation may acquire.
    #[must_use]
    pub fn allocation_limit(mut self, limit: Option<usize>) -> Self {
        self.allocation_limit = limit;
        self
    }
}

#[inline]
fn env_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults() {
        let config = OptionsConfig::default();
        assert_eq!(config.localization, cfg!(feature = "langextra"));
        assert_eq!(config.validation, ValidationMode::Strict);
        assert_eq!(config.allocation_limit, None);
    }

    #[test]
    fn builder_overrides() {
        let config = OptionsConfig::new()
            .localization(false)
            .validation(ValidationMode::Lenient)
            .allocation_limit(Some(3));
        assert!(!config.localization);
        assert_eq!(config.validation, ValidationMode::Lenient);
        assert_eq!(config.allocation_limit, Some(3));
    }

    #[test]
    fn env_disables_localization() {
        let config = OptionsConfig::from_env_with(env(&[(ENV_NO_LANGEXTRA, "yes")]));
        assert!(!config.localization);
        let config = OptionsConfig::from_env_with(env(&[(ENV_NO_LANGEXTRA, "0")]));
        assert_eq!(config.localization, cfg!(feature = "langextra"));
    }

    #[test]
    #[cfg(not(feature = "langextra"))]
    fn localization_stays_off_without_langextra() {
        for value in ["0", "false", "no", ""] {
            let config = OptionsConfig::from_env_with(env(&[(ENV_NO_LANGEXTRA, value)]));
            assert!(!config.localization, "{value:?}");
        }
        assert!(!OptionsConfig::new().localization(true).localization);

        let forced = OptionsConfig {
            localization: true,
            ..OptionsConfig::new()
        };
        assert!(!forced.localization_enabled());
    }

    #[test]
    #[cfg(feature = "langextra")]
    fn localization_follows_flag_with_langextra() {
        assert!(OptionsConfig::new().localization(true).localization_enabled());
        assert!(!OptionsConfig::new().localization(false).localization_enabled());
    }

    #[test]
    fn env_selects_validation() {
        let config = OptionsConfig::from_env_with(env(&[(ENV_VALIDATION, " Lenient ")]));
        assert_eq!(config.validation, ValidationMode::Lenient);
        let config = OptionsConfig::from_env_with(env(&[(ENV_VALIDATION, "loose")]));
        assert_eq!(config.validation, ValidationMode::Strict);
    }

    #[test]
    fn empty_env_keeps_defaults() {
        assert_eq!(OptionsConfig::from_env_with(env(&[])), OptionsConfig::default());
    }
}
