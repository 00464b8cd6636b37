//! Client configuration with an optional host-page override.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read once in `App` and provided through context. The host page may embed
//! a JSON document in `<script id="app-config" type="application/json">`;
//! any field it omits keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::state::wizard::{FloorBehavior, WizardPolicy};

pub const DEFAULT_OTP_DELAY_MS: u64 = 1500;
pub const DEFAULT_SCAN_DELAY_MS: u64 = 2000;
pub const DEFAULT_INVITE_DELAY_MS: u64 = 1200;
pub const DEFAULT_CITY: &str = "All cities";

/// DOM id of the embedded configuration document.
#[cfg(feature = "csr")]
const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Fixed delay before a simulated OTP check resolves.
    pub otp_delay_ms: u64,
    /// Fixed delay before a simulated QR scan resolves.
    pub scan_delay_ms: u64,
    /// Fixed delay before a simulated invite is marked sent.
    pub invite_delay_ms: u64,
    /// Let users move past a step whose required fields are still empty.
    pub allow_skip_ahead: bool,
    /// "Back" on the first wizard step leaves the flow instead of staying put.
    pub exit_at_first_step: bool,
    /// City preselected in the discovery filter.
    pub default_city: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            otp_delay_ms: DEFAULT_OTP_DELAY_MS,
            scan_delay_ms: DEFAULT_SCAN_DELAY_MS,
            invite_delay_ms: DEFAULT_INVITE_DELAY_MS,
            allow_skip_ahead: true,
            exit_at_first_step: true,
            default_city: DEFAULT_CITY.to_owned(),
        }
    }
}

impl AppConfig {
    /// Parse a JSON override document on top of the defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.default_city.trim().is_empty() {
            return Err(ConfigError::Invalid("default_city must not be empty".into()));
        }
        Ok(config)
    }

    /// Load the host-page override, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = read_embedded_document() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::debug!("loaded app config override: {config:?}");
                config
            }
            Err(e) => {
                log::warn!("ignoring app config override: {e}");
                Self::default()
            }
        }
    }

    pub fn otp_delay(&self) -> Duration {
        Duration::from_millis(self.otp_delay_ms)
    }

    pub fn scan_delay(&self) -> Duration {
        Duration::from_millis(self.scan_delay_ms)
    }

    pub fn invite_delay(&self) -> Duration {
        Duration::from_millis(self.invite_delay_ms)
    }

    /// Wizard navigation policy derived from the skip-ahead and floor settings.
    pub fn wizard_policy(&self) -> WizardPolicy {
        WizardPolicy {
            allow_skip_ahead: self.allow_skip_ahead,
            floor: if self.exit_at_first_step { FloorBehavior::Exit } else { FloorBehavior::Clamp },
        }
    }
}

fn read_embedded_document() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
        el.text_content().filter(|raw| !raw.trim().is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
