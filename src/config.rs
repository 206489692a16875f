use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::pricing::constants::RECIPIENT_WHATSAPP;
use crate::pricing::PricingRules;

/// Settings read from an optional JSON file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub pricing: PricingRules,
    /// WhatsApp number receiving booking requests.
    pub recipient: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            pricing: PricingRules::default(),
            recipient: RECIPIENT_WHATSAPP.to_string(),
        }
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: AppConfig = serde_json::from_str(&content)?;
        info!(path = %path.as_ref().display(), "loaded config");
        Ok(config)
    }

    /// Load from `path` when given, otherwise use the built-in defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
