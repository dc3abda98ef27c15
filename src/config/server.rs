//! Service and encoder configuration types.

use std::path::PathBuf;

use serde::Deserialize;

use crate::translate::DictionaryLayout;

/// Default service name, used for logs, UDS socket names and registration.
pub const DEFAULT_SERVICE_NAME: &str = "amadeus-gateway";

/// Service configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub name: String,
    /// Directory holding `<OperationName>.json` provider answers.
    pub fixtures_dir: PathBuf,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVICE_NAME.to_string(),
            fixtures_dir: PathBuf::from("fixtures"),
        }
    }
}

/// Response encoder configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Fold carriers and currencies into `aircrafts`, as older releases did.
    pub legacy_dictionary_merge: bool,
}

impl EncoderConfig {
    pub fn layout(&self) -> DictionaryLayout {
        if self.legacy_dictionary_merge {
            DictionaryLayout::LegacyMerged
        } else {
            DictionaryLayout::Corrected
        }
    }
}
