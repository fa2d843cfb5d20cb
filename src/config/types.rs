// Configuration type definitions

use serde::Deserialize;

use crate::data::DEFAULT_SOURCE_URL;
use crate::notification::DismissPolicy;

/// Chart data source section
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,
}

fn default_url() -> String {
    DEFAULT_SOURCE_URL.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig { url: default_url() }
    }
}

/// Notification section
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct NotificationConfig {
    #[serde(default)]
    pub dismiss_policy: DismissPolicy,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub notification: NotificationConfig,
}
