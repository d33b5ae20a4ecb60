use flightdeck_common::constants::DEFAULT_PROXY_URL;
use serde::{Deserialize, Serialize};

/// CLI configuration stored in `$HOME/.flightdeck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub proxy: ProxyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Gateway base URL including the `/api` prefix.
    #[serde(default = "default_proxy_url")]
    pub url: String,
}

fn default_proxy_url() -> String {
    DEFAULT_PROXY_URL.to_string()
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            url: default_proxy_url(),
        }
    }
}

impl AppConfig {
    /// Serialize to TOML for writing to disk.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Apply an environment override for the proxy URL, if set and non-empty.
    pub fn with_proxy_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.proxy.url = url;
        }
        self
    }
}
