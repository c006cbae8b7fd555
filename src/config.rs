//! Startup Configuration
//!
//! The store endpoint URL and anonymous access key are baked in at compile
//! time. Missing either is a fatal initialization failure before any UI
//! renders.

/// Environment variable holding the store endpoint URL.
pub const STORE_URL_VAR: &str = "VENTO_SUPABASE_URL";

/// Environment variable holding the anonymous access key.
pub const ANON_KEY_VAR: &str = "VENTO_SUPABASE_ANON_KEY";

/// Local storage key for overriding the store URL at runtime.
const STORE_URL_STORAGE_KEY: &str = "vento_store_url";

/// Resolved application configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub store_url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

impl Config {
    /// Load configuration from the compile-time environment, honoring a
    /// local storage override for the store URL when one is present.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_values(
            option_env!("VENTO_SUPABASE_URL"),
            option_env!("VENTO_SUPABASE_ANON_KEY"),
        )?;

        if let Some(url) = store_url_override() {
            config.store_url = url;
        }

        Ok(config)
    }

    fn from_values(url: Option<&str>, key: Option<&str>) -> Result<Self, ConfigError> {
        let url = url
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(STORE_URL_VAR))?;
        let key = key
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(ANON_KEY_VAR))?;

        Ok(Self {
            store_url: url.trim_end_matches('/').to_string(),
            anon_key: key.to_string(),
        })
    }
}

/// Read a store URL override from browser local storage.
fn store_url_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let url = storage.get_item(STORE_URL_STORAGE_KEY).ok()??;

    if url.is_empty() {
        None
    } else {
        Some(url.trim_end_matches('/').to_string())
    }
}
