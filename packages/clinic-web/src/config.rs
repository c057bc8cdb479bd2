//! Application configuration

use std::sync::OnceLock;

use anyhow::{ensure, Result};
use clinic_client::ClientConfig;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub api: ClientConfig,
}

impl AppConfig {
    /// Browser builds bake `CLINIC_API_URL` in at compile time; native builds
    /// read it (and `.env`) at startup.
    pub fn load() -> Result<Self> {
        #[cfg(target_arch = "wasm32")]
        let api = ClientConfig::new(
            option_env!("CLINIC_API_URL").unwrap_or(clinic_client::config::DEFAULT_API_URL),
        );
        #[cfg(not(target_arch = "wasm32"))]
        let api = ClientConfig::from_env();

        let config = Self { api };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let url = &self.api.base_url;
        ensure!(
            url.starts_with("http://") || url.starts_with("https://"),
            "CLINIC_API_URL must be an absolute http(s) URL, got {url:?}"
        );
        Ok(())
    }
}

/// Install the configuration. Call this once at startup.
pub fn init(config: AppConfig) {
    CONFIG.set(config).ok();
}

/// Get the configuration, falling back to defaults if `init` was never called.
pub fn get() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::default)
}
