use super::ScannerConfig;
use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::Serialize;
use std::path::Path;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

pub struct IdscanConfig {
    figment: Figment,
}

impl IdscanConfig {
    pub fn load() -> Result<Self> {
        Self::load_with(None, None::<&()>)
    }

    /// Build the full layered configuration.
    ///
    /// `cli_overrides` is serialized on top of everything else; fields left as
    /// `None` must be skipped during serialization so they do not mask lower
    /// layers.
    pub fn load_with<T: Serialize>(
        custom_config: Option<&str>,
        cli_overrides: Option<T>,
    ) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        // Embedded defaults -> user config -> repo config
        let mut figment = Figment::new()
            .merge(Toml::string(DEFAULT_CONFIG))
            .merge(Toml::file(Self::user_config_path()))
            .merge(Toml::file("idscan.toml"));

        if let Some(custom_path) = custom_config {
            if !Path::new(custom_path).is_file() {
                bail!("Config file not found: {custom_path}");
            }
            figment = figment.merge(Toml::file(custom_path));
        }

        // IDSCAN_SCANNER__MAX_THREADS=4 → scanner.max_threads
        figment = figment.merge(Env::prefixed("IDSCAN_").split("__"));

        if let Some(overrides) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(Serialized::defaults(overrides));
        }

        Ok(IdscanConfig { figment })
    }

    /// Typed `[scanner]` section
    pub fn scanner(&self) -> Result<ScannerConfig> {
        self.figment
            .extract_inner("scanner")
            .context("Invalid [scanner] configuration")
    }

    fn user_config_path() -> String {
        match std::env::var("HOME") {
            Ok(home) => format!("{}/.config/idscan/config.toml", home),
            Err(_) => "~/.config/idscan/config.toml".to_string(),
        }
    }
}
