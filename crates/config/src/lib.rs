use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "docdesk.toml",
    "config/docdesk.toml",
    "crates/config/docdesk.toml",
    "../docdesk.toml",
    "../config/docdesk.toml",
    "../crates/config/docdesk.toml",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub api: ApiConfig,
    pub auth: AuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            api: ApiConfig::default(),
            auth: AuthConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON data file, or `:memory:` for an ephemeral store.
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "docdesk-data.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// When enabled, repository and auth calls sleep for their nominal
    /// round-trip duration before touching the store.
    #[serde(default = "ApiConfig::default_simulate_latency")]
    pub simulate_latency: bool,
}

impl ApiConfig {
    const fn default_simulate_latency() -> bool {
        true
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            simulate_latency: Self::default_simulate_latency(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Role assigned to self-registered users.
    #[serde(default = "AuthConfig::default_role")]
    pub default_role: String,
}

impl AuthConfig {
    fn default_role() -> String {
        "viewer".to_string()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_role: Self::default_role(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and
/// environment overrides.
///
/// ```
/// use docdesk_config::load;
///
/// std::env::remove_var("DOCDESK_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.storage.path.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let mut builder = config::Config::builder();
    builder = builder
        .set_default("storage.path", defaults.storage.path.clone())
        .unwrap()
        .set_default("api.simulate_latency", defaults.api.simulate_latency)
        .unwrap()
        .set_default("auth.default_role", defaults.auth.default_role.clone())
        .unwrap();

    let environment_overrides = config::Environment::with_prefix("DOCDESK").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("DOCDESK_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via DOCDESK_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(?config, "loaded docdesk configuration");
    Ok(config)
}
