//! Application settings loaded from file and environment.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use ::config::{Config, Environment, File, FileFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{catalog::Catalog, error::ConfigError};

/// Directory under the user's config dir holding `config.toml`.
pub const APP_DIR: &str = "mysterium";
/// Prefix for environment overrides, e.g. `MYSTERIUM_ASSET_ROOT`.
pub const ENV_PREFIX: &str = "MYSTERIUM";

const DEFAULT_CONFIG: &str = r#"# Mysterium drafting settings.

# Card images, laid out as <asset_root>/<card_type>/<id>.jpg
asset_root = "cards"

# Session folders are created beneath this directory.
output_root = "."

# Fix the draw order for a reproducible session.
# seed = 1234

# Replace the built-in card list with a JSON catalog.
# catalog_path = "catalog.json"
"#;

/// Runtime settings for the drafting tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root of the source card-image tree.
    pub asset_root: PathBuf,
    /// Directory in which session folders are created.
    pub output_root: PathBuf,
    /// Fixed seed for the draw source.
    #[serde(default)]
    pub seed: Option<u64>,
    /// JSON catalog used instead of the built-in one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load settings from the default config file and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(config_path())
    }

    /// Load settings from `path` (optional) layered under the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("asset_root", "cards")?
            .set_default("output_root", ".")?
            .add_source(
                File::from(path.as_ref())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Card catalog selected by these settings.
    pub fn catalog(&self) -> Result<Arc<Catalog>> {
        match &self.catalog_path {
            Some(path) => Ok(Arc::new(Catalog::from_path(path)?)),
            None => Ok(Catalog::standard()),
        }
    }
}

/// Location of the user's config file.
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

/// Write the commented default config if none exists yet.
pub fn ensure_default_config() -> Result<PathBuf> {
    let path = config_path();
    write_default_config(&path)?;
    Ok(path)
}

fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    info!("wrote default config to {}", path.display());
    Ok(())
}
