use crate::services::naturalize::SortConfig;
use crate::services::slug::SlugConfig;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub slugs: SlugConfig,
    #[serde(default)]
    pub sorting: SortConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
            pool_size: default_pool_size(),
        }
    }
}

impl DatabaseConfig {
    /// A relative `path` is taken to be relative to the config file, not to
    /// wherever the command happens to run.
    fn resolve_relative_to(&mut self, dir: &Path) {
        let db_path = Path::new(&self.path);
        if db_path.is_relative() && !dir.as_os_str().is_empty() {
            self.path = dir.join(db_path).to_string_lossy().into_owned();
        }
    }
}

fn default_database_path() -> String {
    "./data/spectator.db".to_string()
}

fn default_pool_size() -> u32 {
    10
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!(
                "Could not read config file '{}': {}. Run 'spectator init' to create one.",
                path.display(),
                e
            )
        })?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate()?;

        if let Some(dir) = path.parent() {
            config.database.resolve_relative_to(dir);
        }
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file means all defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.pool_size == 0 {
            anyhow::bail!("database.pool_size must be greater than 0");
        }
        if self.sorting.max_length == 0 {
            anyhow::bail!("sorting.max_length must be greater than 0");
        }
        self.slugs
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid [slugs] settings: {}", e))?;
        Ok(())
    }
}
