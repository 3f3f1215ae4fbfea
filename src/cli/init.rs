use crate::services::slug::{DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH};
use anyhow::Result;
use std::path::PathBuf;

pub fn run(path: PathBuf) -> Result<()> {
    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("data"))?;

    let config_path = path.join("spectator.toml");
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    let config = format!(
        r#"[database]
path = "./data/spectator.db"

# Changing these after records exist gives new records slugs from a
# different mapping than the old ones.
[slugs]
alphabet = "{}"
salt = "Change me to something only you know"
min_length = {}

[sorting]
max_length = 255
"#,
        DEFAULT_ALPHABET, DEFAULT_MIN_LENGTH
    );

    std::fs::write(&config_path, config)?;

    tracing::info!("Created {}", config_path.display());
    tracing::info!("Run 'spectator migrate' to set up the database");

    Ok(())
}
