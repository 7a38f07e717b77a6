//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing fields keep their [`GameConfig::default`] values.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aggro_range = 4\nrng_seed = 99").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.aggro_range, 4);
        assert_eq!(config.rng_seed, 99);
        assert_eq!(config.turn_ready_value, GameConfig::DEFAULT_TURN_READY_VALUE);
        assert!(config.chase_diagonals);
    }

    #[test]
    fn bad_toml_is_an_error() {
        assert!(ConfigLoader::parse("aggro_range = \"far\"").is_err());
    }

    #[test]
    fn missing_file_names_path() {
        let err = ConfigLoader::load(Path::new("/nonexistent/game.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/game.toml"));
    }
}
