use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) game: GameConfig,
    pub(crate) food: FoodConfig,
    pub(crate) sound: SoundConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("snakebite").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if a setting is out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        let config = toml::from_str::<Config>(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that all settings are within their allowed ranges
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let size = self.game.grid_size;
        if (consts::MIN_GRID_SIZE..=consts::MAX_GRID_SIZE).contains(&size) {
            Ok(())
        } else {
            Err(ConfigError::GridSize(size))
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct GameConfig {
    /// Number of cells along each side of the playing grid
    pub(crate) grid_size: u16,
}

impl Default for GameConfig {
    fn default() -> GameConfig {
        GameConfig {
            grid_size: consts::DEFAULT_GRID_SIZE,
        }
    }
}

#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FoodConfig {
    /// Whether food keeps getting reshuffled while the game is paused or a
    /// dialog is open
    pub(crate) respawn_while_paused: bool,
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct SoundConfig {
    pub(crate) enabled: bool,
}

impl Default for SoundConfig {
    fn default() -> SoundConfig {
        SoundConfig { enabled: true }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error(
        "invalid grid size {0}; must be between {min} and {max}",
        min = consts::MIN_GRID_SIZE,
        max = consts::MAX_GRID_SIZE
    )]
    GridSize(u16),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut tmpfile = NamedTempFile::new().expect("failed to create temporary file");
        tmpfile
            .write_all(content.as_bytes())
            .expect("failed to write temporary file");
        tmpfile
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.game.grid_size, 20);
        assert!(!config.food.respawn_while_paused);
        assert!(config.sound.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn load_full() {
        let tmpfile = write_config(concat!(
            "[game]\n",
            "grid-size = 32\n",
            "\n",
            "[food]\n",
            "respawn-while-paused = true\n",
            "\n",
            "[sound]\n",
            "enabled = false\n",
        ));
        let config = Config::load(tmpfile.path(), false).expect("config should load");
        assert_eq!(
            config,
            Config {
                game: GameConfig { grid_size: 32 },
                food: FoodConfig {
                    respawn_while_paused: true
                },
                sound: SoundConfig { enabled: false },
            }
        );
    }

    #[test]
    fn load_partial() {
        let tmpfile = write_config("[sound]\nenabled = false\n");
        let config = Config::load(tmpfile.path(), false).expect("config should load");
        assert_eq!(config.game, GameConfig::default());
        assert_eq!(config.food, FoodConfig::default());
        assert!(!config.sound.enabled);
    }

    #[test]
    fn load_empty() {
        let tmpfile = write_config("");
        let config = Config::load(tmpfile.path(), false).expect("config should load");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file() {
        let tmpdir = tempfile::tempdir().expect("failed to create temporary directory");
        let path = tmpdir.path().join("config.toml");
        assert_eq!(
            Config::load(&path, true).expect("missing file should be allowed"),
            Config::default()
        );
        assert!(matches!(
            Config::load(&path, false),
            Err(ConfigError::Read(_))
        ));
    }

    #[test]
    fn unknown_key() {
        let tmpfile = write_config("[game]\nlevel-size = 32\n");
        assert!(matches!(
            Config::load(tmpfile.path(), false),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn grid_size_out_of_range() {
        for size in [0, 9, 65, 1000] {
            let tmpfile = write_config(&format!("[game]\ngrid-size = {size}\n"));
            let r = Config::load(tmpfile.path(), false);
            assert!(
                matches!(r, Err(ConfigError::GridSize(n)) if n == size),
                "grid size {size} was not rejected: {r:?}"
            );
        }
    }

    #[test]
    fn grid_size_error_message() {
        assert_eq!(
            ConfigError::GridSize(5).to_string(),
            "invalid grid size 5; must be between 10 and 64"
        );
    }
}
