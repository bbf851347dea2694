//! Configuration file loader with multi-source merging

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// On-disk configuration shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the SQLite database file. Defaults to the user data dir.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl FileConfig {
    /// The database path to use, falling back to the platform default.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(default_database_path)
    }
}

/// `<data_dir>/quiz-trainer/quizzes.sqlite`, or a relative fallback when
/// the platform exposes no data dir.
#[must_use]
pub fn default_database_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("quiz-trainer")
        .join("quizzes.sqlite")
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `QUIZ_` prefixed environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./quiz.toml` or `./.quiz.toml`
    /// 4. Global: `~/.config/quiz-trainer/config.toml`
    /// 5. Default values
    ///
    /// # Errors
    ///
    /// Returns a boxed `figment::Error` if a source fails to parse or the
    /// merged result does not match [`FileConfig`].
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        for filename in &["quiz.toml", ".quiz.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                break;
            }
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed("QUIZ_").split("_"));

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    #[must_use]
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("quiz-trainer").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fall_back_to_data_dir() {
        let config = ConfigLoader::load_defaults();
        assert!(config.storage.path.is_none());
        assert!(
            config
                .database_path()
                .to_string_lossy()
                .contains("quizzes.sqlite")
        );
    }

    #[test]
    fn explicit_storage_path_wins() {
        let config = FileConfig {
            storage: StorageConfig {
                path: Some(PathBuf::from("/tmp/custom.sqlite")),
            },
        };
        assert_eq!(config.database_path(), PathBuf::from("/tmp/custom.sqlite"));
    }

    #[test]
    fn global_config_path_mentions_app_dir() {
        if let Some(path) = ConfigLoader::global_config_path() {
            assert!(path.to_string_lossy().contains("quiz-trainer"));
        }
    }
}
