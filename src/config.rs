use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default());
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the path at which the high score is stored: the file given in
    /// the configuration or, if that is not set, [`consts::HIGH_SCORE_FILE`]
    /// in the current directory.
    pub(crate) fn high_score_file(&self) -> PathBuf {
        self.files
            .high_score_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(consts::HIGH_SCORE_FILE))
    }

    /// Return the path to write log messages to: the file given in the
    /// configuration or, if that is not set, a file in the local data
    /// directory.  Returns `None` if no path is configured and the local data
    /// directory could not be determined.
    pub(crate) fn log_file(&self) -> Option<PathBuf> {
        self.files.log_file.clone().or_else(|| {
            dirs::data_local_dir().map(|p| p.join("gridsnake").join("gridsnake.log"))
        })
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    high_score_file: Option<PathBuf>,

    /// Path at which log messages should be written
    log_file: Option<PathBuf>,
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawFileConfig {
    high_score_file: Option<String>,
    log_file: Option<String>,
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = std::io::Error;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, std::io::Error> {
        Ok(FileConfig {
            high_score_file: value
                .high_score_file
                .map(expanduser::expanduser)
                .transpose()?,
            log_file: value.log_file.map(expanduser::expanduser).transpose()?,
        })
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempdir().unwrap();
        let cfg = Config::load(&tmpdir.path().join("config.toml"), true).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.high_score_file(), PathBuf::from("high_score.txt"));
    }

    #[test]
    fn load_missing_disallowed() {
        let tmpdir = tempdir().unwrap();
        let r = Config::load(&tmpdir.path().join("config.toml"), false);
        assert!(matches!(r, Err(ConfigError::Read(_))));
    }

    #[test]
    fn load_empty() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "").unwrap();
        assert_eq!(Config::load(&path, false).unwrap(), Config::default());
    }

    #[test]
    fn load_files() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(
            &path,
            concat!(
                "[files]\n",
                "high-score-file = \"/var/games/snake/high_score.txt\"\n",
                "log-file = \"/tmp/snake.log\"\n",
            ),
        )
        .unwrap();
        let cfg = Config::load(&path, false).unwrap();
        assert_eq!(
            cfg.high_score_file(),
            PathBuf::from("/var/games/snake/high_score.txt")
        );
        assert_eq!(cfg.log_file(), Some(PathBuf::from("/tmp/snake.log")));
    }

    #[test]
    fn load_unknown_key() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[files]\nhigh-scores = \"scores.txt\"\n").unwrap();
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_invalid_toml() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[files\n").unwrap();
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn load_home_paths() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(
            &path,
            concat!(
                "[files]\n",
                "high-score-file = \"~/games/high_score.txt\"\n",
                "log-file = \"rel/~/snake.log\"\n",
            ),
        )
        .unwrap();
        let cfg = Config::load(&path, false).unwrap();
        let home = dirs::home_dir().unwrap();
        assert_eq!(
            cfg.high_score_file(),
            home.join("games").join("high_score.txt")
        );
        assert_eq!(cfg.log_file(), Some(PathBuf::from("rel/~/snake.log")));
    }

    #[cfg(unix)]
    #[test]
    fn load_other_user_home() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("config.toml");
        fs_err::write(
            &path,
            "[files]\nhigh-score-file = \"~root/high_score.txt\"\n",
        )
        .unwrap();
        let cfg = Config::load(&path, false).unwrap();
        let high_score_file = cfg.high_score_file();
        assert!(high_score_file.is_absolute());
        assert!(high_score_file.ends_with("high_score.txt"));
        assert_ne!(high_score_file, PathBuf::from("~root/high_score.txt"));
    }
}
