use crate::util::error_chain;
use std::path::PathBuf;
use thiserror::Error;

/// Somewhere to keep the best score between runs
pub(crate) trait ScoreStore {
    /// Return the stored high score, or 0 if there is no usable record
    fn load(&self) -> u32;

    /// Replace the stored high score with `score`
    fn save(&mut self, score: u32) -> Result<(), SaveError>;
}

/// A [`ScoreStore`] backed by a text file containing nothing but the score in
/// decimal
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FileScoreStore {
    path: PathBuf,
}

impl FileScoreStore {
    pub(crate) fn new(path: PathBuf) -> FileScoreStore {
        FileScoreStore { path }
    }

    /// Read the high score file.  Returns `Ok(None)` if it does not exist.
    fn read(&self) -> Result<Option<u32>, LoadError> {
        let src = match fs_err::read_to_string(&self.path) {
            Ok(src) => src,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LoadError::Read(e)),
        };
        src.trim().parse::<u32>().map(Some).map_err(LoadError::Parse)
    }
}

impl ScoreStore for FileScoreStore {
    fn load(&self) -> u32 {
        match self.read() {
            Ok(score) => score.unwrap_or_default(),
            Err(e) => {
                log::warn!("{}; treating high score as 0", error_chain(&e));
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs_err::create_dir_all(parent).map_err(SaveError::mkdir)?;
        }
        fs_err::write(&self.path, score.to_string()).map_err(SaveError::write)?;
        Ok(())
    }
}

#[derive(Debug, Error)]
#[error("Failed to save high score to disk")]
pub(crate) struct SaveError(#[source] SaveErrorSource);

impl SaveError {
    fn mkdir(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Mkdir(e))
    }

    fn write(e: std::io::Error) -> Self {
        SaveError(SaveErrorSource::Write(e))
    }
}

#[derive(Debug, Error)]
enum SaveErrorSource {
    #[error("failed to create parent directories")]
    Mkdir(#[source] std::io::Error),
    #[error("failed to write high score file")]
    Write(#[source] std::io::Error),
}

#[derive(Debug, Error)]
enum LoadError {
    #[error("failed to read high score file")]
    Read(#[source] std::io::Error),
    #[error("high score file does not contain a valid score")]
    Parse(#[source] std::num::ParseIntError),
}

/// An in-memory [`ScoreStore`], optionally refusing all writes
#[cfg(test)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct MemoryScoreStore {
    pub(crate) record: Option<u32>,
    pub(crate) read_only: bool,
    pub(crate) saves: usize,
}

#[cfg(test)]
impl MemoryScoreStore {
    pub(crate) fn with_record(score: u32) -> MemoryScoreStore {
        MemoryScoreStore {
            record: Some(score),
            ..MemoryScoreStore::default()
        }
    }

    pub(crate) fn read_only() -> MemoryScoreStore {
        MemoryScoreStore {
            read_only: true,
            ..MemoryScoreStore::default()
        }
    }
}

#[cfg(test)]
impl ScoreStore for MemoryScoreStore {
    fn load(&self) -> u32 {
        self.record.unwrap_or_default()
    }

    fn save(&mut self, score: u32) -> Result<(), SaveError> {
        if self.read_only {
            return Err(SaveError::write(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "store is read-only",
            )));
        }
        self.record = Some(score);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::tempdir;

    #[test]
    fn load_missing_file() {
        let tmpdir = tempdir().unwrap();
        let store = FileScoreStore::new(tmpdir.path().join("high_score.txt"));
        assert_eq!(store.load(), 0);
    }

    #[rstest]
    #[case("120", 120)]
    #[case("120\n", 120)]
    #[case("  7  ", 7)]
    #[case("0", 0)]
    #[case("", 0)]
    #[case("lots", 0)]
    #[case("-30", 0)]
    #[case("12.5", 0)]
    fn load_contents(#[case] contents: &str, #[case] score: u32) {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("high_score.txt");
        std::fs::write(&path, contents).unwrap();
        assert_eq!(FileScoreStore::new(path).load(), score);
    }

    #[test]
    fn save_then_load() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("high_score.txt");
        let mut store = FileScoreStore::new(path.clone());
        store.save(250).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "250");
        assert_eq!(FileScoreStore::new(path).load(), 250);
    }

    #[test]
    fn save_overwrites() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("high_score.txt");
        std::fs::write(&path, "99999\n").unwrap();
        let mut store = FileScoreStore::new(path.clone());
        store.save(40).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "40");
    }

    #[test]
    fn save_creates_parent_dirs() {
        let tmpdir = tempdir().unwrap();
        let path = tmpdir.path().join("nested").join("dir").join("high_score.txt");
        let mut store = FileScoreStore::new(path.clone());
        store.save(10).unwrap();
        assert_eq!(store.load(), 10);
    }

    #[test]
    fn save_failure_is_reported() {
        let tmpdir = tempdir().unwrap();
        // A directory where the file should be makes the write fail
        let path = tmpdir.path().join("high_score.txt");
        std::fs::create_dir(&path).unwrap();
        let mut store = FileScoreStore::new(path);
        let e = store.save(10).unwrap_err();
        assert!(error_chain(&e).starts_with("Failed to save high score to disk: failed to write"));
        assert_eq!(store.load(), 0);
    }
}
