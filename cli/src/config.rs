use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

pub struct Config {
    pub data_dir: PathBuf,
}

impl Config {
    /// Resolve the data directory, creating it if needed.
    ///
    /// `data_dir` comes from `--data-dir` or `RECIPEBOX_DATA_DIR`; otherwise the
    /// platform data directory for `recipebox` is used.
    pub fn load(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => ProjectDirs::from("", "", "recipebox")
                .context("Could not determine home directory")?
                .data_dir()
                .to_path_buf(),
        };

        std::fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;

        Ok(Config { data_dir })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_with_override_creates_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("recipebox");
        let config = Config::load(Some(dir.clone())).unwrap();
        assert_eq!(config.data_dir, dir);
        assert!(dir.is_dir());
    }

    #[test]
    fn test_load_with_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::load(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(config.data_dir, tmp.path());
    }
}
