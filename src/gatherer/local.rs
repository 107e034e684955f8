//! Gatherer that loads data from a file on disk. The file is read in full on
//! every fetch and returned as raw bytes with no format assumed.

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use serde::Serialize;
use std::error::Error;
use std::path::PathBuf;

use crate::gatherer::Gatherer;
use crate::types::ConfigError;

/// Configuration for a local [`DataGatherer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the file containing the data to load.
    pub data_path: PathBuf,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_path.as_os_str().is_empty() {
            return Err(ConfigError::empty_field("data_path"));
        }
        Ok(())
    }
}

/// Data gatherer that reads a local file.
pub struct DataGatherer {
    data_path: PathBuf,
}

impl DataGatherer {
    /// Creates a new local DataGatherer. The path is not checked for
    /// existence until [`Gatherer::fetch`].
    pub fn new(cfg: &Config) -> Result<DataGatherer, ConfigError> {
        cfg.validate()?;
        Ok(DataGatherer {
            data_path: cfg.data_path.clone(),
        })
    }
}

#[async_trait]
impl Gatherer for DataGatherer {
    type Data = Vec<u8>;

    async fn fetch(&self) -> Result<Self::Data, Box<dyn Error>> {
        debug!("Reading data from: {}", self.data_path.display());
        match tokio::fs::read(&self.data_path).await {
            Ok(bytes) => Ok(bytes),
            Err(err) => Err(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn make_gatherer(path: PathBuf) -> DataGatherer {
        let cfg = Config { data_path: path };
        DataGatherer::new(&cfg).unwrap()
    }

    #[test]
    fn test_validate_empty_path() {
        let cfg = Config {
            data_path: PathBuf::new(),
        };
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.msg, "invalid configuration: data_path cannot be empty");
    }

    #[test]
    fn test_new_rejects_empty_path() {
        let cfg = Config {
            data_path: PathBuf::new(),
        };
        assert_eq!(
            DataGatherer::new(&cfg).err(),
            Some(ConfigError::empty_field("data_path"))
        );
    }

    #[test]
    fn test_new_does_not_touch_the_filesystem() {
        let cfg = Config {
            data_path: PathBuf::from("/does/not/exist/cluster.json"),
        };
        assert!(DataGatherer::new(&cfg).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_returns_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"cluster data \x00\xff\xfe").unwrap();
        let gatherer = make_gatherer(file.path().to_path_buf());
        let data = gatherer.fetch().await.unwrap();
        assert_eq!(data, b"cluster data \x00\xff\xfe");
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let gatherer = make_gatherer(PathBuf::from("/does/not/exist/cluster.json"));
        let err = gatherer.fetch().await.unwrap_err();
        let io_err = err.downcast_ref::<std::io::Error>().unwrap();
        assert_eq!(io_err.kind(), std::io::ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_fetch_sees_updated_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"first").unwrap();
        let gatherer = make_gatherer(file.path().to_path_buf());
        assert_eq!(gatherer.fetch().await.unwrap(), b"first");
        std::fs::write(file.path(), b"second").unwrap();
        assert_eq!(gatherer.fetch().await.unwrap(), b"second");
    }
}
