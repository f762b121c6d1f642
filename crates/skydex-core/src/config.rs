use std::path::PathBuf;

/// Ingestion settings. The data file is expected to carry a header line;
/// fixtures without one can opt out of the skip.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub skip_header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from("airlines.csv"),
            skip_header: true,
        }
    }
}

impl Config {
    pub fn new<P: Into<PathBuf>>(data_path: P) -> Self {
        Config {
            data_path: data_path.into(),
            ..Default::default()
        }
    }

    pub fn without_header(mut self) -> Self {
        self.skip_header = false;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.data_path.as_os_str().is_empty() {
            return Err("data_path must not be empty".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.skip_header);
        assert_eq!(config.data_path, PathBuf::from("airlines.csv"));
    }

    #[test]
    fn test_new_config() {
        let config = Config::new("/tmp/delays.csv");
        assert_eq!(config.data_path, PathBuf::from("/tmp/delays.csv"));
        assert!(config.skip_header);
    }

    #[test]
    fn test_without_header() {
        let config = Config::new("fixture.csv").without_header();
        assert!(!config.skip_header);
    }

    #[test]
    fn test_empty_path_invalid() {
        let config = Config::new("");
        assert!(config.validate().is_err());
    }
}
