use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_API_URL;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
    pub api_url: String,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P, api_url: impl Into<String>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            api_url: api_url.into(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::new("ideadeck_data", DEFAULT_API_URL)
    }
}
