use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type RouterResult<T> = Result<T, RouterError>;
