use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Page size must be a positive integer
    #[error("page size must be positive, got {0}")]
    PageSize(i64),
    /// Unknown log level name
    #[error("unknown log level {0:?}")]
    LogLevel(String),
    /// Config text is not valid TOML or has wrong field types
    #[error("failed to parse config: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
