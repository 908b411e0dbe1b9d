use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid total pages: {0} (must be at least 1)")]
    InvalidTotalPages(u32),

    #[error("Invalid max visible: {0} (must be at least 1)")]
    InvalidMaxVisible(u32),

    #[error("Validation: {0}")]
    Validation(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
