use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("diff error: {0}")]
    Diff(#[from] blockdiff_types::DiffError),

    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
