use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LinkDecodeError {
    #[error("link entry has no base path")]
    MissingPath,
}
