use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SenmlDecodeError {
    #[error("payload carries no base path and no bn field")]
    MissingBasePath,
    #[error("target path does not classify to object, instance, or resource")]
    UnresolvedPath,
    #[error("payload has no e entry list")]
    MissingEntries,
}
