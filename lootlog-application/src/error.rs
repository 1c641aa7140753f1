use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} unavailable")]
    MissingContext(&'static str),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}
