use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Usage: {program} <name>")]
    Usage { program: String },
    #[error("Memory allocation failed")]
    Allocation(#[from] TryReserveError),
    #[error("Unknown greeting tag: {0}")]
    UnknownGreeting(u8),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
