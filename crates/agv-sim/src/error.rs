use agv_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("rejected: {0}")]
    Invalid(#[from] CoreError),

    #[error("simulation lock poisoned by a panicking caller")]
    LockPoisoned,
}

pub type SimResult<T> = Result<T, SimError>;
