use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SelectionError {
    #[error("Invalid selection: expecting {0} results but only {1} available")]
    OutOfRange(usize, usize),
    #[error("Invalid tournament: pool size {0} exceeds population of {1}")]
    PoolTooLarge(usize, usize),
    #[error("Invalid tournament: pool size must be at least 1")]
    EmptyPool,
}

pub type SelectionResult = Result<Vec<usize>, SelectionError>;
