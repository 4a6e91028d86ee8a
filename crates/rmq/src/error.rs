use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RmqError {
    #[error("array of length {len} is too small, at least 2 elements are required")]
    ArrayTooSmall { len: usize },
    #[error("repeat count must be at least 1")]
    ZeroRepeat,
    #[error("query ({i}, {j}) is invalid for an array of length {len}")]
    InvalidQuery { i: usize, j: usize, len: usize },
}
