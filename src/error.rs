use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    /// Chart input could not be turned into a series store; nothing was built.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A caller passed an argument outside the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Derived geometry failed validation before reaching a renderer.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
