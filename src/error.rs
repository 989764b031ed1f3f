use thiserror::Error;

/// Reasons an interval is rejected, either by [`crate::Interval::try_new`] or
/// as the query of a tree search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("interval endpoint is not a number")]
    NotANumber,
    #[error("interval endpoints out of order: {left} > {right}")]
    OutOfOrder { left: f64, right: f64 },
}

pub type Result<T> = std::result::Result<T, Error>;
