use thiserror::Error;

/// Errors produced by the change-making algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The denomination set is empty or contains a zero face value.
    #[error("invalid denominations: {0}")]
    InvalidDenominations(String),

    /// No combination of the available denominations sums to `amount`.
    #[error("amount {amount} cannot be formed from the available denominations")]
    UnreachableAmount { amount: usize },
}

impl Error {
    pub fn invalid_denominations<S: Into<String>>(msg: S) -> Self {
        Error::InvalidDenominations(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
