use thiserror::Error;

/// Operation failures raised by the till. All of them abort the operation
/// without mutating any ledger; none of them is fatal to the process.
///
/// A banknote that merely cannot be changed is NOT an error — `exchange`
/// reports that as an empty result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TillError {
    #[error("Number of coins is not a valid count: {0}")]
    InvalidCoinCount(String),

    #[error("Coin type not accepted: {0}")]
    InvalidCoinType(String),

    #[error("Banknote type not accepted: {0}")]
    InvalidBanknoteType(String),
}
