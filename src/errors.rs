use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("invalid billing cycle: {input} (expected yyyy-MM)")]
    InvalidCycle {
        input: String,
    },

    #[error("invalid monetary amount: {input}")]
    InvalidAmount {
        input: String,
    },
}

pub type Result<T> = std::result::Result<T, LedgerError>;
