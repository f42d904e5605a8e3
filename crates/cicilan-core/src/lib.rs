pub mod error;
pub mod format;
pub mod installment;
pub mod penalty;
pub mod reports;
pub mod schedule;
pub mod types;
pub mod validation;

pub use error::CicilanError;
pub use types::*;

/// Standard result type for all cicilan operations
pub type CicilanResult<T> = Result<T, CicilanError>;
