use thiserror::Error;

/// The cart store was used through a context it was never wired into.
///
/// This is a programming defect in the application assembly, not a runtime
/// condition: it is surfaced synchronously at call time and is not
/// recoverable.
#[derive(Debug, Error)]
#[error("cart store must be wired into the app context before use")]
pub struct WiringError;

#[derive(Debug, Error)]
pub enum CartRepositoryError {
    #[error("storage error: {0}")]
    Storage(String),

    #[error("malformed cart payload: {0}")]
    Malformed(String),
}
