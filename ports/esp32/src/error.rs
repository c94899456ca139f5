//! Boot-time error types.
//!
//! Driver initialization failures abort boot; there is no recovery path on
//! the device. Everything after boot is total (dropped edges and ignored
//! events are not errors).

use thiserror::Error;

/// Fatal bring-up failures.
#[derive(Error, Debug)]
pub enum BootError {
    /// An ESP-IDF driver call returned a non-OK code.
    #[error("{call} failed with esp error {code}")]
    Driver { call: &'static str, code: i32 },
    /// Pin number outside the GPIO matrix.
    #[error("gpio {0} out of range")]
    InvalidGpio(u32),
    /// The same pin assigned to two roles.
    #[error("gpio {0} assigned twice")]
    GpioConflict(u32),
    /// The edge-pump thread could not be spawned.
    #[error("thread spawn failed: {0}")]
    Thread(#[from] std::io::Error),
}

/// Result type for boot operations.
pub type BootResult<T> = Result<T, BootError>;
