//! Platform abstraction for synchronization primitives.
//!
//! With the `std` feature (default) locking comes from `parking_lot`; the
//! `lock-free` build substitutes `spin` for targets without an OS. Both
//! expose the same guard-returning `lock()` API, so plain re-exports keep a
//! single `Mutex` surface for the rest of the crate.

#[cfg(not(feature = "std"))]
pub use alloc::sync::Arc;
#[cfg(feature = "std")]
pub use std::sync::Arc;

#[cfg(feature = "std")]
pub use parking_lot::{Mutex, MutexGuard};

#[cfg(not(feature = "std"))]
pub use spin::{Mutex, MutexGuard};
