//! Conditional logging macros for the thinning pipeline.
//!
//! With the `tracing` feature, `debug!` and `warn!` are the `tracing` macros,
//! so traversal and serialization events show up under a subscriber.
//! Without it they expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
