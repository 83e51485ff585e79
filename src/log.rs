//! Debug logging that compiles away.
//!
//! Layout and the geometry builders log which extremes, intersections and
//! skips they decide on. Builds without the `tracing` feature replace
//! `debug!` and `warn!` with empty expansions, so the per-tower loops carry
//! no logging code at all; with it, run the driver under
//! `RUST_LOG=skeli=debug` to follow the decisions.

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($ignored:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($ignored:tt)*) => {};
}

// macro_export hoists the no-op versions to the crate root; pull them back
// under `crate::log` so call sites import one path either way.
#[cfg(not(feature = "tracing"))]
pub use crate::{debug, warn};
