//! Stack growth for the recursive template parser.
//!
//! Depth is already capped by `ParseOptions::max_template_depth`, but the cap
//! is user-configurable and worker threads (the driver's rayon pool) may start
//! with small stacks. On native targets `stacker` grows the stack on demand;
//! on `wasm32` the closure runs directly.

#[cfg(not(target_arch = "wasm32"))]
/// Grow when less than this much stack remains.
const RED_ZONE: usize = 64 * 1024;

#[cfg(not(target_arch = "wasm32"))]
/// Size of each new stack segment.
const SEGMENT: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
