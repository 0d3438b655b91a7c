//! Stack growth for deep recursion.
//!
//! Tail calls in Ink programs are trampolined and never deepen the native
//! stack, but ordinary recursion (`n + f(n - 1)`) and deeply nested source
//! still recurse through the parser and evaluator once per level. Those
//! recursive entry points wrap their bodies in [`ensure_sufficient_stack`],
//! which switches to a freshly allocated stack segment when the current one
//! runs low.
//!
//! On `wasm32` the wrapper is a plain call.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 4 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
