//! Stack safety for the recursive evaluator.
//!
//! Evaluation recursion depth equals syntax-tree depth and the host call
//! stack models the interpreter call stack, so a deeply nested expression
//! or a deep chain of closure calls can exhaust the native stack. Every
//! recursive dispatch goes through [`ensure_sufficient_stack`], which grows
//! the stack on demand.
//!
//! On WASM targets this is a passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
