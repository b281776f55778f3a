#![allow(
    clippy::result_large_err,
    reason = "EvalError is fundamental; boxing would add noise at every call site"
)]
//! Primi Eval - tree-walking evaluator for the Primi runtime.
//!
//! # Architecture
//!
//! The evaluator uses:
//! - `HandlerRegistry`: one `NodeHandler` per `NodeKind`, selected by
//!   exhaustive match
//! - `Interpreter`: recursive dispatch (`eval`) and closure invocation (`call`)
//! - `Context` scope chains and `Value` types from `primi_values`
//!
//! # Re-exports
//!
//! This crate re-exports the value model from `primi_values` for
//! convenience: `Value`, `Context`, `FnContainer`, `EvalError`,
//! `EvalErrorKind`, `EvalResult`.

mod eval_mode;
mod handlers;
pub mod interpreter;
mod registry;

use std::sync::Once;

pub use eval_mode::EvalMode;
pub use handlers::NodeHandler;
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use registry::HandlerRegistry;

// Re-export value types from primi_values
pub use primi_values::{Context, EvalError, EvalErrorKind, EvalResult, FnContainer, Value};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber driven by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
