//! Evaluation modes for the Primi interpreter.
//!
//! The mode decides how deep closure calls may nest. Native hosts grow the
//! stack on demand through `primi_stack`, so the default mode has no limit
//! there; embedders that want a hard ceiling pick `Bounded`.

/// Evaluation mode, selected once per `Interpreter`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EvalMode {
    /// Unlimited call depth on native targets.
    #[default]
    Interpret,
    /// Fail with a stack-overflow error past `max_depth` nested calls.
    Bounded { max_depth: usize },
}

impl EvalMode {
    /// Maximum call depth, or `None` for unlimited (native `stacker` fallback).
    ///
    /// - `Interpret`: `None` on native, 200 on WASM
    /// - `Bounded`: the configured depth
    #[inline]
    pub fn max_recursion_depth(&self) -> Option<usize> {
        match self {
            Self::Interpret => {
                #[cfg(target_arch = "wasm32")]
                {
                    Some(200)
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    None
                }
            }
            Self::Bounded { max_depth } => Some(*max_depth),
        }
    }
}

#[cfg(test)]
mod tests;
