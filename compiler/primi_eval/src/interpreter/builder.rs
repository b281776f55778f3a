//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use std::cell::Cell;

use primi_ir::StringInterner;

use super::Interpreter;
use crate::eval_mode::EvalMode;
use crate::registry::HandlerRegistry;

/// Builder for creating Interpreter instances.
///
/// The default mode is `Interpret` and the default registry holds every
/// built-in handler.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    registry: HandlerRegistry,
    mode: EvalMode,
}

impl<'a> InterpreterBuilder<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            registry: HandlerRegistry::new(),
            mode: EvalMode::default(),
        }
    }

    /// Set the evaluation mode.
    #[must_use]
    pub fn mode(mut self, mode: EvalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the handler registry.
    #[must_use]
    pub fn registry(mut self, registry: HandlerRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Interpreter<'a> {
        Interpreter {
            interner: self.interner,
            registry: self.registry,
            mode: self.mode,
            call_depth: Cell::new(0),
        }
    }
}
