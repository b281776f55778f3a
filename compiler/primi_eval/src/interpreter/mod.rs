//! Tree-walking interpreter for Primi.
//!
//! # Architecture
//!
//! All evaluation goes through [`Interpreter::eval`], which picks the
//! handler for the node's kind from the `HandlerRegistry` and runs it with
//! stack growth enabled. Handlers recurse back into `eval` for children.
//!
//! Closure invocation goes through [`Interpreter::call`]: the arguments are
//! bound in a fresh child of the closure's captured context, and the body is
//! evaluated there. The interpreter itself holds no scope; the caller passes
//! the context for each evaluation.

mod builder;

pub use builder::InterpreterBuilder;

use std::cell::Cell;

use primi_ir::{Name, Node, StringInterner};
use primi_stack::ensure_sufficient_stack;
use primi_values::{
    arity_mismatch, not_callable, recursion_limit_exceeded, Context, EvalError, EvalResult, Value,
};

use crate::eval_mode::EvalMode;
use crate::registry::HandlerRegistry;

/// Tree-walking interpreter.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    registry: HandlerRegistry,
    mode: EvalMode,
    /// Number of closure calls currently on the stack.
    call_depth: Cell<usize>,
}

impl<'a> Interpreter<'a> {
    /// Interpreter with the built-in handlers in `Interpret` mode.
    pub fn new(interner: &'a StringInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn builder(interner: &'a StringInterner) -> InterpreterBuilder<'a> {
        InterpreterBuilder::new(interner)
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    #[inline]
    pub fn mode(&self) -> &EvalMode {
        &self.mode
    }

    #[inline]
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Intern an identifier from the syntax tree.
    #[inline]
    pub fn intern(&self, name: &str) -> Name {
        self.interner.intern(name)
    }

    #[inline]
    pub fn call_depth(&self) -> usize {
        self.call_depth.get()
    }

    /// Evaluate `node` in `ctx`.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = %node.kind()))]
    pub fn eval(&self, node: &Node, ctx: &Context) -> EvalResult {
        ensure_sufficient_stack(|| self.registry.get(node.kind()).handle(self, node, ctx))
    }

    /// Invoke a function value with already evaluated arguments.
    #[tracing::instrument(level = "debug", skip_all, fields(args = args.len()))]
    pub fn call(&self, callee: &Value, args: &[Value]) -> EvalResult {
        let func = match callee {
            Value::Func(func) => func,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Str(_) | Value::Regex(_) => {
                return Err(not_callable(callee.type_name()));
            }
        };
        if func.arity() != args.len() {
            return Err(arity_mismatch(func.arity(), args.len()));
        }

        let _frame = self.enter_call()?;
        let scope = Context::child(func.context());
        for (&param, arg) in func.params().iter().zip(args) {
            scope.bind(param, arg.clone());
        }
        self.eval(func.body(), &scope)
    }

    /// Check the depth limit and count one more active call.
    fn enter_call(&self) -> Result<CallFrame<'_>, EvalError> {
        let depth = self.call_depth.get();
        if let Some(max_depth) = self.mode.max_recursion_depth() {
            if depth >= max_depth {
                return Err(recursion_limit_exceeded(max_depth));
            }
        }
        self.call_depth.set(depth + 1);
        Ok(CallFrame {
            depth: &self.call_depth,
        })
    }
}

/// Active call; pops itself from the depth count when dropped, including on
/// the error path.
struct CallFrame<'i> {
    depth: &'i Cell<usize>,
}

impl Drop for CallFrame<'_> {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
