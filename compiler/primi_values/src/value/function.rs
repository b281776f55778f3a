//! Closures.

use std::fmt;
use std::rc::Rc;

use primi_ir::{Name, SharedNode};

use crate::capability::Capabilities;
use crate::context::Context;

/// A function value: parameter names, body, and the scope it was built in.
///
/// The body is a shared handle into the syntax tree and the scope is a
/// shared handle too, so a closure sees bindings made in its defining scope
/// after it was built. Immutable once built.
#[derive(Clone)]
pub struct FnContainer(Rc<Closure>);

struct Closure {
    params: Vec<Name>,
    body: SharedNode,
    context: Context,
}

impl FnContainer {
    pub const CAPABILITIES: Capabilities = Capabilities::empty();

    pub fn build(body: SharedNode, params: Vec<Name>, context: Context) -> Self {
        FnContainer(Rc::new(Closure {
            params,
            body,
            context,
        }))
    }

    #[inline]
    pub fn params(&self) -> &[Name] {
        &self.0.params
    }

    #[inline]
    pub fn body(&self) -> &SharedNode {
        &self.0.body
    }

    /// The captured defining scope.
    #[inline]
    pub fn context(&self) -> &Context {
        &self.0.context
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.0.params.len()
    }
}

/// Identity: same body node, same captured scope, same parameters.
impl PartialEq for FnContainer {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
            || (SharedNode::ptr_eq(&self.0.body, &other.0.body)
                && self.0.context.ptr_eq(&other.0.context)
                && self.0.params == other.0.params)
    }
}

impl fmt::Debug for FnContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnContainer")
            .field("params", &self.0.params)
            .finish_non_exhaustive()
    }
}
