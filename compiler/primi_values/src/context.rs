//! Lexical scopes.
//!
//! A `Context` is a shared handle to one scope. Scopes link to their parent,
//! so a chain of handles forms the lexical environment walked by name
//! resolution. Closures keep a `Context` clone of the scope they were built
//! in; a scope lives as long as any handler frame or closure still holds it.
//!
//! Binding always targets the innermost scope. There is no `assign`-through
//! to an outer binding: writing a name that exists further out shadows it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use primi_ir::Name;

use crate::value::Value;

/// A single-threaded scope wrapper for reference-counted interior mutability.
///
/// All scope allocations go through `LocalScope::new()`. The evaluator is
/// single-threaded, so this is `Rc` rather than `Arc`.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus its parent link.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Context>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parent(parent: Context) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    #[inline]
    pub fn define(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Binding in this scope only.
    #[inline]
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    pub fn parent(&self) -> Option<&Context> {
        self.parent.as_ref()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Shared handle to a scope.
///
/// Cloning the handle shares the scope; use [`Context::child`] for a new
/// nested scope.
#[derive(Clone)]
pub struct Context(LocalScope<Scope>);

impl Context {
    /// A fresh outermost scope.
    pub fn global() -> Self {
        Context(LocalScope::new(Scope::new()))
    }

    /// A fresh scope nested in `parent`.
    pub fn child(parent: &Context) -> Self {
        Context(LocalScope::new(Scope::with_parent(parent.clone())))
    }

    /// Resolve `name`, walking outward from this scope. First hit wins.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.0.borrow();
                if let Some(value) = scope.get(name) {
                    return Some(value.clone());
                }
                scope.parent.clone()
            };
            current = parent?;
        }
    }

    /// Bind `name` in this scope, replacing any binding it already has here.
    pub fn bind(&self, name: Name, value: Value) {
        self.0.borrow_mut().define(name, value);
    }

    /// Whether `name` is bound in this scope itself, ignoring parents.
    pub fn is_bound_locally(&self, name: Name) -> bool {
        self.0.borrow().get(name).is_some()
    }

    pub fn parent(&self) -> Option<Context> {
        self.0.borrow().parent.clone()
    }

    /// Number of scopes between this one and the outermost (which is 0).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(scope) = current {
            depth += 1;
            current = scope.parent();
        }
        depth
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Context) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::global()
    }
}

// Scopes can reach themselves through closures they hold, so only the shape
// is printed, never the bound values.
impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.0.borrow().len();
        f.debug_struct("Context")
            .field("depth", &self.depth())
            .field("bindings", &bindings)
            .finish()
    }
}
