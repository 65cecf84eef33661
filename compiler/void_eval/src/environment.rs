//! Lexically chained scopes.
//!
//! A [`Scope`] maps names to values and may point at a parent. Reads walk
//! outward through parents; writes always land in the scope they are made
//! on, so a `let` in a closure never touches an outer binding of the same
//! name.
//!
//! Scopes are shared (`LocalScope`) because function values keep their
//! closure scope alive after the defining call returns.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::ops::Deref;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::value::Value;

/// Single-threaded shared, mutable cell used for scopes.
///
/// Wraps `Rc<RefCell<T>>` so every scope allocation goes through
/// [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn downgrade(&self) -> Weak<RefCell<T>> {
        Rc::downgrade(&self.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A single scope containing variable bindings.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<String, Value>,
    parent: Option<LocalScope<Scope>>,
}

impl Scope {
    pub fn new() -> Self {
        Scope::default()
    }

    pub fn with_parent(parent: LocalScope<Scope>) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Bind `name` in this scope, replacing any existing binding here.
    #[inline]
    pub fn define(&mut self, name: &str, value: Value) {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
        } else {
            self.bindings.insert(name.to_string(), value);
        }
    }

    /// Look `name` up here, then in each enclosing scope.
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        let mut next = self.parent.clone();
        while let Some(scope) = next {
            let scope = scope.borrow();
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            next = scope.parent.clone();
        }
        None
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Handle to a scope chain, as held by the evaluator and by closures.
#[derive(Clone, Default)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh root scope.
    pub fn new() -> Self {
        Environment::default()
    }

    /// A fresh scope whose parent is `outer`.
    pub fn new_enclosed(outer: &Environment) -> Self {
        Environment {
            scope: LocalScope::new(Scope::with_parent(outer.scope.clone())),
        }
    }

    /// Innermost binding of `name`, or `None` if it is bound nowhere.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.scope.borrow().lookup(name)
    }

    /// Like [`lookup`](Self::lookup), but absence reads as `null`.
    pub fn get(&self, name: &str) -> Value {
        self.lookup(name).unwrap_or(Value::Null)
    }

    /// Bind `name` in the innermost scope only.
    #[inline]
    pub fn set(&self, name: &str, value: Value) {
        self.scope.borrow_mut().define(name, value);
    }

    /// Number of bindings in the innermost scope.
    pub fn local_len(&self) -> usize {
        self.scope.borrow().len()
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }
}

impl fmt::Debug for Environment {
    // Bindings may refer back to this scope through closures; only names are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scope = self.scope.borrow();
        let mut names: Vec<&str> = scope.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("has_parent", &scope.parent.is_some())
            .finish()
    }
}

/// Weak registry of every scope a session creates.
///
/// A closure stored in its own scope (directly, or through a chain of
/// closures) forms a reference cycle. Clearing every registered scope when
/// the session ends drops those cycles.
#[derive(Default)]
pub struct ScopeRegistry {
    scopes: RefCell<Vec<Weak<RefCell<Scope>>>>,
}

/// Below this many entries the registry is not pruned.
const MIN_PRUNE_LEN: usize = 64;

impl ScopeRegistry {
    pub fn new() -> Self {
        ScopeRegistry::default()
    }

    pub fn track(&self, env: &Environment) {
        let mut scopes = self.scopes.borrow_mut();
        if scopes.len() >= MIN_PRUNE_LEN && scopes.len().is_power_of_two() {
            scopes.retain(|scope| scope.strong_count() > 0);
        }
        scopes.push(env.scope.downgrade());
    }

    /// Number of tracked scopes that are still alive.
    pub fn live_count(&self) -> usize {
        self.scopes
            .borrow()
            .iter()
            .filter(|scope| scope.strong_count() > 0)
            .count()
    }

    /// Drop the bindings and parent links of every live tracked scope.
    pub fn clear_all(&self) {
        let scopes = std::mem::take(&mut *self.scopes.borrow_mut());
        trace!(count = scopes.len(), "clearing scopes");
        for weak in scopes {
            if let Some(scope) = weak.upgrade() {
                // Take first so that dropping the values happens outside the borrow.
                let (bindings, parent) = {
                    let mut scope = scope.borrow_mut();
                    (std::mem::take(&mut scope.bindings), scope.parent.take())
                };
                drop(bindings);
                drop(parent);
            }
        }
    }
}
