use std::{
    cell::RefCell,
    collections::{HashMap, hash_map::Entry},
};

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// A frame in the chain of variable scopes.
///
/// Each scope owns its own bindings and borrows its parent, so a child can
/// never outlive the scope it was created from. Children are created on entry
/// to a block or function call and dropped when it finishes.
///
/// Bindings sit behind a `RefCell` because a child holds a shared reference
/// to its parent while `let` still has to mutate a binding found there.
#[derive(Debug, Default)]
pub struct Scope<'p> {
    bindings: RefCell<HashMap<String, Value>>,
    parent:   Option<&'p Scope<'p>>,
}

impl Scope<'static> {
    /// Creates an empty root scope with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'p> Scope<'p> {
    /// Creates a child scope whose parent is `self`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{scope::Scope, value::Value};
    ///
    /// let global = Scope::new();
    /// global.define("x", Value::Integer(1), 1).unwrap();
    ///
    /// let child = global.create();
    /// assert_eq!(child.get("x", 1).unwrap(), Value::Integer(1));
    /// ```
    #[must_use]
    pub fn create(&self) -> Scope<'_> {
        Scope { bindings: RefCell::default(),
                parent:   Some(self), }
    }

    /// Binds `name` in this scope's own frame.
    ///
    /// Shadowing a binding of a parent scope is allowed; binding the same
    /// name twice in one frame is not.
    ///
    /// # Errors
    /// `DuplicateDefinition` if `name` is already bound in this frame.
    pub fn define(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        match self.bindings.borrow_mut().entry(name.to_string()) {
            Entry::Occupied(_) => Err(RuntimeError::DuplicateDefinition { name: name.to_string(),
                                                                          line }),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            },
        }
    }

    /// Rebinds the nearest existing `name`, searching from this scope up to
    /// the root. The binding is updated in the frame that owns it.
    ///
    /// # Errors
    /// `UndefinedName` if no scope in the chain binds `name`.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::{scope::Scope, value::Value};
    ///
    /// let global = Scope::new();
    /// global.define("x", Value::Integer(1), 1).unwrap();
    /// {
    ///     let child = global.create();
    ///     child.set("x", Value::Integer(2), 2).unwrap();
    /// }
    ///
    /// assert_eq!(global.get("x", 3).unwrap(), Value::Integer(2));
    /// assert!(global.set("y", Value::Integer(0), 4).is_err());
    /// ```
    pub fn set(&self, name: &str, value: Value, line: usize) -> EvalResult<()> {
        let mut scope = Some(self);

        while let Some(current) = scope {
            if let Some(slot) = current.bindings.borrow_mut().get_mut(name) {
                *slot = value;
                return Ok(());
            }
            scope = current.parent;
        }

        Err(RuntimeError::UndefinedName { name: name.to_string(),
                                          line })
    }

    /// Looks up the nearest binding of `name`, searching from this scope up
    /// to the root.
    ///
    /// # Errors
    /// `UndefinedName` if no scope in the chain binds `name`.
    pub fn get(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.lookup(name)
            .ok_or_else(|| RuntimeError::UndefinedName { name: name.to_string(),
                                                         line })
    }

    /// Returns `true` if `name` is visible from this scope.
    #[cfg(test)]
    fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    fn lookup(&self, name: &str) -> Option<Value> {
        let mut scope = Some(self);

        while let Some(current) = scope {
            if let Some(value) = current.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            scope = current.parent;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn define_rejects_duplicates_in_same_frame() {
        let global = Scope::new();
        global.define("x", Value::Integer(1), 1).unwrap();

        let err = global.define("x", Value::Integer(2), 2).unwrap_err();
        assert!(matches!(err, RuntimeError::DuplicateDefinition { ref name, line: 2 } if name == "x"));
    }

    #[test]
    fn define_may_shadow_parent_binding() {
        let global = Scope::new();
        global.define("x", Value::Integer(1), 1).unwrap();

        let child = global.create();
        child.define("x", Value::Integer(2), 2).unwrap();

        assert_eq!(child.get("x", 3).unwrap(), Value::Integer(2));
        drop(child);
        assert_eq!(global.get("x", 4).unwrap(), Value::Integer(1));
    }

    #[test]
    fn set_updates_the_owning_frame() {
        let global = Scope::new();
        global.define("x", Value::Integer(1), 1).unwrap();

        let child = global.create();
        let grandchild = child.create();
        grandchild.set("x", Value::Bool(true), 2).unwrap();

        assert!(!child.bindings.borrow().contains_key("x"));
        assert!(!grandchild.bindings.borrow().contains_key("x"));
        assert_eq!(global.get("x", 3).unwrap(), Value::Bool(true));
    }

    #[test]
    fn set_prefers_nearest_shadowing_binding() {
        let global = Scope::new();
        global.define("x", Value::Integer(1), 1).unwrap();
        let child = global.create();
        child.define("x", Value::Integer(10), 2).unwrap();

        child.set("x", Value::Integer(11), 3).unwrap();

        assert_eq!(child.get("x", 4).unwrap(), Value::Integer(11));
        assert_eq!(global.get("x", 4).unwrap(), Value::Integer(1));
    }

    #[test]
    fn missing_names_are_undefined() {
        let global = Scope::new();
        let child = global.create();

        assert!(matches!(child.get("nope", 7),
                         Err(RuntimeError::UndefinedName { line: 7, .. })));
        assert!(matches!(child.set("nope", Value::NoValue, 8),
                         Err(RuntimeError::UndefinedName { line: 8, .. })));
        assert!(!child.contains("nope"));
    }

    #[test]
    fn child_bindings_do_not_leak_to_parent() {
        let global = Scope::new();
        {
            let child = global.create();
            child.define("inner", Value::Integer(5), 1).unwrap();
            assert!(child.contains("inner"));
        }
        assert!(!global.contains("inner"));
    }
}
