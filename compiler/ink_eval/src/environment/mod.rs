//! Lexical environments.
//!
//! A [`Frame`] is a shared handle to one scope's bindings plus a link to
//! the enclosing frame. Closures keep their defining frame alive by holding
//! a handle, so a frame lives as long as the longest-lived function value
//! that captured it.

use std::fmt;
use std::sync::Arc;

use crate::value::{Composite, Table, Value};


/// Returned by [`Frame::update`] when no frame in the chain binds the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unbound;

#[derive(Clone)]
pub struct Frame(Arc<FrameData>);

struct FrameData {
    vars: Composite,
    parent: Option<Frame>,
}

impl Frame {
    /// A global scope with no parent.
    pub fn root() -> Self {
        Frame(Arc::new(FrameData {
            vars: Composite::new(),
            parent: None,
        }))
    }

    /// An empty scope nested in `self`.
    pub fn child(&self) -> Self {
        Frame::with_bindings(self, Table::default())
    }

    /// A scope nested in `parent`, seeded with `bindings`.
    pub fn with_bindings(parent: &Frame, bindings: Table) -> Self {
        Frame(Arc::new(FrameData {
            vars: Composite::from_table(bindings),
            parent: Some(parent.clone()),
        }))
    }

    /// Look `name` up from the innermost scope outwards.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut frame = self;
        loop {
            if let Some(value) = frame.0.vars.get(name) {
                return Some(value);
            }
            frame = frame.0.parent.as_ref()?;
        }
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.vars.set(name, value);
    }

    /// Overwrite the nearest existing binding of `name`.
    pub fn update(&self, name: &str, value: Value) -> Result<(), Unbound> {
        let mut frame = self;
        loop {
            if frame.0.vars.replace(name, value.clone()) {
                return Ok(());
            }
            frame = frame.0.parent.as_ref().ok_or(Unbound)?;
        }
    }

    /// This scope's own bindings, shared.
    pub fn vars(&self) -> &Composite {
        &self.0.vars
    }

    pub fn parent(&self) -> Option<&Frame> {
        self.0.parent.as_ref()
    }

    pub fn ptr_eq(&self, other: &Frame) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("names", &self.0.vars.keys())
            .field("has_parent", &self.0.parent.is_some())
            .finish()
    }
}
