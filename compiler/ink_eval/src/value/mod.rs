//! Runtime values.
//!
//! Scalars are stored inline. Strings and composites are handles to shared
//! mutable storage (see [`StrBuffer`] and [`Composite`]): copying a value
//! copies the handle, so assignment through one name is visible through
//! every other name bound to the same buffer.

mod display;
mod shared;

#[cfg(test)]
mod tests;

use std::fmt;
use std::sync::Arc;

use ink_ir::FunctionDef;

use crate::environment::Frame;
use crate::native::NativeFunction;

pub use shared::{Composite, StrBuffer, Table};

#[derive(Clone)]
pub enum Value {
    Number(f64),
    Str(StrBuffer),
    Bool(bool),
    /// `()`
    Null,
    /// `_`: equal to every value.
    Empty,
    Composite(Composite),
    Function(FunctionValue),
    Native(NativeFunction),
    /// A bound but not yet executed call, produced only in tail position.
    Thunk(Box<CallThunk>),
}

/// A function literal closed over the frame it was evaluated in.
#[derive(Clone)]
pub struct FunctionValue {
    pub def: Arc<FunctionDef>,
    pub env: Frame,
}

/// A deferred call: the argument table to seed the callee frame with, and
/// the function whose body runs in it.
#[derive(Clone)]
pub struct CallThunk {
    pub bindings: Table,
    pub function: FunctionValue,
}

impl Value {
    /// A fresh string value owning `bytes`.
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        Value::Str(StrBuffer::new(bytes.into()))
    }

    pub fn composite(table: Table) -> Self {
        Value::Composite(Composite::from_table(table))
    }

    pub fn function(def: Arc<FunctionDef>, env: Frame) -> Self {
        Value::Function(FunctionValue { def, env })
    }

    /// Name used for this value's type in `type()` and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Bool(_) => "boolean",
            Value::Null => "()",
            Value::Empty => "_",
            Value::Composite(_) => "composite",
            Value::Function(_) | Value::Native(_) | Value::Thunk(_) => "function",
        }
    }

    /// Language equality: `_` matches anything, composites compare
    /// structurally, functions by definition identity.
    pub fn equals(&self, other: &Value) -> bool {
        self.equals_within(other, &mut Vec::new())
    }

    /// `comparing` holds the composite pairs already under comparison
    /// further up; meeting one again is a cycle and counts as equal.
    fn equals_within(&self, other: &Value, comparing: &mut Vec<(usize, usize)>) -> bool {
        match (self, other) {
            (Value::Empty, _) | (_, Value::Empty) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a.ptr_eq(b) || a.to_vec() == b.to_vec(),
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Composite(a), Value::Composite(b)) => {
                let pair = (a.addr(), b.addr());
                if a.ptr_eq(b) || comparing.contains(&pair) {
                    return true;
                }
                let left = a.snapshot();
                let right = b.snapshot();
                if left.len() != right.len() {
                    return false;
                }
                comparing.push(pair);
                let equal = left.iter().all(|(key, v)| {
                    right.get(key).is_some_and(|w| v.equals_within(w, comparing))
                });
                comparing.pop();
                equal
            }
            (Value::Function(a), Value::Function(b)) => Arc::ptr_eq(&a.def, &b.def),
            (Value::Native(a), Value::Native(b)) => a.name() == b.name(),
            _ => false,
        }
    }

    /// Canonical string form: strings unquoted at top level, everything else
    /// as [`Display`](fmt::Display) renders it.
    pub fn to_plain_string(&self) -> String {
        match self {
            Value::Str(s) => s.to_string_lossy(),
            other => other.to_string(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(StrBuffer::from(s))
    }
}

impl From<Composite> for Value {
    fn from(c: Composite) -> Self {
        Value::Composite(c)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({self})", self.type_name())
    }
}
