//! Evaluation errors.
//!
//! [`EvalErrorKind`] carries structured data for each failure; the factory
//! functions below are the public way to build an [`EvalError`]. Spans are
//! attached afterwards by the evaluator with [`EvalError::at`], which keeps
//! the innermost position when an error bubbles through several nodes.

use std::fmt;

use ink_ir::{BinaryOp, Span, UnaryOp};

use crate::value::Value;


/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Which reason code an evaluation error reports under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    Runtime,
    /// A host resource failed (file, stdin, thread).
    System,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names and calls
    UndefinedVariable {
        name: String,
    },
    NotCallable {
        value: String,
    },

    // Operators
    InvalidUnaryOperand {
        op: UnaryOp,
        operand: String,
    },
    UnsupportedOperands {
        op: BinaryOp,
        left: String,
        right: String,
    },
    NonIntegerOperands {
        op: BinaryOp,
        left: String,
        right: String,
    },
    DivisionByZero,
    ModuloByZero,

    // Property access and assignment
    InvalidKey {
        key: String,
    },
    NotIndexable {
        key: String,
        value: String,
    },
    InvalidAssignmentTarget {
        target: String,
    },
    EmptyAssignment {
        name: String,
    },
    NonStringByteAssignment {
        value: String,
    },
    StringIndexOutOfRange {
        index: String,
        len: usize,
    },

    // Built-ins
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    InvalidArgument {
        name: String,
        message: String,
    },
    MathDomain {
        message: String,
    },

    System {
        message: String,
    },
    Custom {
        message: String,
    },
}

impl EvalErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::System { .. } => ErrorCategory::System,
            _ => ErrorCategory::Runtime,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "{name} is not defined"),
            Self::NotCallable { value } => {
                write!(f, "attempted to call a non-function value {value}")
            }
            Self::InvalidUnaryOperand { op, operand } => write!(
                f,
                "cannot apply {} to {operand}, expected a number or boolean",
                op.as_symbol()
            ),
            Self::UnsupportedOperands { op, left, right } => write!(
                f,
                "values {left} and {right} do not support {}",
                op.as_symbol()
            ),
            Self::NonIntegerOperands { op, left, right } => write!(
                f,
                "{} requires integer operands, got {left} and {right}",
                op.as_symbol()
            ),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ModuloByZero => write!(f, "modulus by zero"),
            Self::InvalidKey { key } => {
                write!(f, "cannot use {key} as a property key, expected a string or number")
            }
            Self::NotIndexable { key, value } => {
                write!(f, "cannot access property {key} of {value}")
            }
            Self::InvalidAssignmentTarget { target } => {
                write!(f, "cannot assign to {target}")
            }
            Self::EmptyAssignment { name } => {
                write!(f, "cannot assign _ to {name}")
            }
            Self::NonStringByteAssignment { value } => {
                write!(f, "cannot set string bytes to non-string value {value}")
            }
            Self::StringIndexOutOfRange { index, len } => {
                write!(f, "string index {index} out of range for length {len}")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                write!(f, "{name}() expects {expected} {arg_word}, got {got}")
            }
            Self::InvalidArgument { name, message } => write!(f, "{name}(): {message}"),
            Self::MathDomain { message } => write!(f, "math error, {message}"),
            Self::System { message } | Self::Custom { message } => write!(f, "{message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug)]
pub struct EvalError {
    kind: Box<EvalErrorKind>,
    span: Option<Span>,
}

impl EvalError {
    /// An uncategorized runtime error.
    pub fn new(message: impl Into<String>) -> Self {
        EvalError::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind: Box::new(kind),
            span: None,
        }
    }

    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    pub fn span(&self) -> Option<Span> {
        self.span
    }

    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Attach `span` unless a more specific position is already set.
    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        if self.span.is_none() && !span.is_dummy() {
            self.span = Some(span);
        }
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.category() {
            ErrorCategory::Runtime => "runtime error",
            ErrorCategory::System => "system error",
        };
        match self.span {
            Some(span) => write!(f, "{label} at {span}: {}", self.kind),
            None => write!(f, "{label}: {}", self.kind),
        }
    }
}

impl std::error::Error for EvalError {}

// Names and calls

#[cold]
pub fn undefined_variable(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedVariable {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        value: value.to_string(),
    })
}

// Operators

#[cold]
pub fn invalid_unary_operand(op: UnaryOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidUnaryOperand {
        op,
        operand: operand.to_string(),
    })
}

#[cold]
pub fn unsupported_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperands {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn non_integer_operands(op: BinaryOp, left: &Value, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonIntegerOperands {
        op,
        left: left.to_string(),
        right: right.to_string(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn modulo_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::ModuloByZero)
}

// Property access and assignment

#[cold]
pub fn invalid_key(key: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidKey {
        key: key.to_string(),
    })
}

#[cold]
pub fn not_indexable(key: &str, value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotIndexable {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cold]
pub fn invalid_assignment_target(target: &impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidAssignmentTarget {
        target: target.to_string(),
    })
}

#[cold]
pub fn empty_assignment(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::EmptyAssignment {
        name: name.to_string(),
    })
}

#[cold]
pub fn non_string_byte_assignment(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NonStringByteAssignment {
        value: value.to_string(),
    })
}

#[cold]
pub fn string_index_out_of_range(index: &str, len: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StringIndexOutOfRange {
        index: index.to_string(),
        len,
    })
}

// Built-ins

#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

#[cold]
pub fn wrong_arg_type(name: &str, position: usize, expected: &str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument {
        name: name.to_string(),
        message: format!("argument {position} must be a {expected}, got {got}"),
    })
}

#[cold]
pub fn invalid_argument(name: &str, message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidArgument {
        name: name.to_string(),
        message: message.into(),
    })
}

#[cold]
pub fn math_domain(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MathDomain {
        message: message.into(),
    })
}

#[cold]
pub fn system_error(message: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::System {
        message: message.into(),
    })
}
