//! Canonical rendering of values.

use std::fmt::{self, Write};

use ink_ir::format_number;

use super::{Composite, Value};

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value(f, self, &mut Vec::new())
    }
}

/// `open` holds the composites being rendered further up; a composite that
/// contains itself renders as `{...}` at the point it recurs.
fn write_value(f: &mut fmt::Formatter<'_>, value: &Value, open: &mut Vec<usize>) -> fmt::Result {
    match value {
        Value::Number(n) => f.write_str(&format_number(*n)),
        Value::Str(s) => write_quoted(f, &s.to_vec()),
        Value::Bool(b) => write!(f, "{b}"),
        Value::Null => f.write_str("()"),
        Value::Empty => f.write_str("_"),
        Value::Composite(c) => write_composite(f, c, open),
        Value::Function(func) => write!(f, "{}", func.def),
        Value::Native(native) => write!(f, "builtin fn {}", native.name()),
        Value::Thunk(thunk) => write!(f, "deferred call of {}", thunk.function.def),
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    f.write_char('\'')?;
    for c in String::from_utf8_lossy(bytes).chars() {
        if c == '\'' || c == '\\' {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('\'')
}

fn write_composite(
    f: &mut fmt::Formatter<'_>,
    composite: &Composite,
    open: &mut Vec<usize>,
) -> fmt::Result {
    if open.contains(&composite.addr()) {
        return f.write_str("{...}");
    }
    let entries = composite.entries();
    if entries.is_empty() {
        return f.write_str("{}");
    }
    open.push(composite.addr());
    f.write_char('{')?;
    for (i, (key, value)) in entries.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{key}: ")?;
        write_value(f, value, open)?;
    }
    open.pop();
    f.write_char('}')
}
