//! Callback payloads for asynchronous natives.

use ink_eval::{Composite, Value};

fn event(kind: &str) -> Composite {
    let event = Composite::new();
    event.set("type", Value::from(kind));
    event
}

/// `{type: 'data', data: ...}`
pub(crate) fn data(payload: Value) -> Value {
    let event = event("data");
    event.set("data", payload);
    Value::Composite(event)
}

/// `{type: 'end'}`
pub(crate) fn end() -> Value {
    Value::Composite(event("end"))
}

/// `{type: 'error', message: ...}`
pub(crate) fn error(message: impl AsRef<str>) -> Value {
    let event = event("error");
    event.set("message", Value::from(message.as_ref()));
    Value::Composite(event)
}
