//! Host functions callable from Ink code.

use std::fmt;
use std::sync::Arc;

use crate::engine::Context;
use crate::errors::EvalResult;
use crate::value::Value;

/// Signature of a native built-in: the owning context and the evaluated
/// arguments in call order.
pub type NativeFn = dyn Fn(&Arc<Context>, Vec<Value>) -> EvalResult + Send + Sync;

/// A named host function bound to the context it was installed into.
#[derive(Clone)]
pub struct NativeFunction(Arc<NativeInner>);

struct NativeInner {
    name: String,
    func: Box<NativeFn>,
    ctx: Arc<Context>,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<String>,
        ctx: &Arc<Context>,
        func: impl Fn(&Arc<Context>, Vec<Value>) -> EvalResult + Send + Sync + 'static,
    ) -> Self {
        NativeFunction(Arc::new(NativeInner {
            name: name.into(),
            func: Box::new(func),
            ctx: Arc::clone(ctx),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn context(&self) -> &Arc<Context> {
        &self.0.ctx
    }

    /// Run the host function synchronously.
    pub fn call(&self, args: Vec<Value>) -> EvalResult {
        (self.0.func)(&self.0.ctx, args)
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NativeFunction").field(&self.0.name).finish()
    }
}
