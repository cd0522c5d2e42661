//! [`HostRegistry`] over a JS object.
//!
//! Each registered entry point becomes a zero-argument JS function bound as
//! a property of the target object.

use napi::{Env, JsObject};

use hc_core::{EntryPoint, HcError, HcResult, HostRegistry};

use crate::bindings::health;

/// Binds health callables onto `target` (module exports or `globalThis`).
pub struct ObjectRegistry<'a> {
    env: &'a Env,
    target: &'a mut JsObject,
}

impl<'a> ObjectRegistry<'a> {
    pub fn new(env: &'a Env, target: &'a mut JsObject) -> Self {
        Self { env, target }
    }
}

impl HostRegistry for ObjectRegistry<'_> {
    fn register(&mut self, name: &str, entry: EntryPoint) -> HcResult<()> {
        if self.target.has_named_property(name).map_err(host_error)? {
            return Err(HcError::DuplicateEntryPoint {
                name: name.to_string(),
            });
        }
        let function = self
            .env
            .create_function_from_closure(name, move |ctx| health::invoke(ctx.env, entry))
            .map_err(host_error)?;
        self.target
            .set_named_property(name, function)
            .map_err(host_error)
    }
}

fn host_error(err: napi::Error) -> HcError {
    HcError::HostError {
        message: err.reason,
    }
}
