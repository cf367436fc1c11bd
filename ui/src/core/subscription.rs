//! Explicit unsubscribe handles returned by observation capabilities.

use std::any::Any;
use std::fmt;

/// Handle for an active registration (intersection observer, history listener).
///
/// Teardown runs exactly once: on the first call to [`Subscription::unsubscribe`]
/// or when the handle is dropped. Anything passed to [`Subscription::retaining`]
/// (e.g. a JS closure the environment still references) lives until the handle
/// itself is dropped, so it is safe to unsubscribe from inside the callback.
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
    retained: Vec<Box<dyn Any>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
            retained: Vec::new(),
        }
    }

    /// A handle with nothing to tear down.
    pub fn inert() -> Self {
        Self {
            teardown: None,
            retained: Vec::new(),
        }
    }

    /// Keep `value` alive for as long as this handle exists.
    pub fn retaining(mut self, value: impl Any) -> Self {
        self.retained.push(Box::new(value));
        self
    }

    pub fn is_active(&self) -> bool {
        self.teardown.is_some()
    }

    pub fn unsubscribe(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .field("retained", &self.retained.len())
            .finish()
    }
}
