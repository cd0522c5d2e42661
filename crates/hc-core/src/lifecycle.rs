//! Startup registration and host-driven shutdown.
//!
//! A standalone host calls [`run`], which registers the entry points and
//! parks the thread until the host triggers [`Shutdown`]. Hosts with their
//! own event loop (Node) call [`startup`] and return control instead.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use tracing::info;

use crate::config::HcConfig;
use crate::errors::HcResult;
use crate::registry::{register_entry_points, HostRegistry};

/// Shutdown signal owned by the host.
#[derive(Debug, Default)]
pub struct Shutdown {
    triggered: Mutex<bool>,
    cvar: Condvar,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every thread parked in [`Shutdown::wait`].
    pub fn trigger(&self) {
        let mut triggered = self.lock();
        *triggered = true;
        self.cvar.notify_all();
    }

    pub fn is_triggered(&self) -> bool {
        *self.lock()
    }

    /// Park until [`Shutdown::trigger`] has been called. Returns immediately
    /// if it already was.
    pub fn wait(&self) {
        let mut triggered = self.lock();
        while !*triggered {
            triggered = self
                .cvar
                .wait(triggered)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    // A bool cannot be left half-written, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, bool> {
        self.triggered
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Validate `config` and register both entry points into `registry`.
pub fn startup<R: HostRegistry + ?Sized>(registry: &mut R, config: &HcConfig) -> HcResult<()> {
    config.validate()?;
    register_entry_points(registry, &config.entry_points)?;
    info!(
        json = %config.entry_points.json,
        object = %config.entry_points.object,
        version = %config.reporter.version,
        "health entry points registered"
    );
    Ok(())
}

/// Register the entry points, then park until the host shuts down.
pub fn run<R: HostRegistry + ?Sized>(
    registry: &mut R,
    config: &HcConfig,
    shutdown: &Shutdown,
) -> HcResult<()> {
    startup(registry, config)?;
    shutdown.wait();
    info!("host shutdown received");
    Ok(())
}
