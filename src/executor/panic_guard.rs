//! Quiet panic capture
//!
//! Installs a process-wide panic hook once. While a thread holds a
//! [`PanicGuard`], panics raised on it are not printed by the hook; they are
//! caught by the enclosing boundary and reported as test faults instead.

use std::cell::Cell;
use std::panic::{self, PanicHookInfo};
use std::sync::Once;

thread_local! {
    static BOUNDARY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

static INSTALL: Once = Once::new();

fn install_hook() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            if BOUNDARY_DEPTH.with(Cell::get) > 0 {
                tracing::trace!("panic captured inside test boundary: {}", info);
                return;
            }
            previous(info);
        }));
    });
}

/// Marks the current thread as running inside a test boundary
#[must_use = "panics are only silenced while the guard is alive"]
pub struct PanicGuard {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl PanicGuard {
    pub fn enter() -> Self {
        install_hook();
        BOUNDARY_DEPTH.with(|depth| depth.set(depth.get() + 1));
        Self {
            _not_send: std::marker::PhantomData,
        }
    }

    /// Whether the current thread is inside at least one boundary
    pub fn is_active() -> bool {
        BOUNDARY_DEPTH.with(Cell::get) > 0
    }
}

impl Drop for PanicGuard {
    fn drop(&mut self) {
        BOUNDARY_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}
