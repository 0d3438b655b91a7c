//! Synchronization primitives owned by the engine.

use parking_lot::{Condvar, Mutex};

/// The single evaluation lock.
///
/// Unlike a plain mutex guard, the lock can be given up and taken back by
/// the holder in the middle of a call ([`EvalLock::release_temporarily`]),
/// which module loading needs to run a nested program.
#[derive(Default)]
pub(crate) struct EvalLock {
    held: Mutex<bool>,
    released: Condvar,
}

impl EvalLock {
    pub(crate) fn acquire(&self) {
        let mut held = self.held.lock();
        while *held {
            self.released.wait(&mut held);
        }
        *held = true;
    }

    pub(crate) fn release(&self) {
        *self.held.lock() = false;
        self.released.notify_one();
    }

    /// Acquire, releasing again when the guard drops.
    pub(crate) fn lock(&self) -> EvalGuard<'_> {
        self.acquire();
        EvalGuard { lock: self }
    }

    /// Release a lock held by the caller until the returned guard drops.
    pub(crate) fn release_temporarily(&self) -> Reacquire<'_> {
        self.release();
        Reacquire { lock: self }
    }

    #[cfg(test)]
    pub(crate) fn is_held(&self) -> bool {
        *self.held.lock()
    }
}

pub(crate) struct EvalGuard<'a> {
    lock: &'a EvalLock,
}

impl Drop for EvalGuard<'_> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

pub(crate) struct Reacquire<'a> {
    lock: &'a EvalLock,
}

impl Drop for Reacquire<'_> {
    fn drop(&mut self) {
        self.lock.acquire();
    }
}

/// Count of outstanding background tasks.
#[derive(Default)]
pub(crate) struct TaskCounter {
    live: Mutex<usize>,
    idle: Condvar,
}

impl TaskCounter {
    pub(crate) fn begin(&self) {
        *self.live.lock() += 1;
    }

    pub(crate) fn finish(&self) {
        let mut live = self.live.lock();
        *live = live.saturating_sub(1);
        if *live == 0 {
            self.idle.notify_all();
        }
    }

    pub(crate) fn live(&self) -> usize {
        *self.live.lock()
    }

    /// Block until no tasks remain.
    pub(crate) fn wait_idle(&self) {
        let mut live = self.live.lock();
        while *live > 0 {
            self.idle.wait(&mut live);
        }
    }
}
