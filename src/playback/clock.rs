//! Host time and per-frame tick capabilities.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
    time::Instant,
};

/// Monotonic millisecond timestamps.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from construction.
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: f64) -> f64 {
        let t = self.now.get() + ms;
        self.now.set(t);
        t
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Identifier of one requested tick callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TickHandle(pub u64);

/// Host frame callback source (display refresh or timer).
pub trait TickSource {
    fn request_tick(&mut self) -> TickHandle;

    /// Cancelling an already fired or unknown handle is a no-op.
    fn cancel_tick(&mut self, handle: TickHandle);
}

#[derive(Debug, Default)]
struct TickLedger {
    next_id: u64,
    pending: Vec<TickHandle>,
    requested: u64,
    cancelled: u64,
}

/// Tick source that only records requests; the test or host loop fires them.
///
/// Clones share the same ledger.
#[derive(Clone, Debug, Default)]
pub struct ManualTicks {
    ledger: Rc<RefCell<TickLedger>>,
}

impl ManualTicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles requested and neither fired nor cancelled.
    pub fn pending(&self) -> Vec<TickHandle> {
        self.ledger.borrow().pending.clone()
    }

    pub fn has_pending(&self) -> bool {
        !self.ledger.borrow().pending.is_empty()
    }

    /// Removes the oldest pending request, as the host does right before invoking it.
    pub fn fire(&self) -> Option<TickHandle> {
        let mut l = self.ledger.borrow_mut();
        if l.pending.is_empty() {
            None
        } else {
            Some(l.pending.remove(0))
        }
    }

    pub fn requested(&self) -> u64 {
        self.ledger.borrow().requested
    }

    pub fn cancelled(&self) -> u64 {
        self.ledger.borrow().cancelled
    }
}

impl TickSource for ManualTicks {
    fn request_tick(&mut self) -> TickHandle {
        let mut l = self.ledger.borrow_mut();
        let h = TickHandle(l.next_id);
        l.next_id += 1;
        l.requested += 1;
        l.pending.push(h);
        h
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        let mut l = self.ledger.borrow_mut();
        let before = l.pending.len();
        l.pending.retain(|h| *h != handle);
        if l.pending.len() != before {
            l.cancelled += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/clock.rs"]
mod tests;
