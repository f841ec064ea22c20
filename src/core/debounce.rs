//! Trailing-edge debouncing for high-frequency page events
//!
//! Scroll fires many times per frame. A [`Debouncer`] lets a handler run only once
//! the event stream has been quiet for a configured period: every call supersedes the
//! one before it, and only the latest scheduled invocation is allowed to fire.
//!
//! # Usage Example
//!
//! ```rust
//! use vlog_vintage::core::debounce::Debouncer;
//!
//! let mut debouncer = Debouncer::new(16);
//!
//! let first = debouncer.schedule();
//! let second = debouncer.schedule();
//!
//! // The earlier timer fires but has been superseded
//! assert!(!debouncer.fire(first));
//! // The latest one runs the handler
//! assert!(debouncer.fire(second));
//! ```

/// Ticket identifying one scheduled invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks which scheduled invocation is still current
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait_ms: u32,
    generation: u64,
    pending: bool,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            generation: 0,
            pending: false,
        }
    }

    /// Quiet period to wait before firing
    pub fn wait_ms(&self) -> u32 {
        self.wait_ms
    }

    /// Register a new call; the returned ticket supersedes all earlier ones.
    ///
    /// Schedule a timer of [`Debouncer::wait_ms`] and hand it the ticket.
    pub fn schedule(&mut self) -> Ticket {
        self.generation += 1;
        self.pending = true;
        Ticket(self.generation)
    }

    /// A timer expired; returns `true` if its ticket is still the latest
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.pending && ticket.0 == self.generation {
            self.pending = false;
            true
        } else {
            false
        }
    }

    /// Drop any pending invocation
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(crate::core::scroll::SCROLL_LOG_DEBOUNCE_MS)
    }
}
