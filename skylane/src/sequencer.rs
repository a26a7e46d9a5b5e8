//! Last-results-win ordering for overlapping requests.

use std::sync::atomic::{AtomicU64, Ordering};

/// Stamp handed out for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket dispenser.
///
/// Each new request takes a ticket; a response may be published only while
/// its ticket is still the most recent one issued.
#[derive(Debug, Default)]
pub struct TicketSequencer {
    latest: AtomicU64,
}

impl TicketSequencer {
    /// Create a sequencer that has issued no tickets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is the most recently issued ticket.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}
