//! Last-request-wins sequencing
//!
//! A caller that issues overlapping route requests (e.g. while the user
//! keeps moving a marker) takes a ticket per request and discards any
//! result whose ticket is no longer current.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier of one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Sequence number of the ticket
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing request tickets
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    /// Create a sequencer with no issued tickets
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issue a ticket, superseding every earlier one
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is the most recently issued one
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}
