//! Last-request-wins bookkeeping for callers of the async services
//!
//! The services always complete; superseded results are dropped here, on the
//! caller side, by comparing the ticket a result was requested with against
//! the most recently issued one.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::ids::RequestId;

/// Handle for one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    /// Monotonic issue order, starting at 1.
    pub sequence: u64,
    pub request_id: RequestId,
}

/// Issues tickets and decides whether a late result is still current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Start a new request, superseding every earlier ticket.
    pub fn begin(&self) -> RequestTicket {
        let sequence = self.latest.fetch_add(1, Ordering::AcqRel) + 1;
        RequestTicket {
            sequence,
            request_id: RequestId::new(),
        }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.sequence
    }

    /// Keep `value` only if `ticket` is still the latest request.
    pub fn accept<T>(&self, ticket: &RequestTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            None
        }
    }

    /// Sequence of the most recently issued ticket (0 before any request).
    pub fn latest_sequence(&self) -> u64 {
        self.latest.load(Ordering::Acquire)
    }
}
