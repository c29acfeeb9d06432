//! One-shot provider readiness signal
//!
//! A directions provider may need asynchronous initialization before it can
//! answer queries. The initialization routine marks the gate ready exactly
//! once; any number of waiters are released at that moment.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// Shared readiness flag with async notification
///
/// Cloning yields another handle to the same flag.
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    sender: Arc<watch::Sender<bool>>,
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadinessGate {
    /// Create a gate that is not yet ready
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Create a gate that is already open
    #[must_use]
    pub fn ready() -> Self {
        let gate = Self::new();
        gate.mark_ready();
        gate
    }

    /// Open the gate
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn mark_ready(&self) -> bool {
        self.sender.send_if_modified(|ready| {
            if *ready {
                false
            } else {
                *ready = true;
                true
            }
        })
    }

    /// Whether the gate has been opened
    #[must_use]
    pub fn is_ready(&self) -> bool {
        *self.sender.borrow()
    }

    /// Wait until the gate is open; returns immediately if it already is
    pub async fn wait(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this cannot observe a close
        let _ = receiver.wait_for(|ready| *ready).await;
    }

    /// Wait at most `limit` for the gate; returns whether it opened
    pub async fn wait_timeout(&self, limit: Duration) -> bool {
        tokio::time::timeout(limit, self.wait()).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!ReadinessGate::new().is_ready());
        assert!(!ReadinessGate::default().is_ready());
    }

    #[test]
    fn mark_ready_is_idempotent() {
        let gate = ReadinessGate::new();
        assert!(gate.mark_ready());
        assert!(!gate.mark_ready());
        assert!(gate.is_ready());
    }

    #[test]
    fn clones_share_state() {
        let gate = ReadinessGate::new();
        let handle = gate.clone();
        handle.mark_ready();
        assert!(gate.is_ready());
    }

    #[tokio::test]
    async fn ready_gate_does_not_block() {
        let gate = ReadinessGate::ready();
        assert!(gate.wait_timeout(Duration::from_millis(10)).await);
    }

    #[tokio::test]
    async fn waiters_are_released_on_mark() {
        let gate = ReadinessGate::new();
        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait_timeout(Duration::from_secs(5)).await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        gate.mark_ready();

        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn closed_gate_times_out() {
        let gate = ReadinessGate::new();
        assert!(!gate.wait_timeout(Duration::from_millis(20)).await);
    }
}
