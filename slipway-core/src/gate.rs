use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Widget-wide input switch.
///
/// Clones share one flag, so the navigator and other widget operations (such
/// as teardown) serialize against each other through it. While closed, new
/// moves are dropped.
#[derive(Debug, Clone)]
pub struct InputGate {
    enabled: Arc<AtomicBool>,
}

impl Default for InputGate {
    fn default() -> Self {
        Self::new()
    }
}

impl InputGate {
    /// Open gate.
    pub fn new() -> Self {
        Self {
            enabled: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Acquire)
    }

    pub fn enable(&self) {
        self.enabled.store(true, Ordering::Release);
    }

    pub fn disable(&self) {
        self.enabled.store(false, Ordering::Release);
    }

    /// Close the gate if it is open. Returns `false` when it was already
    /// closed, in which case the caller must not proceed.
    pub fn try_close(&self) -> bool {
        self.enabled
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Both handles drive the same flag.
    pub fn shares_with(&self, other: &InputGate) -> bool {
        Arc::ptr_eq(&self.enabled, &other.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_close_only_succeeds_once() {
        let gate = InputGate::new();
        assert!(gate.try_close());
        assert!(!gate.try_close());
        gate.enable();
        assert!(gate.try_close());
    }

    #[test]
    fn clones_observe_each_other() {
        let gate = InputGate::new();
        let widget = gate.clone();
        widget.disable();
        assert!(!gate.is_enabled());
        assert!(gate.shares_with(&widget));
        assert!(!gate.shares_with(&InputGate::new()));
    }
}
