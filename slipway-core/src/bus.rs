use std::fmt;

use slipway_model::RunEvent;
use tokio::sync::broadcast;

/// In-process fan-out of run lifecycle events.
///
/// Emission never blocks and never fails: with no subscribers the event is
/// simply discarded, and a subscriber that falls more than `capacity` events
/// behind sees `RecvError::Lagged` on its own receiver.
pub struct RunEventBus {
    sender: broadcast::Sender<RunEvent>,
    capacity: usize,
}

impl fmt::Debug for RunEventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunEventBus")
            .field("capacity", &self.capacity)
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl RunEventBus {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (sender, _) = broadcast::channel(capacity);
        Self { sender, capacity }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RunEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    pub fn emit(&self, event: RunEvent) {
        tracing::trace!(
            target: "slipway::run",
            event = event.name(),
            run_id = %event.run_id,
            index = event.index,
            "emit"
        );
        let _ = self.sender.send(event);
    }
}
