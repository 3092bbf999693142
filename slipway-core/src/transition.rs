//! One-shot completion signal between the navigator and the renderer.
//!
//! Every accepted move hands out a [`TransitionTicket`]. The rendering side
//! redeems it once its visual transition has finished; redeeming consumes the
//! ticket, so a move can complete at most once. Dropping an unredeemed ticket
//! is reported to the navigator as [`TransitionError::Abandoned`].

use slipway_model::RunId;
use tokio::sync::oneshot;

use crate::error::{Result, TransitionError};

pub(crate) fn channel(run_id: RunId) -> (TransitionTicket, TransitionSignal) {
    let (sender, receiver) = oneshot::channel();
    (
        TransitionTicket { run_id, sender },
        TransitionSignal { run_id, receiver },
    )
}

/// Renderer-side handle for one running move.
#[derive(Debug)]
#[must_use = "the move stays running until its ticket is completed or dropped"]
pub struct TransitionTicket {
    run_id: RunId,
    sender: oneshot::Sender<()>,
}

impl TransitionTicket {
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Report that the visual transition has finished.
    pub fn complete(self) {
        // The navigator may already be gone; nothing is waiting then.
        let _ = self.sender.send(());
    }

    /// The ticket as a zero-argument continuation, for renderers that take
    /// "run this when done" callbacks.
    pub fn into_callback(self) -> impl FnOnce() + Send + 'static {
        move || self.complete()
    }
}

/// Navigator-side end of the ticket.
#[derive(Debug)]
pub(crate) struct TransitionSignal {
    run_id: RunId,
    receiver: oneshot::Receiver<()>,
}

impl TransitionSignal {
    /// Non-blocking check. `Ok(false)` while the renderer is still busy.
    pub(crate) fn try_complete(&mut self) -> Result<bool> {
        match self.receiver.try_recv() {
            Ok(()) => Ok(true),
            Err(oneshot::error::TryRecvError::Empty) => Ok(false),
            Err(oneshot::error::TryRecvError::Closed) => {
                Err(TransitionError::Abandoned(self.run_id))
            }
        }
    }

    pub(crate) async fn wait(&mut self) -> Result<()> {
        (&mut self.receiver)
            .await
            .map_err(|_| TransitionError::Abandoned(self.run_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_until_ticket_completes() {
        let (ticket, mut signal) = channel(RunId::new());
        assert_eq!(signal.try_complete(), Ok(false));
        ticket.complete();
        assert_eq!(signal.try_complete(), Ok(true));
    }

    #[test]
    fn dropped_ticket_is_abandoned() {
        let run_id = RunId::new();
        let (ticket, mut signal) = channel(run_id);
        drop(ticket);
        assert_eq!(signal.try_complete(), Err(TransitionError::Abandoned(run_id)));
    }

    #[test]
    fn callback_form_completes_the_ticket() {
        let (ticket, mut signal) = channel(RunId::new());
        let done = ticket.into_callback();
        done();
        assert_eq!(signal.try_complete(), Ok(true));
    }

    #[tokio::test]
    async fn wait_resolves_once_completed_from_another_task() {
        let (ticket, mut signal) = channel(RunId::new());
        let renderer = tokio::spawn(async move { ticket.complete() });
        assert_eq!(signal.wait().await, Ok(()));
        renderer.await.expect("renderer task");
    }
}
