//! Move orchestration for a single carousel.
//!
//! A [`Navigator`] is either idle or running one move. [`Navigator::make`]
//! closes the shared input gate, resolves the directive, applies the new
//! index and emits the entry events synchronously, then hands back a
//! [`TransitionTicket`]. The move stays running until the renderer redeems
//! that ticket and the host drives the exit step through
//! [`Navigator::poll_transition`] or [`Navigator::settle`].
//!
//! Event order for one move:
//!
//! ```text
//! run.before -> [run.start | run.end] -> run    (inside make)
//! [run.offset] -> run.after                     (on completion)
//! ```

use slipway_model::{
    Boundary, CarouselState, Direction, MoveDirective, RunEvent, RunEventKind,
    RunId,
};
use tokio::sync::broadcast;

use crate::bus::RunEventBus;
use crate::gate::InputGate;
use crate::resolver;
use crate::settings::NavigatorSettings;
use crate::source::SlideSource;
use crate::transition::{self, TransitionSignal, TransitionTicket};

/// The wrap recorded by the last offset move. Lives until that move's
/// completion step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetOutcome {
    pub run_id: RunId,
    pub boundary: Boundary,
}

#[derive(Debug)]
enum Phase {
    Idle,
    Running(ActiveRun),
}

#[derive(Debug)]
struct ActiveRun {
    run_id: RunId,
    signal: TransitionSignal,
}

#[derive(Debug)]
pub struct Navigator<S> {
    source: S,
    index: usize,
    start_at: usize,
    gate: InputGate,
    bus: RunEventBus,
    phase: Phase,
    directive: Option<MoveDirective>,
    offset: Option<OffsetOutcome>,
}

impl<S: SlideSource> Navigator<S> {
    /// Navigator with its own, initially open, input gate.
    ///
    /// Only `start_at` and `event_capacity` are read from `settings`. Slide
    /// count, per-view and mode always come from `source`; build it with
    /// [`SlideDeck::from_settings`](crate::SlideDeck::from_settings) to use
    /// the layout fields of the same settings.
    pub fn new(source: S, settings: &NavigatorSettings) -> Self {
        Self::with_gate(source, settings, InputGate::new())
    }

    /// Navigator that shares `gate` with the rest of the widget.
    pub fn with_gate(
        source: S,
        settings: &NavigatorSettings,
        gate: InputGate,
    ) -> Self {
        let mut navigator = Self {
            source,
            index: 0,
            start_at: settings.start_at,
            gate,
            bus: RunEventBus::new(settings.event_capacity),
            phase: Phase::Idle,
            directive: None,
            offset: None,
        };
        navigator.mount();
        navigator
    }

    /// Reset to the configured start index and forget any recorded offset.
    ///
    /// Ignored while a move is running; the running move keeps its index
    /// and offset outcome until its completion step.
    pub fn mount(&mut self) {
        if let Phase::Running(active) = &self.phase {
            tracing::debug!(
                target: "slipway::run",
                running = %active.run_id,
                "mount ignored: transition still running"
            );
            return;
        }
        let last = self.source.slide_count().saturating_sub(1);
        self.index = self.start_at.min(last);
        self.offset = None;
        tracing::debug!(
            target: "slipway::run",
            index = self.index,
            slide_count = self.source.slide_count(),
            "navigator mounted"
        );
    }

    /// Start a move.
    ///
    /// Returns `None`, with no state change and no events, while another
    /// move is running or the input gate is closed.
    pub fn make(
        &mut self,
        directive: impl Into<MoveDirective>,
    ) -> Option<TransitionTicket> {
        let directive = directive.into();

        if let Phase::Running(active) = &self.phase {
            tracing::debug!(
                target: "slipway::run",
                directive = %directive,
                running = %active.run_id,
                "move dropped: transition still running"
            );
            return None;
        }
        if !self.gate.try_close() {
            tracing::debug!(
                target: "slipway::run",
                directive = %directive,
                "move dropped: input disabled"
            );
            return None;
        }

        let run_id = RunId::new();
        let (ticket, signal) = transition::channel(run_id);
        self.directive = Some(directive.clone());

        self.emit(RunEventKind::Before, run_id, &directive);
        self.apply(run_id, &directive);
        self.emit(RunEventKind::Run, run_id, &directive);

        self.phase = Phase::Running(ActiveRun { run_id, signal });
        Some(ticket)
    }

    fn apply(&mut self, run_id: RunId, directive: &MoveDirective) {
        let state = self.state();
        let Some(resolution) = resolver::resolve(directive, &state) else {
            tracing::debug!(
                target: "slipway::run",
                %run_id,
                directive = %directive,
                index = self.index,
                "move resolved to nothing"
            );
            return;
        };

        if resolution.is_offset
            && let Some(boundary) = resolution.boundary
        {
            self.offset = Some(OffsetOutcome { run_id, boundary });
        }

        tracing::debug!(
            target: "slipway::run",
            %run_id,
            directive = %directive,
            from = self.index,
            to = resolution.target_index,
            offset = resolution.is_offset,
            "move applied"
        );
        self.index = resolution.target_index;

        if let Some(boundary) = resolution.boundary {
            self.emit(boundary.into(), run_id, directive);
        }
    }

    /// Run the completion step if the renderer has finished. Returns `true`
    /// when a running move was closed by this call.
    ///
    /// A dropped ticket closes the move as well, so an abandoned transition
    /// can never keep input disabled.
    pub fn poll_transition(&mut self) -> bool {
        let Phase::Running(active) = &mut self.phase else {
            return false;
        };
        match active.signal.try_complete() {
            Ok(false) => return false,
            Ok(true) => {}
            Err(err) => {
                tracing::warn!(target: "slipway::run", error = %err, "closing abandoned move");
            }
        }
        self.finish();
        true
    }

    /// Wait for the running move's ticket and run the completion step.
    /// Returns `false` immediately when idle.
    pub async fn settle(&mut self) -> bool {
        let Phase::Running(active) = &mut self.phase else {
            return false;
        };
        if let Err(err) = active.signal.wait().await {
            tracing::warn!(target: "slipway::run", error = %err, "closing abandoned move");
        }
        self.finish();
        true
    }

    fn finish(&mut self) {
        let Phase::Running(active) =
            std::mem::replace(&mut self.phase, Phase::Idle)
        else {
            return;
        };
        let Some(directive) = self.directive.clone() else {
            self.gate.enable();
            return;
        };

        if self.is_offset(&Direction::Backward)
            || self.is_offset(&Direction::Forward)
        {
            self.emit(RunEventKind::Offset, active.run_id, &directive);
        }
        self.offset = None;

        self.emit(RunEventKind::After, active.run_id, &directive);
        self.gate.enable();
    }

    fn emit(&self, kind: RunEventKind, run_id: RunId, directive: &MoveDirective) {
        self.bus.emit(RunEvent {
            kind,
            run_id,
            directive: directive.clone(),
            index: self.index,
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RunEvent> {
        self.bus.subscribe()
    }

    /// Handle to the input gate this navigator closes while running.
    pub fn gate(&self) -> InputGate {
        self.gate.clone()
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running(_))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Directive of the running move, or of the last one once idle.
    pub fn directive(&self) -> Option<&MoveDirective> {
        self.directive.as_ref()
    }

    pub fn is_start(&self) -> bool {
        self.index == 0
    }

    /// `false` for an empty carousel.
    pub fn is_end(&self) -> bool {
        self.source
            .slide_count()
            .checked_sub(1)
            .is_some_and(|last| self.index == last)
    }

    /// The current move wrapped and travelled in `direction`.
    pub fn is_offset(&self, direction: &Direction) -> bool {
        self.offset.is_some()
            && self
                .directive
                .as_ref()
                .is_some_and(|directive| &directive.direction == direction)
    }

    pub fn offset(&self) -> Option<OffsetOutcome> {
        self.offset
    }

    /// Zero-based run distance, `slide_count - 1`.
    pub fn length(&self) -> usize {
        self.state().length()
    }

    pub fn real_length(&self) -> usize {
        self.state().real_length()
    }

    /// What the resolver sees for the next move.
    pub fn state(&self) -> CarouselState {
        CarouselState::new(
            self.index,
            self.source.slide_count(),
            self.source.per_view().max(1),
            self.source.mode(),
        )
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
