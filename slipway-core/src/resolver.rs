//! Move resolution: where a directive lands and whether it wrapped.
//!
//! Pure functions over a [`CarouselState`] snapshot. `None` means the
//! directive cannot be applied at all and nothing should change.

use slipway_model::{
    Boundary, CarouselState, Direction, MoveDirective, ResolutionResult, Steps,
};

pub fn resolve(
    directive: &MoveDirective,
    state: &CarouselState,
) -> Option<ResolutionResult> {
    let resolution = match &directive.direction {
        Direction::Forward if state.slide_count == 0 => None,
        Direction::Forward => Some(match directive.steps {
            Steps::ToLast => ResolutionResult::within(state.real_length()),
            ref steps => step_forward(state, steps.magnitude()),
        }),
        Direction::Backward if state.slide_count == 0 => None,
        Direction::Backward => Some(match directive.steps {
            Steps::ToFirst => ResolutionResult::within(0),
            ref steps => step_backward(state, steps.magnitude()),
        }),
        // Absolute jumps are trusted: no bounds check, no wrap.
        Direction::Jump => directive.steps.as_index().map(ResolutionResult::within),
        Direction::Unrecognized(_) => None,
    };

    tracing::trace!(
        target: "slipway::resolve",
        directive = %directive,
        index = state.index,
        slide_count = state.slide_count,
        per_view = state.per_view,
        mode = %state.mode,
        ?resolution,
        "resolved move"
    );

    resolution
}

fn step_forward(state: &CarouselState, count: usize) -> ResolutionResult {
    let next = state.index.saturating_add(count);

    if state.mode.is_looping() {
        if state.is_underfilled() {
            return ResolutionResult::stay(state.index);
        }
        if next > state.real_length() {
            return ResolutionResult::wrapped(0, Boundary::End);
        }
    }

    if next > state.length() {
        return ResolutionResult::wrapped(next - state.slide_count, Boundary::End);
    }

    ResolutionResult::within(next)
}

fn step_backward(state: &CarouselState, count: usize) -> ResolutionResult {
    let prev = state.index.checked_sub(count);

    if state.mode.is_looping() {
        if state.is_underfilled() {
            return ResolutionResult::stay(state.index);
        }
        if prev.is_none() {
            return ResolutionResult::wrapped(
                state.slide_count - state.per_view,
                Boundary::Start,
            );
        }
    }

    match prev {
        Some(prev) => ResolutionResult::within(prev),
        // Wrap once from the end. A step larger than the whole carousel
        // would need a second wrap, which is refused.
        None => match (state.slide_count + state.index).checked_sub(count) {
            Some(wrapped) => ResolutionResult::wrapped(wrapped, Boundary::Start),
            None => ResolutionResult::stay(state.index),
        },
    }
}
