//! Property checks over the resolver and navigator.

use proptest::prelude::*;
use slipway_core::model::{CarouselMode, CarouselState, MoveDirective};
use slipway_core::{Navigator, NavigatorSettings, SlideDeck, resolve};

fn arb_mode() -> impl Strategy<Value = CarouselMode> {
    prop_oneof![Just(CarouselMode::Bounded), Just(CarouselMode::Looping)]
}

// A carousel with at least one slide, a valid index and a step no larger
// than the carousel itself.
fn arb_move() -> impl Strategy<Value = (CarouselState, usize, bool)> {
    (1usize..40, 1usize..6, arb_mode())
        .prop_flat_map(|(slide_count, per_view, mode)| {
            (
                0..slide_count,
                1..=slide_count,
                any::<bool>(),
                Just((slide_count, per_view, mode)),
            )
        })
        .prop_map(|(index, steps, forward, (slide_count, per_view, mode))| {
            (
                CarouselState::new(index, slide_count, per_view, mode),
                steps,
                forward,
            )
        })
}

fn relative(steps: usize, forward: bool) -> MoveDirective {
    let steps = i64::try_from(steps).expect("small step");
    if forward {
        MoveDirective::forward(steps)
    } else {
        MoveDirective::backward(steps)
    }
}

proptest! {
    #[test]
    fn relative_moves_stay_in_bounds((state, steps, forward) in arb_move()) {
        let directive = relative(steps, forward);
        if let Some(result) = resolve(&directive, &state) {
            prop_assert!(result.target_index < state.slide_count);
        }
    }

    #[test]
    fn forward_then_back_returns_home_without_wraps(
        (state, steps, _) in arb_move()
    ) {
        let ahead = resolve(&relative(steps, true), &state).expect("forward resolves");
        prop_assume!(!ahead.is_offset && ahead.target_index != state.index);

        let moved = CarouselState { index: ahead.target_index, ..state };
        let back = resolve(&relative(steps, false), &moved).expect("backward resolves");
        prop_assert!(!back.is_offset);
        prop_assert_eq!(back.target_index, state.index);
    }

    #[test]
    fn underfilled_looping_carousels_never_move(
        slide_count in 1usize..6,
        extra in 1usize..4,
        steps in 1usize..10,
        forward in any::<bool>(),
    ) {
        let per_view = slide_count + extra;
        let state = CarouselState::new(0, slide_count, per_view, CarouselMode::Looping);
        let result = resolve(&relative(steps, forward), &state).expect("resolves");
        prop_assert_eq!(result.target_index, 0);
        prop_assert!(result.boundary.is_none());
    }

    #[test]
    fn edge_queries_match_index(start in 0usize..8, slide_count in 1usize..8) {
        let settings = NavigatorSettings { start_at: start, ..NavigatorSettings::default() };
        let nav = Navigator::new(
            SlideDeck::new(slide_count, 1, CarouselMode::Bounded),
            &settings,
        );
        prop_assert_eq!(nav.is_start(), nav.index() == 0);
        prop_assert_eq!(nav.is_end(), nav.index() == slide_count - 1);
    }
}
