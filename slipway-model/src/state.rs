use crate::mode::CarouselMode;

/// Snapshot of everything the resolver reads for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub index: usize,
    pub slide_count: usize,
    pub per_view: usize,
    pub mode: CarouselMode,
}

impl CarouselState {
    pub fn new(
        index: usize,
        slide_count: usize,
        per_view: usize,
        mode: CarouselMode,
    ) -> Self {
        Self {
            index,
            slide_count,
            per_view,
            mode,
        }
    }

    /// Last index that can start a page without leaving a short trailing
    /// page: `slide_count - per_view`, or `slide_count - 1` when fewer slides
    /// than `per_view` exist.
    pub fn real_length(&self) -> usize {
        self.slide_count
            .checked_sub(self.per_view)
            .unwrap_or_else(|| self.slide_count.saturating_sub(1))
    }

    /// Zero-based run distance, `slide_count - 1`.
    pub fn length(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    /// Fewer slides than fit in one view.
    pub fn is_underfilled(&self) -> bool {
        self.slide_count < self.per_view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_length_prefers_full_last_page() {
        let state = CarouselState::new(0, 10, 3, CarouselMode::Looping);
        assert_eq!(state.real_length(), 7);
    }

    #[test]
    fn real_length_falls_back_to_last_slide_when_underfilled() {
        let state = CarouselState::new(0, 2, 3, CarouselMode::Bounded);
        assert!(state.is_underfilled());
        assert_eq!(state.real_length(), 1);
    }

    #[test]
    fn empty_carousel_has_zero_lengths() {
        let state = CarouselState::new(0, 0, 1, CarouselMode::Bounded);
        assert_eq!(state.real_length(), 0);
        assert_eq!(state.length(), 0);
    }
}
