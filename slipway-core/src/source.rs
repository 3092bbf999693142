//! Slide count, per-view and mode providers.
//!
//! The navigator never caches these: they are read again for every move so a
//! host that adds slides or changes its layout between moves is picked up
//! immediately.

use slipway_model::CarouselMode;

use crate::settings::NavigatorSettings;

#[cfg_attr(test, mockall::automock)]
pub trait SlideSource {
    fn slide_count(&self) -> usize;
    fn per_view(&self) -> usize;
    fn mode(&self) -> CarouselMode;
}

/// Plain owned provider for hosts that keep their layout numbers in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDeck {
    pub slide_count: usize,
    pub per_view: usize,
    pub mode: CarouselMode,
}

impl SlideDeck {
    pub fn new(slide_count: usize, per_view: usize, mode: CarouselMode) -> Self {
        Self {
            slide_count,
            per_view: per_view.max(1),
            mode,
        }
    }

    pub fn from_settings(slide_count: usize, settings: &NavigatorSettings) -> Self {
        Self::new(slide_count, settings.per_view, settings.mode)
    }

    pub fn set_slide_count(&mut self, slide_count: usize) {
        self.slide_count = slide_count;
    }

    pub fn set_per_view(&mut self, per_view: usize) {
        self.per_view = per_view.max(1);
    }
}

impl SlideSource for SlideDeck {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn per_view(&self) -> usize {
        self.per_view
    }

    fn mode(&self) -> CarouselMode {
        self.mode
    }
}

impl<T: SlideSource + ?Sized> SlideSource for &T {
    fn slide_count(&self) -> usize {
        (**self).slide_count()
    }

    fn per_view(&self) -> usize {
        (**self).per_view()
    }

    fn mode(&self) -> CarouselMode {
        (**self).mode()
    }
}
