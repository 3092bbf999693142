use serde::{Deserialize, Serialize};
use slipway_model::CarouselMode;

/// Navigator knobs. Every field has a default so partial payloads work.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorSettings {
    /// Slides visible at once. Drives the looping "real length".
    pub per_view: usize,
    /// Edge policy.
    pub mode: CarouselMode,
    /// Index applied when the navigator mounts. Clamped to the last slide.
    pub start_at: usize,
    /// Buffered events per subscriber before slow observers start lagging.
    pub event_capacity: usize,
}

impl Default for NavigatorSettings {
    fn default() -> Self {
        Self {
            per_view: 1,
            mode: CarouselMode::Bounded,
            start_at: 0,
            event_capacity: 64,
        }
    }
}
