use std::fmt::{Display, Formatter};

/// Edge policy of a carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CarouselMode {
    /// Moves past an edge are redirected to the opposite side by plain
    /// index arithmetic.
    #[default]
    Bounded,
    /// Wraparound carousel. Never leaves a short trailing page visible: the
    /// last reachable start is `slide_count - per_view`.
    Looping,
}

impl CarouselMode {
    pub fn is_looping(self) -> bool {
        matches!(self, CarouselMode::Looping)
    }
}

impl Display for CarouselMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CarouselMode::Bounded => write!(f, "bounded"),
            CarouselMode::Looping => write!(f, "looping"),
        }
    }
}

// Runs with `--features serde` or in the workspace build, where
// slipway-core enables the feature.
#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn modes_use_snake_case_names() {
        let mode: CarouselMode =
            serde_json::from_str("\"looping\"").expect("looping parses");
        assert_eq!(mode, CarouselMode::Looping);
        assert_eq!(
            serde_json::to_string(&CarouselMode::Bounded).expect("serialize"),
            "\"bounded\""
        );
    }
}
