use std::fmt::{Display, Formatter};

/// Edge a wrapping move crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Boundary {
    Start,
    End,
}

impl Display for Boundary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Boundary::Start => write!(f, "start"),
            Boundary::End => write!(f, "end"),
        }
    }
}

/// Outcome of resolving one directive against a carousel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolutionResult {
    pub target_index: usize,
    pub boundary: Option<Boundary>,
    /// The move wrapped across an edge instead of advancing within bounds.
    pub is_offset: bool,
}

impl ResolutionResult {
    /// Plain move inside the bounds.
    pub fn within(target_index: usize) -> Self {
        Self {
            target_index,
            boundary: None,
            is_offset: false,
        }
    }

    /// Move that wrapped across `boundary`.
    pub fn wrapped(target_index: usize, boundary: Boundary) -> Self {
        Self {
            target_index,
            boundary: Some(boundary),
            is_offset: true,
        }
    }

    /// Move that leaves the index where it is.
    pub fn stay(index: usize) -> Self {
        Self::within(index)
    }
}
