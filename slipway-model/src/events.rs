use std::fmt;

use crate::directive::MoveDirective;
use crate::ids::RunId;
use crate::resolution::Boundary;

/// Lifecycle notifications emitted around a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RunEventKind {
    /// Input is closed and the move is about to resolve.
    Before,
    /// The move wrapped past the first slide.
    Start,
    /// The move wrapped past the last slide.
    End,
    /// The index has been updated.
    Run,
    /// The completed move was an offset move.
    Offset,
    /// The transition finished and input is open again.
    After,
}

impl RunEventKind {
    pub const fn name(self) -> &'static str {
        match self {
            RunEventKind::Before => "run.before",
            RunEventKind::Start => "run.start",
            RunEventKind::End => "run.end",
            RunEventKind::Run => "run",
            RunEventKind::Offset => "run.offset",
            RunEventKind::After => "run.after",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "run.before" => Some(RunEventKind::Before),
            "run.start" => Some(RunEventKind::Start),
            "run.end" => Some(RunEventKind::End),
            "run" => Some(RunEventKind::Run),
            "run.offset" => Some(RunEventKind::Offset),
            "run.after" => Some(RunEventKind::After),
            _ => None,
        }
    }
}

impl From<Boundary> for RunEventKind {
    fn from(boundary: Boundary) -> Self {
        match boundary {
            Boundary::Start => RunEventKind::Start,
            Boundary::End => RunEventKind::End,
        }
    }
}

impl fmt::Display for RunEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One notification, carrying the directive of the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunEvent {
    pub kind: RunEventKind,
    pub run_id: RunId,
    pub directive: MoveDirective,
    /// Navigator index at the moment the event fired.
    pub index: usize,
}

impl RunEvent {
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in [
            RunEventKind::Before,
            RunEventKind::Start,
            RunEventKind::End,
            RunEventKind::Run,
            RunEventKind::Offset,
            RunEventKind::After,
        ] {
            assert_eq!(RunEventKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(RunEventKind::from_name("run.unknown"), None);
    }

    #[test]
    fn boundaries_map_to_edge_events() {
        assert_eq!(RunEventKind::from(Boundary::Start), RunEventKind::Start);
        assert_eq!(RunEventKind::from(Boundary::End).name(), "run.end");
    }
}
