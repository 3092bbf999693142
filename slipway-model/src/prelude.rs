//! Snapshot of the types surface for navigator hosts and observers.

pub use super::directive::{Direction, MoveDirective, Steps};
pub use super::events::{RunEvent, RunEventKind};
pub use super::ids::RunId;
pub use super::mode::CarouselMode;
pub use super::resolution::{Boundary, ResolutionResult};
pub use super::state::CarouselState;
