//! Value objects shared across the Slipway navigation crates.
#![allow(missing_docs)]

pub mod directive;
pub mod events;
pub mod ids;
pub mod mode;
pub mod prelude;
pub mod resolution;
pub mod state;

pub use directive::{Direction, MoveDirective, Steps};
pub use events::{RunEvent, RunEventKind};
pub use ids::RunId;
pub use mode::CarouselMode;
pub use resolution::{Boundary, ResolutionResult};
pub use state::CarouselState;
