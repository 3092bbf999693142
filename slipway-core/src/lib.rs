//! Carousel move resolution and transition orchestration.
//!
//! [`Navigator`] turns move directives (`">"`, `"<2"`, `"=4"`) into index
//! changes for a carousel, wrapping at the edges according to its
//! [`CarouselMode`](slipway_model::CarouselMode), and reports each move to
//! observers as a sequence of [`RunEvent`](slipway_model::RunEvent)s.

#![allow(missing_docs)]

pub mod bus;
pub mod error;
pub mod gate;
pub mod navigator;
pub mod resolver;
pub mod settings;
pub mod source;
pub mod transition;

pub use bus::RunEventBus;
pub use error::{Result, TransitionError};
pub use gate::InputGate;
pub use navigator::{Navigator, OffsetOutcome};
pub use resolver::resolve;
pub use settings::NavigatorSettings;
pub use source::{SlideDeck, SlideSource};
pub use transition::TransitionTicket;

pub use slipway_model as model;
