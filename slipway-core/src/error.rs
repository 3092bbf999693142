use slipway_model::RunId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    #[error("transition ticket for run {0} was dropped before completing")]
    Abandoned(RunId),
}

pub type Result<T> = std::result::Result<T, TransitionError>;
