use mm_core::CoreError;
use thiserror::Error;

/// Construction-time configuration failures.  All are fatal: the marker is
/// never built.  Runtime conditions (empty queue, scheduler stall) are
/// normal states, not errors.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("default duration must be non-zero")]
    ZeroDefaultDuration,

    #[error("initial position invalid: {0}")]
    InitialPosition(#[from] CoreError),

    #[error("waypoint {index} invalid: {source}")]
    WaypointPosition {
        index: usize,
        source: CoreError,
    },
}

pub type EngineResult<T> = Result<T, EngineError>;
