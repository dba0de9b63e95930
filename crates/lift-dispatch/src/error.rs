use lift_core::LiftError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("dispatcher configuration error: {0}")]
    Config(#[from] LiftError),

    #[error("fleet serves {fleet} floors but the dispatcher is configured for {config}")]
    FleetMismatch {
        fleet:  u32,
        config: u32,
    },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
