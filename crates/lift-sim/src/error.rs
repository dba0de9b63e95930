use lift_dispatch::DispatchError;
use lift_fleet::FleetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("dispatcher setup failed: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("fleet setup failed: {0}")]
    Fleet(#[from] FleetError),

    #[error("scenario error: {0}")]
    Scenario(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SimResult<T> = Result<T, SimError>;
