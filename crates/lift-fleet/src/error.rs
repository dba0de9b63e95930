use lift_core::{CabinId, Floor};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("cabin {0} not found")]
    CabinNotFound(CabinId),

    #[error("cabin {cabin} starts at {floor}, outside a building with {floor_count} floors")]
    InitialFloorOutOfRange {
        cabin:       CabinId,
        floor:       Floor,
        floor_count: u32,
    },
}

pub type FleetResult<T> = Result<T, FleetError>;
