use crate::reservation::VehicleId;
use thiserror::Error;

/// Failures of a single ledger operation. None of them mutate the ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParkingError {
    #[error("no available slots")]
    CapacityExhausted,

    #[error("vehicle {0} is already parked")]
    DuplicateVehicle(VehicleId),

    #[error("no booking found for vehicle {0}")]
    ReservationNotFound(VehicleId),
}
