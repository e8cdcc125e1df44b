use crate::error::ParkingError;
use std::num::NonZeroUsize;
use tracing::warn;

/// Fungible slot counter. `available` stays within `0..=capacity`.
#[derive(Debug, Clone)]
pub struct ResourcePool {
    capacity: usize,
    available: usize,
}

impl ResourcePool {
    pub fn new(capacity: NonZeroUsize) -> ResourcePool {
        ResourcePool {
            capacity: capacity.get(),
            available: capacity.get(),
        }
    }

    pub fn occupy(&mut self) -> Result<(), ParkingError> {
        if self.available == 0 {
            return Err(ParkingError::CapacityExhausted);
        }
        self.available -= 1;
        Ok(())
    }

    /// Returns one slot to the pool. Releasing into a full pool is ignored.
    pub fn release(&mut self) {
        if self.available < self.capacity {
            self.available += 1;
        } else {
            warn!(capacity = self.capacity, "release on a full pool ignored");
        }
    }

    pub fn available_count(&self) -> usize {
        self.available
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
