use crate::billing::bill;
use crate::category::VehicleCategory;
use crate::error::ParkingError;
use crate::ledger::pool::ResourcePool;
use crate::reservation::{Reservation, VehicleId};
use chrono::NaiveDateTime;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Active reservations, one per vehicle, each holding one slot of the pool.
///
/// Every mutation goes through `&mut self`, so the slot counter and the
/// active set always change together.
pub struct ReservationLedger {
    pool: ResourcePool,
    reservations: BTreeMap<u64, Reservation>,
    vehicles_index: HashMap<VehicleId, u64>,
    next_seq: u64,
}

impl ReservationLedger {
    pub fn new(pool: ResourcePool) -> ReservationLedger {
        ReservationLedger {
            pool,
            reservations: BTreeMap::new(),
            vehicles_index: HashMap::new(),
            next_seq: 1,
        }
    }

    pub fn open_reservation(
        &mut self,
        vehicle_id: VehicleId,
        category: VehicleCategory,
        now: NaiveDateTime,
    ) -> Result<Reservation, ParkingError> {
        if self.vehicles_index.contains_key(&vehicle_id) {
            return Err(ParkingError::DuplicateVehicle(vehicle_id));
        }
        self.pool.occupy()?;

        let seq = self.next_seq;
        let reservation = Reservation {
            id: Arc::from(format!("B{}", seq)),
            vehicle_id: vehicle_id.clone(),
            category,
            start_time: now,
            end_time: None,
        };
        self.vehicles_index.insert(vehicle_id, seq);
        self.reservations.insert(seq, reservation.clone());
        self.next_seq += 1;

        debug!(
            id = %reservation.id,
            vehicle = %reservation.vehicle_id,
            category = %reservation.category,
            available = self.pool.available_count(),
            "reservation opened"
        );
        self.assert_invariants();
        Ok(reservation)
    }

    /// Ends the vehicle's reservation at `now` and returns the charge with the
    /// closed reservation. `now` must not precede the reservation's start.
    pub fn close_reservation(
        &mut self,
        vehicle_id: &str,
        now: NaiveDateTime,
    ) -> Result<(f64, Reservation), ParkingError> {
        let mut reservation = self
            .vehicles_index
            .remove(vehicle_id)
            .and_then(|seq| self.reservations.remove(&seq))
            .ok_or_else(|| ParkingError::ReservationNotFound(Arc::from(vehicle_id)))?;

        reservation.end(now);
        self.pool.release();
        let amount = bill(&reservation);

        debug!(
            id = %reservation.id,
            vehicle = %reservation.vehicle_id,
            minutes = reservation.duration().0,
            amount,
            available = self.pool.available_count(),
            "reservation closed"
        );
        self.assert_invariants();
        Ok((amount, reservation))
    }

    pub fn available_slots(&self) -> usize {
        self.pool.available_count()
    }

    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    /// Active reservations in booking order.
    pub fn active(&self) -> impl Iterator<Item = &Reservation> {
        self.reservations.values()
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        debug_assert!(
            self.pool.available_count() <= self.pool.capacity(),
            "Available slots exceed capacity"
        );

        debug_assert_eq!(
            self.pool.available_count() + self.reservations.len(),
            self.pool.capacity(),
            "Available slots <-> active reservations invariant violated"
        );

        debug_assert_eq!(
            self.reservations.len(),
            self.vehicles_index.len(),
            "Vehicle index size mismatch"
        );

        debug_assert!(
            self.vehicles_index.iter().all(|(vehicle_id, seq)| {
                self.reservations
                    .get(seq)
                    .map_or(false, |r| r.vehicle_id == *vehicle_id)
            }),
            "Vehicle index <-> reservation invariant violated"
        );

        debug_assert!(
            self.reservations.values().all(Reservation::is_active),
            "Closed reservation left in the active set"
        );

        debug_assert!(
            self.reservations.keys().all(|seq| *seq < self.next_seq),
            "Reservation sequence not monotonic"
        );
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&self) {}
}
