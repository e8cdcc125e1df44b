use crate::reservation::Reservation;

/// Charge for a closed reservation: whole minutes parked times the
/// per-minute share of the category's hourly rate.
pub fn bill(reservation: &Reservation) -> f64 {
    let minutes = reservation.duration().0;
    minutes as f64 * (reservation.category.hourly_rate() / 60.0)
}
