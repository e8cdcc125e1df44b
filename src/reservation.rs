use crate::category::VehicleCategory;
use crate::time::Minutes;
use chrono::NaiveDateTime;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;
use tabled::Tabled;

pub type VehicleId = Arc<str>;
pub type ReservationId = Arc<str>;

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: ReservationId,
    pub vehicle_id: VehicleId,
    pub category: VehicleCategory,
    pub start_time: NaiveDateTime,
    pub end_time: Option<NaiveDateTime>,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.end_time.is_none()
    }

    /// Whole minutes parked. Zero while the reservation is still active.
    pub fn duration(&self) -> Minutes {
        self.end_time
            .map(|end| Minutes::between(self.start_time, end))
            .unwrap_or_default()
    }

    pub(crate) fn end(&mut self, now: NaiveDateTime) {
        debug_assert!(self.is_active(), "Reservation {} ended twice", self.id);
        self.end_time = Some(now);
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.id, self.vehicle_id, self.category)
    }
}

#[derive(Tabled)]
pub struct ReservationRow {
    #[tabled(rename = "Booking")]
    id: String,
    #[tabled(rename = "Vehicle")]
    vehicle_id: String,
    #[tabled(rename = "Type")]
    category: String,
    #[tabled(rename = "Since")]
    start_time: String,
    #[tabled(rename = "Rate/h")]
    rate: String,
}

impl From<&Reservation> for ReservationRow {
    fn from(r: &Reservation) -> Self {
        ReservationRow {
            id: r.id.to_string(),
            vehicle_id: r.vehicle_id.to_string(),
            category: r.category.to_string(),
            start_time: r.start_time.format("%Y-%m-%d %H:%M").to_string(),
            rate: format!("{:.2}", r.category.hourly_rate()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn reservation(end_after: Option<i64>) -> Reservation {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(8, 15, 0))
            .unwrap();
        Reservation {
            id: Arc::from("B1"),
            vehicle_id: Arc::from("KA01"),
            category: VehicleCategory::Car,
            start_time: start,
            end_time: end_after.map(|m| start + TimeDelta::minutes(m)),
        }
    }

    #[test]
    fn test_active_has_no_duration() {
        let r = reservation(None);
        assert!(r.is_active());
        assert_eq!(Minutes(0), r.duration());
    }

    #[test]
    fn test_closed_duration() {
        let r = reservation(Some(125));
        assert!(!r.is_active());
        assert_eq!(Minutes(125), r.duration());
    }

    #[test]
    fn test_row() {
        let row = ReservationRow::from(&reservation(None));
        assert_eq!("B1", row.id);
        assert_eq!("KA01", row.vehicle_id);
        assert_eq!("CAR", row.category);
        assert_eq!("2024-03-01 08:15", row.start_time);
        assert_eq!("10.00", row.rate);
    }
}
