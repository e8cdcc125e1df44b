use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Car,
    Bike,
    Truck,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown vehicle type `{0}`, expected one of CAR, BIKE, TRUCK")]
pub struct UnknownCategory(pub String);

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Car,
        VehicleCategory::Bike,
        VehicleCategory::Truck,
    ];

    /// Currency units per hour. Billing prorates this per whole minute.
    pub fn hourly_rate(self) -> f64 {
        match self {
            VehicleCategory::Car => 10.0,
            VehicleCategory::Bike => 5.0,
            VehicleCategory::Truck => 20.0,
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleCategory::Car => "CAR",
            VehicleCategory::Bike => "BIKE",
            VehicleCategory::Truck => "TRUCK",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for VehicleCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleCategory::ALL
            .into_iter()
            .find(|c| c.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_table() {
        assert_eq!(10.0, VehicleCategory::Car.hourly_rate());
        assert_eq!(5.0, VehicleCategory::Bike.hourly_rate());
        assert_eq!(20.0, VehicleCategory::Truck.hourly_rate());
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!(Ok(VehicleCategory::Car), "car".parse());
        assert_eq!(Ok(VehicleCategory::Bike), "Bike".parse());
        assert_eq!(Ok(VehicleCategory::Truck), " TRUCK ".parse());
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Err(UnknownCategory("van".to_string())),
            "van".parse::<VehicleCategory>()
        );
    }
}
