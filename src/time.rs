use chrono::NaiveDateTime;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, Ord, Eq, PartialEq, PartialOrd)]
pub struct Minutes(pub u64);

impl Minutes {
    /// Whole minutes from `start` to `end`, partial minutes truncated.
    /// `end` must not precede `start`; a negative span collapses to zero.
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Minutes {
        Minutes(u64::try_from((end - start).num_minutes()).unwrap_or(0))
    }
}

impl fmt::Display for Minutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.0 / 60;
        let mins = self.0 % 60;
        write!(f, "{}h {:02}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap()
    }

    #[test]
    fn test_between_truncates_partial_minutes() {
        assert_eq!(Minutes(90), Minutes::between(at(9, 0, 0), at(10, 30, 59)));
        assert_eq!(Minutes(0), Minutes::between(at(9, 0, 0), at(9, 0, 59)));
    }

    #[test]
    fn test_between_spans_midnight() {
        let start = at(23, 50, 0);
        assert_eq!(Minutes(25), Minutes::between(start, start + TimeDelta::minutes(25)));
    }

    #[test]
    fn test_between_reversed_is_zero() {
        assert_eq!(Minutes(0), Minutes::between(at(10, 0, 0), at(9, 0, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!("0h 00m", Minutes(0).to_string());
        assert_eq!("1h 30m", Minutes(90).to_string());
        assert_eq!("26h 05m", Minutes(1565).to_string());
    }
}
