use crate::category::VehicleCategory;
use crate::ledger::ledger::ReservationLedger;
use crate::ledger::pool::ResourcePool;
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::num::NonZeroUsize;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn ledger(capacity: usize) -> ReservationLedger {
    ReservationLedger::new(ResourcePool::new(
        NonZeroUsize::new(capacity).expect("capacity must be positive"),
    ))
}

pub fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap()
}

pub fn at(minutes: i64) -> NaiveDateTime {
    t0() + TimeDelta::minutes(minutes)
}

pub fn active_vehicles(ledger: &ReservationLedger) -> Vec<Arc<str>> {
    ledger.active().map(|r| r.vehicle_id.clone()).collect()
}

#[derive(Debug, Clone)]
pub enum Op {
    Open(Arc<str>, VehicleCategory),
    Close(Arc<str>),
}

pub fn arb_vehicle() -> impl Strategy<Value = Arc<str>> {
    prop_oneof![
        Just(id("KA01")),
        Just(id("KA02")),
        Just(id("MH12")),
        Just(id("DL03")),
        Just(id("TN09")),
    ]
}

pub fn arb_category() -> impl Strategy<Value = VehicleCategory> {
    prop_oneof![
        Just(VehicleCategory::Car),
        Just(VehicleCategory::Bike),
        Just(VehicleCategory::Truck),
    ]
}

pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_vehicle(), arb_category()).prop_map(|(v, c)| Op::Open(v, c)),
        arb_vehicle().prop_map(Op::Close),
    ]
}
