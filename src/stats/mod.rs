//! Summary counters and occupancy tiering.
//!
//! Everything here is a pure function of the registry contents. The summary
//! counters always cover the whole registry, whatever the toolbar shows.

use serde::Serialize;

use crate::entity::{TrainRecord, TrainStatus};

/// Ratio above which a train counts as nearly full.
pub const HIGH_OCCUPANCY_THRESHOLD: f64 = 0.9;
/// Ratio above which a train counts as busy.
pub const MEDIUM_OCCUPANCY_THRESHOLD: f64 = 0.7;

/// The four dashboard counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Aggregates {
    pub total: usize,
    pub on_time: usize,
    pub delayed: usize,
    pub total_capacity: u64,
}

/// Count trains across the full registry.
pub fn aggregates(trains: &[TrainRecord]) -> Aggregates {
    trains.iter().fold(Aggregates::default(), |mut acc, train| {
        acc.total += 1;
        match train.status {
            TrainStatus::OnTime => acc.on_time += 1,
            TrainStatus::Delayed => acc.delayed += 1,
            TrainStatus::Cancelled | TrainStatus::Boarding => {}
        }
        acc.total_capacity += u64::from(train.capacity);
        acc
    })
}

/// Occupancy severity shown by the bar under each card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyTier {
    Low,
    Medium,
    High,
}

impl OccupancyTier {
    /// Both boundaries are exclusive: exactly 0.9 is medium, exactly 0.7 is
    /// low. NaN compares false everywhere and lands in low.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > HIGH_OCCUPANCY_THRESHOLD {
            OccupancyTier::High
        } else if ratio > MEDIUM_OCCUPANCY_THRESHOLD {
            OccupancyTier::Medium
        } else {
            OccupancyTier::Low
        }
    }
}

impl std::fmt::Display for OccupancyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccupancyTier::Low => write!(f, "low"),
            OccupancyTier::Medium => write!(f, "medium"),
            OccupancyTier::High => write!(f, "high"),
        }
    }
}

/// `occupied / capacity` as a float.
///
/// A zero capacity is not special-cased: the result is `inf` when seats are
/// occupied and `NaN` when none are.
pub fn occupancy_ratio(train: &TrainRecord) -> f64 {
    f64::from(train.occupied) / f64::from(train.capacity)
}

/// Whole-number occupancy percentage, rounded half up.
pub fn occupancy_percent(train: &TrainRecord) -> f64 {
    (occupancy_ratio(train) * 100.0).round()
}

pub fn occupancy_tier(train: &TrainRecord) -> OccupancyTier {
    OccupancyTier::from_ratio(occupancy_ratio(train))
}
