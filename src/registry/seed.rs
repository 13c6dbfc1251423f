// src/registry/seed.rs
//! The trains every session starts with.

use crate::entity::{TrainRecord, TrainStatus};

#[allow(clippy::too_many_arguments)]
fn train(
    id: &str,
    number: &str,
    name: &str,
    status: TrainStatus,
    departure: &str,
    arrival: &str,
    from: &str,
    to: &str,
    platform: &str,
    capacity: u32,
    occupied: u32,
    delay: Option<u32>,
) -> TrainRecord {
    TrainRecord {
        id: id.to_string(),
        number: number.to_string(),
        name: name.to_string(),
        status,
        departure: departure.to_string(),
        arrival: arrival.to_string(),
        from: from.to_string(),
        to: to.to_string(),
        platform: platform.to_string(),
        capacity,
        occupied,
        delay,
    }
}

/// The five seed trains, in display order.
pub fn seed() -> Vec<TrainRecord> {
    vec![
        train(
            "1",
            "EXP-101",
            "Express Premier",
            TrainStatus::OnTime,
            "08:30",
            "14:45",
            "New York",
            "Boston",
            "A3",
            400,
            342,
            None,
        ),
        train(
            "2",
            "RAP-205",
            "Rapid Transit",
            TrainStatus::Delayed,
            "09:15",
            "11:30",
            "Chicago",
            "Detroit",
            "B7",
            300,
            287,
            Some(25),
        ),
        train(
            "3",
            "LOC-403",
            "Local Express",
            TrainStatus::Boarding,
            "10:00",
            "16:20",
            "Los Angeles",
            "San Francisco",
            "C2",
            500,
            456,
            None,
        ),
        train(
            "4",
            "INT-701",
            "Interstate Fast",
            TrainStatus::OnTime,
            "11:45",
            "19:10",
            "Seattle",
            "Portland",
            "A5",
            350,
            198,
            None,
        ),
        train(
            "5",
            "EXP-309",
            "Coast Express",
            TrainStatus::Cancelled,
            "13:20",
            "18:55",
            "Miami",
            "Orlando",
            "-",
            450,
            0,
            None,
        ),
    ]
}
