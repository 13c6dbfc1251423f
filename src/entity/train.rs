// src/entity/train.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TrainStatus {
    #[default]
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
    Cancelled,
    Boarding,
}

impl TrainStatus {
    /// All statuses in the order the creation form offers them.
    pub const ALL: [TrainStatus; 4] = [
        TrainStatus::OnTime,
        TrainStatus::Delayed,
        TrainStatus::Boarding,
        TrainStatus::Cancelled,
    ];
}

impl std::fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrainStatus::OnTime => write!(f, "On Time"),
            TrainStatus::Delayed => write!(f, "Delayed"),
            TrainStatus::Cancelled => write!(f, "Cancelled"),
            TrainStatus::Boarding => write!(f, "Boarding"),
        }
    }
}

impl std::str::FromStr for TrainStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect();
        match normalized.as_str() {
            "ontime" => Ok(TrainStatus::OnTime),
            "delayed" => Ok(TrainStatus::Delayed),
            "cancelled" | "canceled" => Ok(TrainStatus::Cancelled),
            "boarding" => Ok(TrainStatus::Boarding),
            _ => Err(s.to_string()),
        }
    }
}

/// A single train as shown on the dashboard.
///
/// Nothing ties `occupied` to `capacity` or `delay` to `status`; both pairs
/// are stored exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainRecord {
    pub id: String,
    pub number: String,
    pub name: String,
    pub status: TrainStatus,
    pub departure: String,
    pub arrival: String,
    pub from: String,
    pub to: String,
    pub platform: String,
    pub capacity: u32,
    pub occupied: u32,
    /// Minutes behind schedule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
}

impl TrainRecord {
    /// Delay worth displaying. A zero delay is treated like no delay.
    pub fn visible_delay(&self) -> Option<u32> {
        self.delay.filter(|d| *d != 0)
    }
}
