// src/entity/draft.rs
//! Builder for new trains entered through the creation form.
//!
//! A [`TrainDraft`] holds whatever the user has typed so far. It only becomes
//! a [`ValidDraft`] once [`TrainDraft::validate`] confirms the four required
//! fields, at which point every optional field has its default resolved.

use serde::{Deserialize, Serialize};

use super::TrainStatus;

pub const DEFAULT_TIME: &str = "00:00";
pub const DEFAULT_PLATFORM: &str = "TBA";
pub const DEFAULT_CAPACITY: u32 = 400;
pub const DEFAULT_OCCUPIED: u32 = 0;

/// Editable fields of the creation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftField {
    Number,
    Name,
    From,
    To,
    Departure,
    Arrival,
    Platform,
    Capacity,
    Occupied,
    Status,
}

impl DraftField {
    pub const ALL: [DraftField; 10] = [
        DraftField::Number,
        DraftField::Name,
        DraftField::From,
        DraftField::To,
        DraftField::Departure,
        DraftField::Arrival,
        DraftField::Platform,
        DraftField::Capacity,
        DraftField::Occupied,
        DraftField::Status,
    ];

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            DraftField::Number | DraftField::Name | DraftField::From | DraftField::To
        )
    }

    /// Form label
    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Number => "Train Number",
            DraftField::Name => "Train Name",
            DraftField::From => "From",
            DraftField::To => "To",
            DraftField::Departure => "Departure Time",
            DraftField::Arrival => "Arrival Time",
            DraftField::Platform => "Platform",
            DraftField::Capacity => "Capacity",
            DraftField::Occupied => "Occupied",
            DraftField::Status => "Status",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DraftField::Number => write!(f, "number"),
            DraftField::Name => write!(f, "name"),
            DraftField::From => write!(f, "from"),
            DraftField::To => write!(f, "to"),
            DraftField::Departure => write!(f, "departure"),
            DraftField::Arrival => write!(f, "arrival"),
            DraftField::Platform => write!(f, "platform"),
            DraftField::Capacity => write!(f, "capacity"),
            DraftField::Occupied => write!(f, "occupied"),
            DraftField::Status => write!(f, "status"),
        }
    }
}

impl std::str::FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "number" => Ok(DraftField::Number),
            "name" => Ok(DraftField::Name),
            "from" => Ok(DraftField::From),
            "to" => Ok(DraftField::To),
            "departure" => Ok(DraftField::Departure),
            "arrival" => Ok(DraftField::Arrival),
            "platform" => Ok(DraftField::Platform),
            "capacity" => Ok(DraftField::Capacity),
            "occupied" => Ok(DraftField::Occupied),
            "status" => Ok(DraftField::Status),
            _ => Err(s.to_string()),
        }
    }
}

/// In-progress form contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainDraft {
    pub number: Option<String>,
    pub name: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub departure: Option<String>,
    pub arrival: Option<String>,
    pub platform: Option<String>,
    pub capacity: Option<u32>,
    pub occupied: Option<u32>,
    pub status: TrainStatus,
}

impl Default for TrainDraft {
    fn default() -> Self {
        Self {
            number: None,
            name: None,
            from: None,
            to: None,
            departure: None,
            arrival: None,
            platform: None,
            capacity: Some(DEFAULT_CAPACITY),
            occupied: Some(DEFAULT_OCCUPIED),
            status: TrainStatus::default(),
        }
    }
}

/// A draft that passed validation, with all defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub number: String,
    pub name: String,
    pub from: String,
    pub to: String,
    pub departure: String,
    pub arrival: String,
    pub platform: String,
    pub capacity: u32,
    pub occupied: u32,
    pub status: TrainStatus,
}

impl TrainDraft {
    /// Start a draft with the four required fields filled in.
    pub fn new(
        number: impl Into<String>,
        name: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        Self {
            number: Some(number.into()),
            name: Some(name.into()),
            from: Some(from.into()),
            to: Some(to.into()),
            ..Self::default()
        }
    }

    pub fn departure(mut self, departure: impl Into<String>) -> Self {
        self.departure = Some(departure.into());
        self
    }

    pub fn arrival(mut self, arrival: impl Into<String>) -> Self {
        self.arrival = Some(arrival.into());
        self
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    pub fn occupied(mut self, occupied: u32) -> Self {
        self.occupied = Some(occupied);
        self
    }

    pub fn status(mut self, status: TrainStatus) -> Self {
        self.status = status;
        self
    }

    /// Set one field from raw form input.
    ///
    /// Text is stored verbatim. Numeric fields keep the leading integer of
    /// the input and are cleared when there is none. Only an unknown status
    /// is an error; the draft is left untouched in that case.
    pub fn set_field(&mut self, field: DraftField, raw: &str) -> Result<(), String> {
        match field {
            DraftField::Number => self.number = Some(raw.to_string()),
            DraftField::Name => self.name = Some(raw.to_string()),
            DraftField::From => self.from = Some(raw.to_string()),
            DraftField::To => self.to = Some(raw.to_string()),
            DraftField::Departure => self.departure = Some(raw.to_string()),
            DraftField::Arrival => self.arrival = Some(raw.to_string()),
            DraftField::Platform => self.platform = Some(raw.to_string()),
            DraftField::Capacity => self.capacity = parse_leading_int(raw),
            DraftField::Occupied => self.occupied = parse_leading_int(raw),
            DraftField::Status => self.status = raw.trim().parse()?,
        }
        Ok(())
    }

    /// Current value of a field as form text (empty when unset).
    pub fn field_value(&self, field: DraftField) -> String {
        let text = |value: &Option<String>| value.clone().unwrap_or_default();
        let number = |value: Option<u32>| value.map(|n| n.to_string()).unwrap_or_default();
        match field {
            DraftField::Number => text(&self.number),
            DraftField::Name => text(&self.name),
            DraftField::From => text(&self.from),
            DraftField::To => text(&self.to),
            DraftField::Departure => text(&self.departure),
            DraftField::Arrival => text(&self.arrival),
            DraftField::Platform => text(&self.platform),
            DraftField::Capacity => number(self.capacity),
            DraftField::Occupied => number(self.occupied),
            DraftField::Status => self.status.to_string(),
        }
    }

    /// Required fields that are absent or empty, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        let required = [
            (DraftField::Number, &self.number),
            (DraftField::Name, &self.name),
            (DraftField::From, &self.from),
            (DraftField::To, &self.to),
        ];
        required
            .into_iter()
            .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
            .map(|(field, _)| field)
            .collect()
    }

    /// Check the required fields and resolve defaults.
    ///
    /// Empty optional text falls back to its default, and so does a zero
    /// capacity. A zero occupied count is kept.
    pub fn validate(&self) -> Result<ValidDraft, Vec<DraftField>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }

        let or_default = |value: &Option<String>, default: &str| {
            value
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Ok(ValidDraft {
            number: self.number.clone().unwrap_or_default(),
            name: self.name.clone().unwrap_or_default(),
            from: self.from.clone().unwrap_or_default(),
            to: self.to.clone().unwrap_or_default(),
            departure: or_default(&self.departure, DEFAULT_TIME),
            arrival: or_default(&self.arrival, DEFAULT_TIME),
            platform: or_default(&self.platform, DEFAULT_PLATFORM),
            capacity: self
                .capacity
                .filter(|c| *c != 0)
                .unwrap_or(DEFAULT_CAPACITY),
            occupied: self.occupied.unwrap_or(DEFAULT_OCCUPIED),
            status: self.status,
        })
    }
}

/// Parse the leading integer of `raw`.
///
/// Leading whitespace and a sign are accepted and anything after the digits
/// is ignored, so `"12 seats"` reads as 12. Input with no digits, a negative
/// value or a value past `u32::MAX` yields `None`.
pub fn parse_leading_int(raw: &str) -> Option<u32> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let value: u32 = digits.parse().ok()?;
    if negative && value != 0 {
        return None;
    }
    Some(value)
}
