use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::reference::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ParameterStatus {
    Normal,
    Low,
    High,
}

impl ParameterStatus {
    /// `None` for a normal reading.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::Normal => None,
            Self::Low => Some(Direction::Low),
            Self::High => Some(Direction::High),
        }
    }

    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Self::Normal)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Low => "Low",
            Self::High => "High",
        }
    }
}

impl From<Direction> for ParameterStatus {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Low => Self::Low,
            Direction::High => Self::High,
        }
    }
}

/// How far a reading sits outside its reference range. Ordered from least
/// to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Normal,
    /// Deviation under 10%.
    Mild,
    /// Deviation from 10% up to 30%.
    Medium,
    /// Deviation of 30% or more.
    Severe,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Mild => "Mild",
            Self::Medium => "Medium",
            Self::Severe => "Severe",
        }
    }
}

/// Classification of a single lab parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParameterResult {
    pub key: String,
    pub name: String,
    pub value: f64,
    /// Formatted reference range, e.g. `"70 - 99"`.
    pub normal_range: String,
    pub unit: String,
    pub category: String,
    pub status: ParameterStatus,
    pub severity: Severity,
    pub possible_condition: Option<String>,
    /// Distance past the violated bound, as a percentage of that bound,
    /// rounded to one decimal. Zero for normal readings.
    pub deviation_percent: f64,
}

impl ParameterResult {
    pub fn is_abnormal(&self) -> bool {
        self.status.is_abnormal()
    }

    /// Deviation as shown to users, e.g. `"51.5%"`.
    pub fn deviation_display(&self) -> String {
        format!("{:.1}%", self.deviation_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RejectionReason {
    /// The value could not be parsed as a number.
    NotANumber,
    /// The value parsed to NaN or an infinity.
    NotFinite,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotANumber => "not a number",
            Self::NotFinite => "not a finite number",
        }
    }
}

/// A recognised parameter whose value was not usable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RejectedValue {
    pub key: String,
    pub raw: String,
    pub reason: RejectionReason,
}
