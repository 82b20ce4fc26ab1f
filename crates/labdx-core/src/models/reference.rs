use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which side of a reference range a reading fell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Direction {
    Low,
    High,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::High => "high",
        }
    }
}

/// Normal range and condition names for one lab parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReferenceRange {
    /// Parameter identifier used in lab panels (e.g., "hemoglobin").
    pub key: String,
    /// Human-readable name (e.g., "Hemoglobin").
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub unit: String,
    /// Panel grouping (e.g., "CBC", "Liver Function").
    pub category: String,
    /// Condition suggested by a reading below `min`.
    #[serde(default)]
    pub low_condition: Option<String>,
    /// Condition suggested by a reading above `max`.
    #[serde(default)]
    pub high_condition: Option<String>,
}

impl ReferenceRange {
    /// Inclusive on both bounds.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// The bound a reading is measured against when it deviates in `direction`.
    pub fn threshold(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Low => self.min,
            Direction::High => self.max,
        }
    }

    pub fn condition_for(&self, direction: Direction) -> Option<&str> {
        match direction {
            Direction::Low => self.low_condition.as_deref(),
            Direction::High => self.high_condition.as_deref(),
        }
    }

    /// Display form of the range, e.g. `"12 - 15.5"`.
    pub fn normal_range(&self) -> String {
        format!("{} - {}", self.min, self.max)
    }
}
