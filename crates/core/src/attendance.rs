//! Attendance status vocabulary and its wage weighting.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, InvalidField};

pub const STATUS_FULL_DAY: &str = "full_day";
pub const STATUS_HALF_DAY: &str = "half_day";
pub const STATUS_ABSENT: &str = "absent";

/// All valid attendance statuses, in the order they are documented.
pub const VALID_STATUSES: &[&str] = &[STATUS_FULL_DAY, STATUS_HALF_DAY, STATUS_ABSENT];

/// How much of a day a labourer worked on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkStatus {
    FullDay,
    HalfDay,
    Absent,
}

impl WorkStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkStatus::FullDay => STATUS_FULL_DAY,
            WorkStatus::HalfDay => STATUS_HALF_DAY,
            WorkStatus::Absent => STATUS_ABSENT,
        }
    }

    /// Fraction of the daily wage earned for this status.
    pub fn wage_multiplier(self) -> Decimal {
        match self {
            WorkStatus::FullDay => Decimal::ONE,
            WorkStatus::HalfDay => Decimal::new(5, 1),
            WorkStatus::Absent => Decimal::ZERO,
        }
    }
}

impl fmt::Display for WorkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_FULL_DAY => Ok(WorkStatus::FullDay),
            STATUS_HALF_DAY => Ok(WorkStatus::HalfDay),
            STATUS_ABSENT => Ok(WorkStatus::Absent),
            other => Err(CoreError::invalid(
                InvalidField::Status,
                format!(
                    "invalid status '{other}', use {}",
                    VALID_STATUSES.join(", ")
                ),
            )),
        }
    }
}

/// Decodes the stored text column.
impl TryFrom<String> for WorkStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
