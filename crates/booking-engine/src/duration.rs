//! Dining durations offered by the reservation form.
//!
//! The form offers a closed list of six durations. Anything else maps to one
//! hour rather than failing, and the fallback is logged so unexpected labels
//! show up in test and operator output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the fixed dining durations a guest can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiningDuration {
    ThirtyMinutes,
    #[default]
    OneHour,
    NinetyMinutes,
    TwoHours,
    TwoAndHalfHours,
    ThreeHours,
}

impl DiningDuration {
    /// Every duration, in the order the form lists them.
    pub const ALL: [DiningDuration; 6] = [
        DiningDuration::ThirtyMinutes,
        DiningDuration::OneHour,
        DiningDuration::NinetyMinutes,
        DiningDuration::TwoHours,
        DiningDuration::TwoAndHalfHours,
        DiningDuration::ThreeHours,
    ];

    /// Map a form label to a duration. Unknown labels fall back to one hour.
    pub fn from_label(label: &str) -> Self {
        match Self::lookup(label) {
            Some(d) => d,
            None => {
                log::warn!(
                    "unknown duration label {:?}, falling back to 1 hour",
                    label
                );
                DiningDuration::OneHour
            }
        }
    }

    /// Exact lookup without the one-hour fallback.
    pub fn lookup(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == label.trim())
    }

    /// The label shown in the form and stored on the reservation.
    pub fn label(self) -> &'static str {
        match self {
            DiningDuration::ThirtyMinutes => "30 mins",
            DiningDuration::OneHour => "1 hour",
            DiningDuration::NinetyMinutes => "1.5 hours",
            DiningDuration::TwoHours => "2 hours",
            DiningDuration::TwoAndHalfHours => "2.5 hours",
            DiningDuration::ThreeHours => "3 hours",
        }
    }

    pub fn minutes(self) -> u32 {
        match self {
            DiningDuration::ThirtyMinutes => 30,
            DiningDuration::OneHour => 60,
            DiningDuration::NinetyMinutes => 90,
            DiningDuration::TwoHours => 120,
            DiningDuration::TwoAndHalfHours => 150,
            DiningDuration::ThreeHours => 180,
        }
    }
}

impl From<String> for DiningDuration {
    fn from(value: String) -> Self {
        DiningDuration::from_label(&value)
    }
}

impl From<DiningDuration> for String {
    fn from(value: DiningDuration) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for DiningDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Minute count for a duration label. Unknown labels count as 60 minutes.
pub fn duration_minutes(label: &str) -> u32 {
    DiningDuration::from_label(label).minutes()
}
