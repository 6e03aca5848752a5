use chrono::{DateTime, NaiveDate, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::ValidationError;

/// A reserved calendar date. One booking per date; `request_id` is the
/// client-generated idempotency token for the submission that created it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub date: NaiveDate,
    pub request_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Per-day operating configuration for a garage, keyed by the owner email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarageSettings {
    pub email: String,
    pub hours: BTreeMap<String, DayHours>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHours {
    pub open_time: String,
    pub close_time: String,
    pub slot_count: u32,
}

pub const DAYS_OF_WEEK: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const MAX_SLOTS_PER_DAY: u32 = 24;

lazy_static! {
    static ref TIME_OF_DAY: Regex = Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
}

/// Validates a business-hours map: weekday-name keys only, `HH:MM` open and
/// close times, slot count between 1 and 24.
pub fn validate_hours(hours: &BTreeMap<String, DayHours>) -> Result<(), ValidationError> {
    for (day, day_hours) in hours {
        if !DAYS_OF_WEEK.contains(&day.as_str()) {
            return Err(ValidationError::new("unknown_weekday"));
        }
        if !TIME_OF_DAY.is_match(&day_hours.open_time)
            || !TIME_OF_DAY.is_match(&day_hours.close_time)
        {
            return Err(ValidationError::new("invalid_time"));
        }
        if day_hours.slot_count == 0 || day_hours.slot_count > MAX_SLOTS_PER_DAY {
            return Err(ValidationError::new("invalid_slot_count"));
        }
    }
    Ok(())
}

impl GarageSettings {
    /// The defaults the account form starts from: 09:00-17:00, 8 slots,
    /// every day of the week.
    pub fn default_for(email: impl Into<String>) -> Self {
        let hours = DAYS_OF_WEEK
            .iter()
            .map(|day| {
                (
                    day.to_string(),
                    DayHours {
                        open_time: "09:00".into(),
                        close_time: "17:00".into(),
                        slot_count: 8,
                    },
                )
            })
            .collect();
        Self {
            email: email.into(),
            hours,
        }
    }
}
