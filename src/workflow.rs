use crate::client::BookingApi;
use crate::dates::{booking_window, weekday_name};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("{0} is already booked")]
    DateUnavailable(NaiveDate),
    #[error("no submission is in flight")]
    NoSubmission,
}

/// One entry of the 7-day booking window as the booking page renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySlot {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub available: bool,
}

/// Per-submission outcome on the confirmation screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pending,
    Confirmed { notification_sent: bool },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Browsing,
    Confirmation {
        date: NaiveDate,
        request_id: Uuid,
        outcome: Outcome,
    },
}

/// Client-side booking orchestration.
///
/// Selecting an open date commits the UI to a confirmation screen *before*
/// the submission request resolves; the submission carries a client-generated
/// idempotency token so a manual retry cannot double-insert. A failed
/// bookings read degrades to an empty booked set (fails open).
#[derive(Debug)]
pub struct BookingWorkflow {
    booked: BTreeSet<NaiveDate>,
    notice: Option<String>,
    screen: Screen,
}

impl Default for BookingWorkflow {
    fn default() -> Self {
        Self {
            booked: BTreeSet::new(),
            notice: None,
            screen: Screen::Browsing,
        }
    }
}

impl BookingWorkflow {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn booked_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.booked
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub async fn load<A: BookingApi + Sync>(&mut self, api: &A) {
        match api.booked_dates().await {
            Ok(dates) => {
                self.booked = dates.into_iter().collect();
                self.notice = None;
            }
            Err(err) => {
                self.booked.clear();
                self.notice = Some(format!("Error loading bookings: {err}"));
            }
        }
    }

    /// The selectable window: booked dates render as unavailable.
    pub fn availability(&self, today: NaiveDate) -> Vec<DaySlot> {
        booking_window(today)
            .into_iter()
            .map(|date| DaySlot {
                date,
                weekday: weekday_name(date),
                available: !self.booked.contains(&date),
            })
            .collect()
    }

    /// Optimistic transition to the confirmation screen. No request has been
    /// issued yet when this returns; the caller follows up with [`submit`].
    ///
    /// [`submit`]: BookingWorkflow::submit
    pub fn begin_booking(&mut self, date: NaiveDate) -> Result<Uuid, WorkflowError> {
        if self.booked.contains(&date) {
            return Err(WorkflowError::DateUnavailable(date));
        }
        let request_id = Uuid::new_v4();
        self.screen = Screen::Confirmation {
            date,
            request_id,
            outcome: Outcome::Pending,
        };
        Ok(request_id)
    }

    /// Resolves the pending submission against the server. Success marks the
    /// date booked locally; failure stays on the confirmation screen with the
    /// error and a retry path.
    pub async fn submit<A: BookingApi + Sync>(&mut self, api: &A) -> Result<(), WorkflowError> {
        let (date, request_id) = match &self.screen {
            Screen::Confirmation {
                date,
                request_id,
                outcome: Outcome::Pending,
            } => (*date, *request_id),
            _ => return Err(WorkflowError::NoSubmission),
        };

        let outcome = match api.create_booking(date, request_id).await {
            Ok(result) => {
                self.booked.insert(date);
                Outcome::Confirmed {
                    notification_sent: result.notification_sent,
                }
            }
            Err(err) => Outcome::Failed {
                error: err.to_string(),
            },
        };
        self.screen = Screen::Confirmation {
            date,
            request_id,
            outcome,
        };
        Ok(())
    }

    pub async fn book<A: BookingApi + Sync>(
        &mut self,
        api: &A,
        date: NaiveDate,
    ) -> Result<(), WorkflowError> {
        self.begin_booking(date)?;
        self.submit(api).await
    }

    /// Re-issues a failed submission with the same idempotency token.
    pub async fn retry<A: BookingApi + Sync>(&mut self, api: &A) -> Result<(), WorkflowError> {
        match &self.screen {
            Screen::Confirmation {
                date,
                request_id,
                outcome: Outcome::Failed { .. },
            } => {
                self.screen = Screen::Confirmation {
                    date: *date,
                    request_id: *request_id,
                    outcome: Outcome::Pending,
                };
                self.submit(api).await
            }
            _ => Err(WorkflowError::NoSubmission),
        }
    }

    /// Deletes every booking. On failure the local booked set is left as-is,
    /// which may drift from actual store state until the next load.
    pub async fn clear_all<A: BookingApi + Sync>(&mut self, api: &A) {
        match api.clear_bookings().await {
            Ok(()) => {
                self.booked.clear();
                self.notice = Some("All bookings cleared.".to_string());
            }
            Err(err) => {
                self.notice = Some(format!("Failed to clear bookings: {err}"));
            }
        }
    }

    pub fn back_to_browsing(&mut self) {
        self.screen = Screen::Browsing;
    }
}
