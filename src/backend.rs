use crate::types::{Booking, GarageSettings};
use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    #[error("{0} is already booked")]
    AlreadyBooked(NaiveDate),
    #[error("no settings stored for {0}")]
    SettingsNotFound(String),
    #[error("database error: {0}")]
    Database(String),
}

/// Storage backend for bookings and garage settings. Implemented by the
/// in-memory store and by the PostgreSQL interface.
pub trait BookingBackend: Clone + Send + Sync + 'static {
    /// All booked dates, ascending.
    fn booked_dates(&self) -> Result<Vec<NaiveDate>, BackendError>;

    /// Persists a booking for `date`. Idempotent on `request_id`: a retry
    /// carrying the same token returns the booking created by the first
    /// attempt. A different token for an already-booked date fails with
    /// [`BackendError::AlreadyBooked`].
    fn create_booking(&self, date: NaiveDate, request_id: Uuid) -> Result<Booking, BackendError>;

    /// Deletes every booking.
    fn clear_bookings(&self) -> Result<(), BackendError>;

    /// Creates or overwrites the settings row keyed on `settings.email`.
    fn save_settings(&self, settings: GarageSettings) -> Result<(), BackendError>;

    fn load_settings(&self, email: &str) -> Result<GarageSettings, BackendError>;
}
