use crate::backend::{BackendError, BookingBackend};
use crate::types::{Booking, GarageSettings};
use chrono::{NaiveDate, Utc};
use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
};
use uuid::Uuid;

/// In-memory backend for running without a database. Bookings do not
/// survive a restart.
#[derive(Debug, Clone, Default)]
pub struct LocalBookings {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    bookings: BTreeMap<NaiveDate, Booking>,
    settings: HashMap<String, GarageSettings>,
}

impl BookingBackend for LocalBookings {
    fn booked_dates(&self) -> Result<Vec<NaiveDate>, BackendError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.bookings.keys().copied().collect())
    }

    fn create_booking(&self, date: NaiveDate, request_id: Uuid) -> Result<Booking, BackendError> {
        let mut inner = self.inner.lock().unwrap();

        if let Some(existing) = inner
            .bookings
            .values()
            .find(|booking| booking.request_id == request_id)
        {
            return Ok(existing.clone());
        }
        if inner.bookings.contains_key(&date) {
            return Err(BackendError::AlreadyBooked(date));
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            date,
            request_id,
            created_at: Utc::now(),
        };
        inner.bookings.insert(date, booking.clone());
        Ok(booking)
    }

    fn clear_bookings(&self) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.bookings.clear();
        Ok(())
    }

    fn save_settings(&self, settings: GarageSettings) -> Result<(), BackendError> {
        let mut inner = self.inner.lock().unwrap();
        inner.settings.insert(settings.email.clone(), settings);
        Ok(())
    }

    fn load_settings(&self, email: &str) -> Result<GarageSettings, BackendError> {
        let inner = self.inner.lock().unwrap();
        inner
            .settings
            .get(email)
            .cloned()
            .ok_or_else(|| BackendError::SettingsNotFound(email.to_string()))
    }
}
