use crate::backend::{BackendError, BookingBackend};
use crate::client::{BookingApi, ClientError, SubmissionOutcome};
use crate::configuration::Configuration;
use crate::notify::{Notifier, NotifyError};
use crate::types::{Booking, GarageSettings};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::{
    collections::{BTreeMap, HashMap},
    path::PathBuf,
    sync::{
        atomic::{AtomicBool, AtomicU64, Ordering},
        Arc, Mutex,
    },
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TestConfiguration;

impl Configuration for TestConfiguration {
    fn website_title(&self) -> String {
        "Spannr Test".into()
    }

    fn port(&self) -> String {
        "0".into()
    }

    fn frontend_path(&self) -> PathBuf {
        // cargo test runs from the crate root
        PathBuf::from("frontend")
    }

    fn database_url(&self) -> Option<String> {
        None
    }

    fn resend_api_key(&self) -> Option<String> {
        None
    }

    fn notification_from(&self) -> String {
        "bookings@spannr.dev".into()
    }

    fn notification_to(&self) -> String {
        "owner@spannr.dev".into()
    }
}

#[derive(Default)]
pub struct MockBookingBackendInner {
    pub success: AtomicBool,
    pub calls_to_booked_dates: AtomicU64,
    pub calls_to_create_booking: AtomicU64,
    pub calls_to_clear_bookings: AtomicU64,
    pub calls_to_save_settings: AtomicU64,
    pub calls_to_load_settings: AtomicU64,
    pub bookings: Mutex<BTreeMap<NaiveDate, Booking>>,
    pub settings: Mutex<HashMap<String, GarageSettings>>,
}

#[derive(Clone)]
pub struct MockBookingBackend(pub Arc<MockBookingBackendInner>);

impl MockBookingBackend {
    pub fn new() -> Self {
        let inner = MockBookingBackendInner {
            success: AtomicBool::new(true),
            ..Default::default()
        };
        Self(Arc::new(inner))
    }

    fn check_success(&self) -> Result<(), BackendError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(BackendError::Database("supposed to fail".into())),
        }
    }
}

impl BookingBackend for MockBookingBackend {
    fn booked_dates(&self) -> Result<Vec<NaiveDate>, BackendError> {
        self.0.calls_to_booked_dates.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        Ok(self.0.bookings.lock().unwrap().keys().copied().collect())
    }

    fn create_booking(&self, date: NaiveDate, request_id: Uuid) -> Result<Booking, BackendError> {
        self.0
            .calls_to_create_booking
            .fetch_add(1, Ordering::SeqCst);
        self.check_success()?;

        let mut bookings = self.0.bookings.lock().unwrap();
        if let Some(existing) = bookings
            .values()
            .find(|booking| booking.request_id == request_id)
        {
            return Ok(existing.clone());
        }
        if bookings.contains_key(&date) {
            return Err(BackendError::AlreadyBooked(date));
        }
        let booking = Booking {
            id: Uuid::new_v4(),
            date,
            request_id,
            created_at: Utc::now(),
        };
        bookings.insert(date, booking.clone());
        Ok(booking)
    }

    fn clear_bookings(&self) -> Result<(), BackendError> {
        self.0
            .calls_to_clear_bookings
            .fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        self.0.bookings.lock().unwrap().clear();
        Ok(())
    }

    fn save_settings(&self, settings: GarageSettings) -> Result<(), BackendError> {
        self.0.calls_to_save_settings.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        self.0
            .settings
            .lock()
            .unwrap()
            .insert(settings.email.clone(), settings);
        Ok(())
    }

    fn load_settings(&self, email: &str) -> Result<GarageSettings, BackendError> {
        self.0.calls_to_load_settings.fetch_add(1, Ordering::SeqCst);
        self.check_success()?;
        self.0
            .settings
            .lock()
            .unwrap()
            .get(email)
            .cloned()
            .ok_or_else(|| BackendError::SettingsNotFound(email.to_string()))
    }
}

pub struct MockNotifierInner {
    pub success: AtomicBool,
    pub calls_to_booking_created: AtomicU64,
    pub dates: Mutex<Vec<NaiveDate>>,
}

#[derive(Clone)]
pub struct MockNotifier(pub Arc<MockNotifierInner>);

impl MockNotifier {
    pub fn new() -> Self {
        Self(Arc::new(MockNotifierInner {
            success: AtomicBool::new(true),
            calls_to_booking_created: AtomicU64::default(),
            dates: Mutex::default(),
        }))
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn booking_created(&self, date: NaiveDate) -> Result<(), NotifyError> {
        self.0
            .calls_to_booking_created
            .fetch_add(1, Ordering::SeqCst);
        self.0.dates.lock().unwrap().push(date);
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(NotifyError::Rejected("supposed to fail".into())),
        }
    }
}

pub struct MockBookingApiInner {
    pub success: AtomicBool,
    pub fail_reads: AtomicBool,
    pub notification_sent: AtomicBool,
    pub calls_to_create_booking: AtomicU64,
    pub booked: Mutex<Vec<NaiveDate>>,
    pub request_ids: Mutex<Vec<Uuid>>,
}

#[derive(Clone)]
pub struct MockBookingApi(pub Arc<MockBookingApiInner>);

impl MockBookingApi {
    pub fn new() -> Self {
        Self(Arc::new(MockBookingApiInner {
            success: AtomicBool::new(true),
            fail_reads: AtomicBool::new(false),
            notification_sent: AtomicBool::new(true),
            calls_to_create_booking: AtomicU64::default(),
            booked: Mutex::default(),
            request_ids: Mutex::default(),
        }))
    }

    pub fn set_booked(&self, dates: Vec<NaiveDate>) {
        *self.0.booked.lock().unwrap() = dates;
    }

    pub fn last_request_id(&self) -> Option<Uuid> {
        self.0.request_ids.lock().unwrap().last().copied()
    }
}

#[async_trait]
impl BookingApi for MockBookingApi {
    async fn booked_dates(&self) -> Result<Vec<NaiveDate>, ClientError> {
        if self.0.fail_reads.load(Ordering::SeqCst) {
            return Err(ClientError::Rejected {
                status: 500,
                message: "supposed to fail".into(),
            });
        }
        Ok(self.0.booked.lock().unwrap().clone())
    }

    async fn create_booking(
        &self,
        date: NaiveDate,
        request_id: Uuid,
    ) -> Result<SubmissionOutcome, ClientError> {
        self.0
            .calls_to_create_booking
            .fetch_add(1, Ordering::SeqCst);
        self.0.request_ids.lock().unwrap().push(request_id);

        if !self.0.success.load(Ordering::SeqCst) {
            return Err(ClientError::Rejected {
                status: 500,
                message: "supposed to fail".into(),
            });
        }
        self.0.booked.lock().unwrap().push(date);
        Ok(SubmissionOutcome {
            booking: Booking {
                id: Uuid::new_v4(),
                date,
                request_id,
                created_at: Utc::now(),
            },
            notification_sent: self.0.notification_sent.load(Ordering::SeqCst),
        })
    }

    async fn clear_bookings(&self) -> Result<(), ClientError> {
        if !self.0.success.load(Ordering::SeqCst) {
            return Err(ClientError::Rejected {
                status: 500,
                message: "supposed to fail".into(),
            });
        }
        self.0.booked.lock().unwrap().clear();
        Ok(())
    }
}
