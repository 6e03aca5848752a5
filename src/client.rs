use crate::types::Booking;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubmissionOutcome {
    pub booking: Booking,
    pub notification_sent: bool,
}

/// Server operations the booking workflow drives. The production
/// implementation talks to the HTTP API; tests substitute a mock.
#[async_trait]
pub trait BookingApi {
    async fn booked_dates(&self) -> Result<Vec<NaiveDate>, ClientError>;

    async fn create_booking(
        &self,
        date: NaiveDate,
        request_id: Uuid,
    ) -> Result<SubmissionOutcome, ClientError>;

    async fn clear_bookings(&self) -> Result<(), ClientError>;
}

#[derive(Debug, Serialize)]
struct CreateBookingBody {
    date: NaiveDate,
    request_id: Uuid,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct HttpBookingApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    async fn rejection(response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("HTTP {status}"),
        };
        ClientError::Rejected { status, message }
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn booked_dates(&self) -> Result<Vec<NaiveDate>, ClientError> {
        let response = self
            .client
            .get(format!("{}/api/bookings", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn create_booking(
        &self,
        date: NaiveDate,
        request_id: Uuid,
    ) -> Result<SubmissionOutcome, ClientError> {
        let response = self
            .client
            .post(format!("{}/api/bookings", self.base_url))
            .json(&CreateBookingBody { date, request_id })
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn clear_bookings(&self) -> Result<(), ClientError> {
        let response = self
            .client
            .post(format!("{}/api/bookings/clear", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }
}
