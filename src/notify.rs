use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("RESEND_API_KEY is not configured")]
    MissingApiKey,
    #[error("email request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("email provider rejected the request: {0}")]
    Rejected(String),
}

/// Fire-and-forget operator notification, sent after a booking row has been
/// committed. No retry, no queueing.
#[async_trait]
pub trait Notifier: Clone + Send + Sync + 'static {
    async fn booking_created(&self, date: NaiveDate) -> Result<(), NotifyError>;
}

#[derive(Debug, Serialize)]
struct EmailRequest {
    from: String,
    to: String,
    subject: String,
    html: String,
}

/// Notifier backed by the Resend transactional-email API.
#[derive(Clone)]
pub struct ResendClient {
    base_url: String,
    api_key: Option<String>,
    from: String,
    to: String,
    client: reqwest::Client,
}

impl ResendClient {
    pub fn new(api_key: Option<String>, from: String, to: String) -> Self {
        Self {
            base_url: "https://api.resend.com".to_string(),
            api_key,
            from,
            to,
            client: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }
}

#[async_trait]
impl Notifier for ResendClient {
    async fn booking_created(&self, date: NaiveDate) -> Result<(), NotifyError> {
        let api_key = self.api_key.as_ref().ok_or(NotifyError::MissingApiKey)?;

        let request = EmailRequest {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: "New Booking Received".to_string(),
            html: format!("<p>New booking received for <b>{date}</b></p>"),
        };

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let error = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected(error));
        }
        Ok(())
    }
}
