use crate::backend::{BackendError, BookingBackend};
use crate::configuration::Configuration;
use crate::notify::Notifier;
use crate::types::{validate_hours, Booking, DayHours, GarageSettings};
use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::{
    routing::{get, post, put},
    Json, Router,
};
use axum_valid::Valid;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use tokio::fs;
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;
use uuid::Uuid;
use validator::Validate;

#[derive(Clone)]
pub struct AppState<B, N, C> {
    backend: B,
    notifier: N,
    configuration: C,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateBookingRequest {
    date: NaiveDate,
    request_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateBookingResponse {
    success: bool,
    booking: Booking,
    notification_sent: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
struct SaveSettingsRequest {
    #[validate(email)]
    email: String,
    #[validate(custom(function = validate_hours))]
    hours: BTreeMap<String, DayHours>,
}

pub fn create_app<B, N, C>(backend: B, notifier: N, configuration: C) -> Router
where
    B: BookingBackend,
    N: Notifier,
    C: Configuration,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState {
        backend,
        notifier,
        configuration,
    };

    Router::new()
        .route("/", get(get_home_page::<B, N, C>))
        .route("/book", get(get_book_page::<B, N, C>))
        .route("/account", get(get_account_page::<B, N, C>))
        .route(
            "/api/bookings",
            get(get_bookings::<B, N, C>).post(create_booking::<B, N, C>),
        )
        .route("/api/bookings/clear", post(clear_bookings::<B, N, C>))
        .route("/api/settings", put(save_settings::<B, N, C>))
        .route("/api/settings/:email", get(get_settings::<B, N, C>))
        .with_state(state)
        .layer(cors)
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn get_bookings<B: BookingBackend, N: Notifier, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
) -> Response {
    match state.backend.booked_dates() {
        Ok(dates) => Json(dates).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn create_booking<B: BookingBackend, N: Notifier, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    Json(request): Json<CreateBookingRequest>,
) -> Response {
    let booking = match state
        .backend
        .create_booking(request.date, request.request_id)
    {
        Ok(booking) => booking,
        Err(err @ BackendError::AlreadyBooked(_)) => {
            return error_response(StatusCode::CONFLICT, err.to_string());
        }
        Err(err) => {
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
        }
    };

    // The booking is committed at this point, so a failed notification is
    // reported alongside the success instead of masking it.
    let notification_sent = match state.notifier.booking_created(booking.date).await {
        Ok(()) => true,
        Err(err) => {
            warn!(%err, date = %booking.date, "booking committed but notification failed");
            false
        }
    };

    Json(CreateBookingResponse {
        success: true,
        booking,
        notification_sent,
    })
    .into_response()
}

async fn clear_bookings<B: BookingBackend, N: Notifier, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
) -> Response {
    match state.backend.clear_bookings() {
        Ok(()) => (StatusCode::OK, "All bookings cleared".to_string()).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn save_settings<B: BookingBackend, N: Notifier, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    Valid(Json(request)): Valid<Json<SaveSettingsRequest>>,
) -> Response {
    let settings = GarageSettings {
        email: request.email,
        hours: request.hours,
    };
    match state.backend.save_settings(settings) {
        Ok(()) => (StatusCode::OK, "Settings saved successfully".to_string()).into_response(),
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn get_settings<B: BookingBackend, N: Notifier, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
    UrlPath(email): UrlPath<String>,
) -> Response {
    match state.backend.load_settings(&email) {
        Ok(settings) => Json(settings).into_response(),
        Err(err @ BackendError::SettingsNotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, err.to_string())
        }
        Err(err) => error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

async fn get_home_page<B: BookingBackend, N: Notifier, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
) -> Response {
    serve_page(&state.configuration, "home.html").await
}

async fn get_book_page<B: BookingBackend, N: Notifier, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
) -> Response {
    serve_page(&state.configuration, "book.html").await
}

async fn get_account_page<B: BookingBackend, N: Notifier, C: Configuration>(
    State(state): State<AppState<B, N, C>>,
) -> Response {
    serve_page(&state.configuration, "account.html").await
}

async fn serve_page<C: Configuration>(configuration: &C, page: &str) -> Response {
    let path = configuration.frontend_path().join(page);
    match fs::read_to_string(&path).await {
        Ok(contents) => {
            Html(contents.replace("{{title}}", &configuration.website_title())).into_response()
        }
        Err(err) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to read frontend file {}: {err}", path.display()),
        ),
    }
}
