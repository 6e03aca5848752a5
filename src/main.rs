use spannr::configuration::Configuration;
use spannr::configuration_handler::ConfigurationHandler;
use spannr::database_interface::DatabaseInterface;
use spannr::http::create_app;
use spannr::local_bookings::LocalBookings;
use spannr::notify::ResendClient;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("##########");
    println!("# Spannr #");
    println!("##########");

    let configuration = ConfigurationHandler::parse_arguments();

    let notifier = ResendClient::new(
        configuration.resend_api_key(),
        configuration.notification_from(),
        configuration.notification_to(),
    );

    let address = format!("0.0.0.0:{}", configuration.port());
    println!("Accessable at:\n{}", address.clone());
    let listener = tokio::net::TcpListener::bind(address).await.unwrap();

    let app = if let Some(database_url) = configuration.database_url() {
        let backend = loop {
            match DatabaseInterface::new(&database_url) {
                Ok(backend) => {
                    info!("Successfully connected to database");
                    break backend;
                }
                Err(err) => {
                    error!(?err, "Failed to establish database connection: {database_url}. Retry in 1 sec. You may want to restart without DATABASE_URL (impersistent bookings).");
                    sleep(Duration::from_secs(1)).await;
                }
            }
        };
        create_app(backend, notifier, configuration)
    } else {
        info!("No DATABASE_URL configured, using the in-memory backend");
        let backend = LocalBookings::default();
        create_app(backend, notifier, configuration)
    };

    axum::serve(listener, app).await.unwrap();
}
