use crate::configuration::Configuration;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(about = "Spannr garage booking server")]
pub struct ConfigurationHandler {
    #[arg(long, default_value = "Spannr")]
    website_title: String,

    #[arg(long, default_value = "3000")]
    port: String,

    /// Directory containing the html pages.
    #[arg(long, default_value = "frontend")]
    frontend_path: PathBuf,

    /// Without a database URL the server runs on the impersistent in-memory
    /// backend.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    #[arg(long, env = "RESEND_API_KEY", hide_env_values = true)]
    resend_api_key: Option<String>,

    #[arg(long, default_value = "bookings@spannr.dev")]
    notification_from: String,

    #[arg(long, default_value = "owner@spannr.dev")]
    notification_to: String,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        dotenvy::dotenv().ok();
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn website_title(&self) -> String {
        self.website_title.clone()
    }

    fn port(&self) -> String {
        self.port.clone()
    }

    fn frontend_path(&self) -> PathBuf {
        self.frontend_path.clone()
    }

    fn database_url(&self) -> Option<String> {
        self.database_url.clone()
    }

    fn resend_api_key(&self) -> Option<String> {
        self.resend_api_key.clone()
    }

    fn notification_from(&self) -> String {
        self.notification_from.clone()
    }

    fn notification_to(&self) -> String {
        self.notification_to.clone()
    }
}
