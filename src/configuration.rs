use std::path::PathBuf;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn website_title(&self) -> String;
    fn port(&self) -> String;
    fn frontend_path(&self) -> PathBuf;
    fn database_url(&self) -> Option<String>;
    fn resend_api_key(&self) -> Option<String>;
    fn notification_from(&self) -> String;
    fn notification_to(&self) -> String;
}
