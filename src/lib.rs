pub mod backend;
pub mod client;
pub mod configuration;
pub mod configuration_handler;
pub mod database_interface;
pub mod dates;
pub mod http;
pub mod local_bookings;
pub mod notify;
pub mod schema;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod testutils;
