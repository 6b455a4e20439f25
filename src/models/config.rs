//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers. Every key is required; a
/// missing key fails deserialization at startup.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub database_url: String,
    /// Bearer token accepted by the admin submissions API.
    pub admin_token: String,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: String,
    pub smtp_password: String,
    /// Sender address for notification emails.
    pub smtp_from: String,
    /// Destination address for all relayed submissions.
    pub contact_email: String,
}
