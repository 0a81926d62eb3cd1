//! Process settings loaded via OrthoConfig.
//!
//! Values layer as CLI flags over `BOOKSHOP_*` environment variables over a
//! config file over the defaults below.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Address the HTTP server binds when none is configured.
pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The configured server address is not a socket address.
    #[error("invalid server address '{address}': {message}")]
    InvalidServerAddress { address: String, message: String },
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSHOP")]
pub struct ServerSettings {
    /// Socket address to listen on, for example `127.0.0.1:8080`.
    #[ortho_config(default = DEFAULT_SERVER_ADDRESS.to_owned())]
    pub server_address: String,
}

impl ServerSettings {
    /// Return the configured address text.
    pub fn server_address(&self) -> &str {
        &self.server_address
    }

    /// Parse the configured address.
    ///
    /// # Examples
    /// ```
    /// use bookshop::settings::ServerSettings;
    ///
    /// let settings = ServerSettings {
    ///     server_address: "127.0.0.1:9000".to_owned(),
    /// };
    /// assert_eq!(settings.bind_addr().expect("valid").port(), 9000);
    /// ```
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let address = self.server_address();
        address
            .parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidServerAddress {
                address: address.to_owned(),
                message: err.to_string(),
            })
    }
}
