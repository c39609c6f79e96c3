//! Server configuration parsed from the Leptos site config and environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use leptos::config::LeptosOptions;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("leptos configuration: {0}")]
    Config(String),
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos_options: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Load the Leptos options (`LEPTOS_*` / workspace metadata) and apply
    /// the optional `PORT` override.
    ///
    /// # Errors
    ///
    /// `Config` when the Leptos configuration cannot be read, `InvalidPort`
    /// when `PORT` is set but not a port number.
    pub fn from_env() -> Result<Self, ServerError> {
        let conf = leptos::config::get_configuration(None).map_err(|e| ServerError::Config(e.to_string()))?;
        let leptos_options = conf.leptos_options;
        let addr = resolve_addr(leptos_options.site_addr, std::env::var("PORT").ok().as_deref())?;
        Ok(Self { leptos_options, addr })
    }
}

/// Keep the site address host, replacing the port when `PORT` is set.
///
/// # Errors
///
/// `InvalidPort` when the override does not parse as a `u16`.
pub fn resolve_addr(site_addr: SocketAddr, port: Option<&str>) -> Result<SocketAddr, ServerError> {
    let Some(raw) = port.map(str::trim).filter(|p| !p.is_empty()) else {
        return Ok(site_addr);
    };
    let port = raw
        .parse::<u16>()
        .map_err(|_| ServerError::InvalidPort { value: raw.to_owned() })?;
    Ok(SocketAddr::new(site_addr.ip(), port))
}
