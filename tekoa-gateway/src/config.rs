//! Configuration for the gateway
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Tekoá Hub gateway - web front-end for the cultural collection
#[derive(Parser, Debug, Clone)]
#[command(name = "tekoa-gateway")]
#[command(about = "Web front-end gateway for the Tekoá Hub cultural collection")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Base URL of the content store backend
    /// All API and asset paths are composed relative to it
    #[arg(long, env = "BACKEND_URL", default_value = "http://localhost:3000")]
    pub backend_url: String,

    /// Data directory for gateway-local state (like ledger)
    #[arg(long, env = "DATA_DIR", default_value = "./data")]
    pub data_dir: PathBuf,

    /// Request timeout for content store calls, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "30")]
    pub request_timeout_secs: u64,

    /// How long the cached content list stays fresh, in seconds
    /// Keystroke-driven queries recompute over the cached list; only a
    /// stale cache goes back to the store
    #[arg(long, env = "CACHE_TTL_SECS", default_value = "30")]
    pub cache_ttl_secs: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Backend base URL with any trailing slash removed
    pub fn backend_base(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            return Err("BACKEND_URL must be an http(s) URL".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("REQUEST_TIMEOUT_SECS must be greater than zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(backend_url: &str) -> Args {
        Args {
            listen: "127.0.0.1:8080".parse().unwrap(),
            backend_url: backend_url.to_string(),
            data_dir: PathBuf::from("/tmp/tekoa"),
            request_timeout_secs: 30,
            cache_ttl_secs: 30,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn backend_base_strips_trailing_slash() {
        assert_eq!(args("http://backend:3000/").backend_base(), "http://backend:3000");
        assert_eq!(args("http://backend:3000").backend_base(), "http://backend:3000");
    }

    #[test]
    fn validate_rejects_non_http_backend() {
        assert!(args("ftp://backend").validate().is_err());
        assert!(args("http://backend:3000").validate().is_ok());
    }

}
