//! Command-line arguments for the quote server.
use std::net::SocketAddr;

use clap::Parser;
use insurance_common::net::{DEFAULT_HOST, DEFAULT_PORT, addr};

use crate::error::ServerError;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Fair car insurance price calculator backend", long_about = None)]
pub struct Args {
    /// Interface to bind the HTTP listener on.
    #[clap(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// HTTP port. Falls back to the `PORT` environment variable.
    #[clap(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Args {
    /// Socket address the server listens on.
    pub fn bind_addr(&self) -> Result<SocketAddr, ServerError> {
        let raw = addr(self.host.trim(), self.port);
        raw.parse()
            .map_err(|e| ServerError::Config(format!("invalid bind address {}: {}", raw, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_3000() {
        let args = Args::try_parse_from(["insurance_server", "--port", "3000"]).unwrap();
        assert_eq!(args.bind_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn custom_host_and_port() {
        let args =
            Args::try_parse_from(["insurance_server", "--host", "127.0.0.1", "--port", "8088"])
                .unwrap();
        assert_eq!(args.bind_addr().unwrap().to_string(), "127.0.0.1:8088");
    }

    #[test]
    fn rejects_bad_host() {
        let args =
            Args::try_parse_from(["insurance_server", "--host", "not a host", "--port", "1"])
                .unwrap();
        assert!(matches!(args.bind_addr(), Err(ServerError::Config(_))));
    }
}
