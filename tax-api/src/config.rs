//! Server configuration from command-line flags and the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Default listening port when neither `--port` nor `PORT` is given.
pub const DEFAULT_PORT: u16 = 10000;

/// JSON API for NTA 2025 personal income tax, VAT and rent relief.
///
/// Every flag can also be set through the environment variable shown in
/// its help text. Without `--regime` the built-in NTA 2025 values are used.
#[derive(Debug, Clone, Parser)]
#[command(name = "tax-api")]
#[command(version, about, long_about = None)]
pub struct ServerConfig {
    /// Address to bind.
    #[arg(long, env = "TAX_API_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to bind.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// TOML regime file.
    #[arg(long, env = "TAX_REGIME_FILE")]
    pub regime: Option<PathBuf>,

    /// CSV band table overriding the regime's bands.
    #[arg(long, env = "TAX_BANDS_FILE")]
    pub bands: Option<PathBuf>,

    /// Append log output to this file as well as stdout.
    #[arg(long, env = "TAX_API_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
