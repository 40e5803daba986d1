// config.rs
use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;

/// Review dashboard server.
///
/// Every option can also be set through the environment or a `.env` file.
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Maximum number of request worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Hostaway reviews endpoint.
    #[arg(
        long,
        env = "HOSTAWAY_API_URL",
        default_value = "https://api.hostaway.com/v1/reviews"
    )]
    pub hostaway_url: String,

    /// Bearer token for the Hostaway API. Without it only fallback data is served.
    #[arg(long, env = "HOSTAWAY_API_KEY", hide_env_values = true)]
    pub hostaway_api_key: Option<String>,

    /// Upper bound on a single upstream request.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value_t = 5)]
    pub upstream_timeout_secs: u64,

    /// JSON file replacing the bundled fallback dataset.
    #[arg(long, env = "FALLBACK_DATA_PATH")]
    pub fallback_data: Option<String>,
}

impl Config {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout_secs)
    }
}
