//! Immutable client configuration: where the person service lives and how
//! long a single request may take.

use std::time::Duration;

use url::Url;

use crate::Error;

/// Production host of the person service.
pub const DEFAULT_HOST: &str = "api.rapleaf.com";

/// Production port of the person service.
pub const DEFAULT_PORT: u16 = 80;

/// Upper bound on a single round trip, connection included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Target of every request issued by a [`Client`](crate::Client).
///
/// Built once and owned by the client, so every lookup made through the same
/// client sees the same host and port.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base: Url,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base: Url::parse("http://api.rapleaf.com:80/").expect("static default URL is valid"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Targets `http://{host}:{port}`. Used for testing with wiremock.
    pub fn new(host: &str, port: u16) -> Result<Self, Error> {
        Ok(Self {
            base: base_url(host, port)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads `RAPLEAF_HOST`, `RAPLEAF_PORT` and `RAPLEAF_TIMEOUT_SECS`.
    ///
    /// Missing or unparseable values fall back to the production defaults.
    pub fn from_env() -> Self {
        let host = std::env::var("RAPLEAF_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env_parse("RAPLEAF_PORT", DEFAULT_PORT);
        let timeout = Duration::from_secs(env_parse(
            "RAPLEAF_TIMEOUT_SECS",
            DEFAULT_TIMEOUT.as_secs(),
        ));
        match Self::new(&host, port) {
            Ok(config) => config.with_timeout(timeout),
            Err(e) => {
                tracing::warn!("Ignoring RAPLEAF_HOST/RAPLEAF_PORT: {}", e);
                Self::default().with_timeout(timeout)
            }
        }
    }

    /// Replaces the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `http://{host}:{port}/`, the root every endpoint path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Upper bound on one request. Connection setup is bounded by half of it.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn base_url(host: &str, port: u16) -> Result<Url, Error> {
    let url = Url::parse(&format!("http://{}:{}/", host, port))
        .map_err(|e| Error::InvalidHost(format!("{}:{}: {}", host, port, e)))?;
    if url.host_str().is_none() {
        return Err(Error::InvalidHost(format!("{}:{}", host, port)));
    }
    Ok(url)
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
