//! Client for the Rapleaf person lookup API.
//!
//! A lookup goes identifier → URL ([`Lookup`]) → one GET ([`RawResponse`]) →
//! wire tree ([`wire::WirePerson`]) → [`types::Person`].

mod client;
mod config;
mod endpoint;
mod errors;
pub mod normalize;
mod retrieve;
mod status;
pub mod types;
pub mod wire;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT};
pub use self::endpoint::{profile_url, GraphOutput, Lookup, RAPLEAF_SITE};
pub use self::errors::Error;
pub use self::retrieve::RawResponse;
pub use self::status::Status;
