//! Server-side client library for the PushRadar realtime broadcast API.
//!
//! Three operations, each a single HTTP request: authenticate a client's
//! subscription to a restricted (`private-`/`presence-`) channel, broadcast
//! a payload to a channel, and register opaque per-connection client
//! metadata. No retries, no caching, no state beyond the secret key.
//!
//! # Example
//!
//! ```no_run
//! use pushradar::PushRadar;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), pushradar::RadarError> {
//!     let radar = PushRadar::new("sk_your_secret_key")?;
//!
//!     radar
//!         .broadcast("notifications", &serde_json::json!({ "msg": "hello" }))
//!         .await?;
//!
//!     let token = radar.authenticate("private-room1", "socket-id").await?;
//!     println!("auth token: {}", token.auth);
//!     Ok(())
//! }
//! ```

pub mod channel;
mod client;
mod error;
mod http;

pub use client::{API_ENDPOINT, AuthToken, PushRadar};
pub use error::RadarError;
