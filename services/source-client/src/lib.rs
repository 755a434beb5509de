//! Source clients
//!
//! Retrieves the raw payload of one source. Two interchangeable
//! implementations sit behind the `SourceClient` trait:
//! - `HttpSourceClient`: GETs the source document over HTTP
//! - `GeneratorSourceClient`: produces seeded random data locally
//!
//! The driver picks one at startup; nothing below it knows which.

pub mod client;
pub mod config;
pub mod error;
pub mod generator;
pub mod http;

pub use client::SourceClient;
pub use config::{ClientConfig, GeneratorConfig};
pub use error::{FailureKind, FetchError};
pub use generator::GeneratorSourceClient;
pub use http::HttpSourceClient;
