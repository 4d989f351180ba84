/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding transport options or changing client behavior
*/

pub mod client;
pub mod config;
pub mod error;

pub use error::{BiteshipError, NO_RESPONSE_MESSAGE, Result};

pub use client::HttpTransport;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
