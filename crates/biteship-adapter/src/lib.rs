/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Biteship adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod client;
pub mod http;
pub mod services;
pub mod types;

pub use client::Biteship;

// Re-export commonly used types from http
pub use http::{
    BiteshipError,
    ClientConfig,
    DEFAULT_BASE_URL,
    HttpTransport,
    NO_RESPONSE_MESSAGE,
    Result,
};

// Re-export the resource services
pub use services::{
    CouriersService,
    DraftOrdersService,
    LocationsService,
    MapsService,
    OrdersService,
    RatesService,
    TrackingService,
};

// Re-export all types
pub use types::*;
