/*
[INPUT]:  Client configuration or a bare API key
[OUTPUT]: One facade exposing every resource service over a shared transport
[POS]:    Crate entry point - what applications construct
[UPDATE]: When adding a resource service
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::http::{ClientConfig, HttpTransport, Result};
use crate::services::{
    CouriersService, DraftOrdersService, LocationsService, MapsService, OrdersService,
    RatesService, TrackingService,
};

/// Biteship API client
///
/// Every service shares one transport and therefore one connection pool,
/// which is released when the facade is dropped.
///
/// ```no_run
/// # async fn run() -> biteship_adapter::Result<()> {
/// use biteship_adapter::Biteship;
///
/// let biteship = Biteship::with_api_key("biteship_test.key")?;
/// let couriers = biteship.couriers.list().await?;
/// println!("{} couriers", couriers.couriers.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Biteship {
    pub rates: RatesService,
    pub couriers: CouriersService,
    pub locations: LocationsService,
    pub maps: MapsService,
    pub draft_orders: DraftOrdersService,
    pub orders: OrdersService,
    pub tracking: TrackingService,
    http: Arc<HttpTransport>,
}

impl Biteship {
    /// Build the client; fails with a config error on an empty API key
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Arc::new(HttpTransport::new(&config)?);
        debug!(base_url = %http.base_url(), timeout_ms = http.timeout().as_millis() as u64, "biteship client ready");

        Ok(Self {
            rates: RatesService::new(Arc::clone(&http)),
            couriers: CouriersService::new(Arc::clone(&http)),
            locations: LocationsService::new(Arc::clone(&http)),
            maps: MapsService::new(Arc::clone(&http)),
            draft_orders: DraftOrdersService::new(Arc::clone(&http)),
            orders: OrdersService::new(Arc::clone(&http)),
            tracking: TrackingService::new(Arc::clone(&http)),
            http,
        })
    }

    /// Client with default base URL and timeout
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(api_key))
    }

    /// Client configured from `BITESHIP_API_KEY` and `BITESHIP_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        self.http.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.http.timeout()
    }
}
