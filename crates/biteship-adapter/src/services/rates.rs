/*
[INPUT]:  Item list, origin/destination locators and courier codes
[OUTPUT]: Priced courier options
[POS]:    Service layer - rate calculation endpoint
[UPDATE]: When the rates endpoint changes
*/

use std::sync::Arc;

use crate::http::{HttpTransport, Result};
use crate::types::{RatesRequest, RatesResponse};

#[derive(Debug)]
pub struct RatesService {
    http: Arc<HttpTransport>,
}

impl RatesService {
    pub(crate) fn new(http: Arc<HttpTransport>) -> Self {
        Self { http }
    }

    /// Price the given items with the requested couriers
    ///
    /// POST /v1/rates/couriers
    pub async fn get_rates(&self, request: &RatesRequest) -> Result<RatesResponse> {
        self.http.post("/v1/rates/couriers", request).await
    }
}
