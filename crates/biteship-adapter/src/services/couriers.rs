/*
[INPUT]:  Authenticated transport
[OUTPUT]: Couriers available to the account
[POS]:    Service layer - courier catalogue endpoint
[UPDATE]: When the couriers endpoint changes
*/

use std::sync::Arc;

use crate::http::{HttpTransport, Result};
use crate::types::CouriersResponse;

#[derive(Debug)]
pub struct CouriersService {
    http: Arc<HttpTransport>,
}

impl CouriersService {
    pub(crate) fn new(http: Arc<HttpTransport>) -> Self {
        Self { http }
    }

    /// List couriers available to the account
    ///
    /// GET /v1/couriers
    pub async fn list(&self) -> Result<CouriersResponse> {
        self.http.get("/v1/couriers").await
    }
}
