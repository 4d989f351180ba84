/*
[INPUT]:  Free-text area query, country code and match mode
[OUTPUT]: Matching areas with their ids and postal codes
[POS]:    Service layer - area lookup endpoint
[UPDATE]: When the maps endpoint changes
*/

use std::sync::Arc;

use crate::http::{HttpTransport, Result};
use crate::types::{AreasResponse, GetAreasRequest};

#[derive(Debug)]
pub struct MapsService {
    http: Arc<HttpTransport>,
}

impl MapsService {
    pub(crate) fn new(http: Arc<HttpTransport>) -> Self {
        Self { http }
    }

    /// Search areas by name or postal code
    ///
    /// GET /v1/maps/areas?countries={countries}&input={input}&type={type}
    pub async fn get_areas(&self, request: &GetAreasRequest) -> Result<AreasResponse> {
        self.http.get_with_query("/v1/maps/areas", request).await
    }
}
