/*
[INPUT]:  Location records and location ids
[OUTPUT]: Saved locations and acknowledgements
[POS]:    Service layer - saved origin/destination locations
[UPDATE]: When the locations endpoints change
*/

use std::sync::Arc;

use crate::http::{HttpTransport, Result};
use crate::services::segment;
use crate::types::{
    CreateLocationRequest, LocationResponse, SuccessResponse, UpdateLocationRequest,
    UpdateLocationResponse,
};

#[derive(Debug)]
pub struct LocationsService {
    http: Arc<HttpTransport>,
}

impl LocationsService {
    pub(crate) fn new(http: Arc<HttpTransport>) -> Self {
        Self { http }
    }

    /// Save a new location
    ///
    /// POST /v1/locations
    pub async fn create(&self, request: &CreateLocationRequest) -> Result<LocationResponse> {
        self.http.post("/v1/locations", request).await
    }

    /// Fetch a location
    ///
    /// GET /v1/locations/{id}
    pub async fn get(&self, id: &str) -> Result<LocationResponse> {
        let endpoint = format!("/v1/locations/{}", segment(id));
        self.http.get(&endpoint).await
    }

    /// Update some fields of a location
    ///
    /// POST /v1/locations/{id}
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateLocationRequest,
    ) -> Result<UpdateLocationResponse> {
        let endpoint = format!("/v1/locations/{}", segment(id));
        self.http.post(&endpoint, request).await
    }

    /// Delete a location
    ///
    /// DELETE /v1/locations/{id}
    pub async fn delete(&self, id: &str) -> Result<SuccessResponse> {
        let endpoint = format!("/v1/locations/{}", segment(id));
        self.http.delete(&endpoint).await
    }
}
