/*
[INPUT]:  Order/tracking ids or waybill id plus courier code
[OUTPUT]: Shipment tracking status and history
[POS]:    Service layer - shipment tracking endpoints
[UPDATE]: When the tracking endpoints change
*/

use std::sync::Arc;

use crate::http::{HttpTransport, Result};
use crate::services::segment;
use crate::types::TrackingResponse;

#[derive(Debug)]
pub struct TrackingService {
    http: Arc<HttpTransport>,
}

impl TrackingService {
    pub(crate) fn new(http: Arc<HttpTransport>) -> Self {
        Self { http }
    }

    /// Track by order id or tracking id
    ///
    /// GET /v1/trackings/{id}
    ///
    /// A fresh order may have no tracking yet; the API then answers 404,
    /// see [`BiteshipError::is_not_found`](crate::BiteshipError::is_not_found).
    pub async fn get_by_id(&self, id: &str) -> Result<TrackingResponse> {
        let endpoint = format!("/v1/trackings/{}", segment(id));
        self.http.get(&endpoint).await
    }

    /// Track by courier waybill
    ///
    /// GET /v1/trackings/{waybill_id}/couriers/{courier_code}
    pub async fn get_by_waybill(
        &self,
        waybill_id: &str,
        courier_code: &str,
    ) -> Result<TrackingResponse> {
        let endpoint = format!(
            "/v1/trackings/{}/couriers/{}",
            segment(waybill_id),
            segment(courier_code)
        );
        self.http.get(&endpoint).await
    }
}
