/*
[INPUT]:  Draft order payloads and draft order ids
[OUTPUT]: Draft orders, confirmation results and draft rates
[POS]:    Service layer - provisional shipments before confirmation
[UPDATE]: When the draft order endpoints change
*/

use std::sync::Arc;

use crate::http::{HttpTransport, Result};
use crate::services::segment;
use crate::types::{
    CreateDraftOrderRequest, DraftOrderResponse, RatesResponse, SuccessResponse,
    UpdateDraftOrderRequest,
};

#[derive(Debug)]
pub struct DraftOrdersService {
    http: Arc<HttpTransport>,
}

impl DraftOrdersService {
    pub(crate) fn new(http: Arc<HttpTransport>) -> Self {
        Self { http }
    }

    /// Create a draft order
    ///
    /// POST /v1/draft_orders
    pub async fn create(&self, request: &CreateDraftOrderRequest) -> Result<DraftOrderResponse> {
        self.http.post("/v1/draft_orders", request).await
    }

    /// Fetch a draft order
    ///
    /// GET /v1/draft_orders/{id}
    pub async fn get(&self, id: &str) -> Result<DraftOrderResponse> {
        let endpoint = format!("/v1/draft_orders/{}", segment(id));
        self.http.get(&endpoint).await
    }

    /// Update some fields of a draft order
    ///
    /// POST /v1/draft_orders/{id}
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateDraftOrderRequest,
    ) -> Result<DraftOrderResponse> {
        let endpoint = format!("/v1/draft_orders/{}", segment(id));
        self.http.post(&endpoint, request).await
    }

    /// Delete a draft order
    ///
    /// DELETE /v1/draft_orders/{id}
    pub async fn delete(&self, id: &str) -> Result<SuccessResponse> {
        let endpoint = format!("/v1/draft_orders/{}", segment(id));
        self.http.delete(&endpoint).await
    }

    /// Confirm a draft order into a live order
    ///
    /// POST /v1/draft_orders/{id}/confirm
    pub async fn confirm(&self, id: &str) -> Result<DraftOrderResponse> {
        let endpoint = format!("/v1/draft_orders/{}/confirm", segment(id));
        self.http.post_empty(&endpoint).await
    }

    /// Price an existing draft order
    ///
    /// GET /v1/draft_orders/{id}/rates
    pub async fn get_rates(&self, id: &str) -> Result<RatesResponse> {
        let endpoint = format!("/v1/draft_orders/{}/rates", segment(id));
        self.http.get(&endpoint).await
    }
}
