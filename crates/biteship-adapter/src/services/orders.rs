/*
[INPUT]:  Order payloads with courier selection and order ids
[OUTPUT]: Orders and cancellation acknowledgements
[POS]:    Service layer - confirmed shipments
[UPDATE]: When the order endpoints change
*/

use std::sync::Arc;

use crate::http::{HttpTransport, Result};
use crate::services::segment;
use crate::types::{CreateOrderRequest, OrderResponse, SuccessResponse};

#[derive(Debug)]
pub struct OrdersService {
    http: Arc<HttpTransport>,
}

impl OrdersService {
    pub(crate) fn new(http: Arc<HttpTransport>) -> Self {
        Self { http }
    }

    /// Create an order with a selected courier
    ///
    /// POST /v1/orders
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<OrderResponse> {
        self.http.post("/v1/orders", request).await
    }

    /// Fetch an order
    ///
    /// GET /v1/orders/{id}
    pub async fn get(&self, id: &str) -> Result<OrderResponse> {
        let endpoint = format!("/v1/orders/{}", segment(id));
        self.http.get(&endpoint).await
    }

    /// Cancel an order
    ///
    /// POST /v1/orders/{id}/cancel
    pub async fn cancel(&self, id: &str) -> Result<SuccessResponse> {
        let endpoint = format!("/v1/orders/{}/cancel", segment(id));
        self.http.post_empty(&endpoint).await
    }
}
