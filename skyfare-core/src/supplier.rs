use crate::offer::OfferSearchRequest;
use crate::payment::PaymentStatus;
use crate::traveler::TravelerDetails;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Request to turn an accepted offer into an order with the supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    pub offer_id: String,
    pub traveler: TravelerDetails,
    /// Total in minor units, including fee and extras
    pub total_minor: i64,
    pub currency: String,
    /// Selected extras (seat designators, baggage), opaque to the contract
    pub extras: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: Uuid,
    pub booking_reference: String,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait FlightSupplier: Send + Sync {
    /// Search airports/cities matching a free-text query
    async fn search_places(
        &self,
        query: &str,
    ) -> Result<Vec<crate::query::Place>, Box<dyn std::error::Error + Send + Sync>>;

    /// Search priced offers; each element is an opaque offer payload
    async fn search_offers(
        &self,
        request: &OfferSearchRequest,
    ) -> Result<Vec<Value>, Box<dyn std::error::Error + Send + Sync>>;

    /// Create an order from an accepted offer
    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<OrderConfirmation, Box<dyn std::error::Error + Send + Sync>>;
}
