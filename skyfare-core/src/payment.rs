use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    RequiresPaymentMethod,
    Pending,
    Succeeded,
    Failed,
}

/// A hosted checkout session created with the gateway. The caller opens the
/// URL in a new browsing context; capture happens entirely on the gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSession {
    pub id: String, // Provider's ID (e.g., cs_123)
    pub order_id: Uuid,
    pub amount_minor: i64,
    pub currency: String,
    pub url: String,
    pub status: PaymentStatus,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a checkout session for an order total
    async fn create_session(
        &self,
        order_id: Uuid,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentSession, Box<dyn std::error::Error + Send + Sync>>;

    /// Retrieve session status
    async fn get_session(
        &self,
        session_id: &str,
    ) -> Result<PaymentSession, Box<dyn std::error::Error + Send + Sync>>;
}
