use rand::Rng;
use skyfare_core::offer::{OfferSearchRequest, OfferSummary};
use skyfare_core::payment::{PaymentGateway, PaymentSession, PaymentStatus};
use skyfare_core::query::{Place, TripQuery};
use skyfare_core::supplier::{FlightSupplier, OrderConfirmation, OrderRequest};
use skyfare_core::{CoreError, CoreResult};
use std::sync::Arc;
use uuid::Uuid;

/// Result of a completed wizard submission: the supplier order plus the
/// checkout session the caller opens in a new browsing context.
#[derive(Debug, Clone)]
pub struct BookingOutcome {
    pub confirmation: OrderConfirmation,
    pub payment: PaymentSession,
}

/// Drives the supplier and payment gateway for the search and booking flows.
/// Both collaborators are injected, so tests substitute mocks.
pub struct BookingOrchestrator {
    supplier: Arc<dyn FlightSupplier>,
    payments: Arc<dyn PaymentGateway>,
}

impl BookingOrchestrator {
    pub fn new(supplier: Arc<dyn FlightSupplier>, payments: Arc<dyn PaymentGateway>) -> Self {
        Self { supplier, payments }
    }

    /// Run an offer search for a completed query, projecting each opaque
    /// payload into its display summary. Malformed payloads are skipped.
    pub async fn search_offers(&self, query: &TripQuery) -> CoreResult<Vec<OfferSummary>> {
        let request = OfferSearchRequest::from_query(query)?;
        let payloads = self
            .supplier
            .search_offers(&request)
            .await
            .map_err(|e| CoreError::InternalError(e.to_string()))?;

        let mut summaries = Vec::with_capacity(payloads.len());
        for payload in &payloads {
            match OfferSummary::from_payload(payload) {
                Ok(summary) => summaries.push(summary),
                Err(err) => {
                    tracing::warn!(error = %err, "skipping malformed offer payload");
                }
            }
        }
        tracing::info!(count = summaries.len(), "offer search completed");
        Ok(summaries)
    }

    /// Create the supplier order, then a checkout session for its total
    pub async fn place_booking(
        &self,
        request: &OrderRequest,
    ) -> Result<BookingOutcome, Box<dyn std::error::Error + Send + Sync>> {
        let confirmation = self.supplier.create_order(request).await?;
        tracing::info!(
            order_id = %confirmation.order_id,
            reference = %confirmation.booking_reference,
            "order created"
        );

        let payment = self
            .payments
            .create_session(confirmation.order_id, request.total_minor, &request.currency)
            .await?;

        Ok(BookingOutcome {
            confirmation,
            payment,
        })
    }
}

// ============================================================================
// Mock adapters
// ============================================================================

/// In-memory supplier for tests and the demo binary. Orders against an offer
/// id ending in "fail" are rejected, exercising the retry path.
pub struct MockSupplier {
    pub places: Vec<Place>,
    pub offer_amount: String,
    pub currency: String,
}

impl Default for MockSupplier {
    fn default() -> Self {
        Self {
            places: vec![
                mock_place("JFK", "John F. Kennedy International", "New York"),
                mock_place("LGA", "LaGuardia", "New York"),
                mock_place("LHR", "Heathrow", "London"),
                mock_place("LGW", "Gatwick", "London"),
                mock_place("CDG", "Charles de Gaulle", "Paris"),
            ],
            offer_amount: "500.00".to_string(),
            currency: "USD".to_string(),
        }
    }
}

fn mock_place(code: &str, name: &str, city: &str) -> Place {
    Place {
        iata_code: code.to_string(),
        name: name.to_string(),
        city_name: city.to_string(),
    }
}

#[async_trait::async_trait]
impl FlightSupplier for MockSupplier {
    async fn search_places(
        &self,
        query: &str,
    ) -> Result<Vec<Place>, Box<dyn std::error::Error + Send + Sync>> {
        let needle = query.to_lowercase();
        Ok(self
            .places
            .iter()
            .filter(|p| {
                p.city_name.to_lowercase().contains(&needle)
                    || p.iata_code.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn search_offers(
        &self,
        request: &OfferSearchRequest,
    ) -> Result<Vec<serde_json::Value>, Box<dyn std::error::Error + Send + Sync>> {
        let slices: Vec<serde_json::Value> = request
            .slices
            .iter()
            .map(|slice| {
                serde_json::json!({
                    "origin": { "iata_code": slice.origin },
                    "destination": { "iata_code": slice.destination },
                    "segments": [
                        { "passengers": [ { "baggages": [ { "type": "carry_on", "quantity": 1 } ] } ] }
                    ]
                })
            })
            .collect();

        Ok(vec![serde_json::json!({
            "id": format!("off_{}", Uuid::new_v4().simple()),
            "total_amount": self.offer_amount,
            "total_currency": self.currency,
            "cabin_class": request.cabin_class,
            "slices": slices,
            "live_mode": false
        })])
    }

    async fn create_order(
        &self,
        request: &OrderRequest,
    ) -> Result<OrderConfirmation, Box<dyn std::error::Error + Send + Sync>> {
        // Trigger for testing the retry path
        if request.offer_id.ends_with("fail") {
            return Err("Simulated supplier rejection".into());
        }

        Ok(OrderConfirmation {
            order_id: Uuid::new_v4(),
            booking_reference: mock_reference(),
            payment_status: PaymentStatus::Pending,
            created_at: chrono::Utc::now(),
        })
    }
}

/// Airline-style reference: three letters, three digits, three letters
fn mock_reference() -> String {
    let mut rng = rand::thread_rng();
    let letter = |rng: &mut rand::rngs::ThreadRng| (b'A' + rng.gen_range(0..26)) as char;
    let digit = |rng: &mut rand::rngs::ThreadRng| (b'0' + rng.gen_range(0..10)) as char;

    let mut reference = String::with_capacity(9);
    for _ in 0..3 {
        reference.push(letter(&mut rng));
    }
    for _ in 0..3 {
        reference.push(digit(&mut rng));
    }
    for _ in 0..3 {
        reference.push(letter(&mut rng));
    }
    reference
}

/// Gateway mock that always produces a hosted checkout URL
pub struct MockGateway;

#[async_trait::async_trait]
impl PaymentGateway for MockGateway {
    async fn create_session(
        &self,
        order_id: Uuid,
        amount_minor: i64,
        currency: &str,
    ) -> Result<PaymentSession, Box<dyn std::error::Error + Send + Sync>> {
        let id = format!("mock_cs_{}", order_id.simple());
        Ok(PaymentSession {
            url: format!("https://checkout.example.com/pay/{id}"),
            id,
            order_id,
            amount_minor,
            currency: currency.to_string(),
            status: PaymentStatus::Pending,
        })
    }

    async fn get_session(
        &self,
        session_id: &str,
    ) -> Result<PaymentSession, Box<dyn std::error::Error + Send + Sync>> {
        Ok(PaymentSession {
            id: session_id.to_string(),
            order_id: Uuid::new_v4(),
            amount_minor: 0,
            currency: "USD".to_string(),
            url: format!("https://checkout.example.com/pay/{session_id}"),
            status: PaymentStatus::Succeeded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use skyfare_core::query::{PassengerCount, TripType};
    use skyfare_core::traveler::TravelerDetails;

    fn query() -> TripQuery {
        TripQuery {
            trip_type: TripType::OneWay,
            origin: Some(mock_place("JFK", "JFK", "New York")),
            destination: Some(mock_place("LHR", "LHR", "London")),
            departure_date: NaiveDate::from_ymd_opt(2025, 8, 15),
            return_date: None,
            passengers: PassengerCount::default(),
            cabin_class: skyfare_core::query::CabinClass::Economy,
        }
    }

    fn orchestrator() -> BookingOrchestrator {
        BookingOrchestrator::new(Arc::new(MockSupplier::default()), Arc::new(MockGateway))
    }

    #[tokio::test]
    async fn test_search_projects_offers() {
        let offers = orchestrator().search_offers(&query()).await.unwrap();
        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].total.amount_minor, 50000);
        assert_eq!(offers[0].slices[0].origin, "JFK");
        assert_eq!(offers[0].slices[0].destination, "LHR");
    }

    #[tokio::test]
    async fn test_search_rejects_incomplete_query() {
        let result = orchestrator().search_offers(&TripQuery::default()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_place_booking_creates_order_and_session() {
        let request = OrderRequest {
            offer_id: "off_1".to_string(),
            traveler: TravelerDetails::default(),
            total_minor: 56000,
            currency: "USD".to_string(),
            extras: serde_json::json!({}),
        };
        let outcome = orchestrator().place_booking(&request).await.unwrap();
        assert_eq!(outcome.confirmation.booking_reference.len(), 9);
        assert_eq!(outcome.payment.amount_minor, 56000);
        assert!(outcome.payment.url.starts_with("https://"));
    }

    #[tokio::test]
    async fn test_place_booking_failure_trigger() {
        let request = OrderRequest {
            offer_id: "off_fail".to_string(),
            traveler: TravelerDetails::default(),
            total_minor: 1000,
            currency: "USD".to_string(),
            extras: serde_json::json!({}),
        };
        assert!(orchestrator().place_booking(&request).await.is_err());
    }

    #[tokio::test]
    async fn test_mock_place_search_filters() {
        let supplier = MockSupplier::default();
        let results = supplier.search_places("london").await.unwrap();
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.city_name == "London"));
    }

    #[test]
    fn test_mock_reference_shape() {
        let reference = mock_reference();
        assert_eq!(reference.len(), 9);
        assert!(reference[0..3].chars().all(|c| c.is_ascii_uppercase()));
        assert!(reference[3..6].chars().all(|c| c.is_ascii_digit()));
        assert!(reference[6..9].chars().all(|c| c.is_ascii_uppercase()));
    }
}
