use skyfare_core::query::Place;
use skyfare_core::supplier::FlightSupplier;

/// Queries shorter than this never hit the supplier
pub const MIN_QUERY_LEN: usize = 2;
/// Result lists are truncated for display
pub const MAX_RESULTS: usize = 8;

/// Identifies one outstanding place search. Responses carrying an older
/// ticket than the picker's current one are dropped as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// Typeahead picker over the supplier's place search. Search is two-phase:
/// `begin_search` registers the request and `resolve` applies the response,
/// so a late response for a superseded query cannot clobber newer results.
#[derive(Debug, Default)]
pub struct AirportPicker {
    results: Vec<Place>,
    loading: bool,
    sequence: u64,
}

impl AirportPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn results(&self) -> &[Place] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Register a new search. Returns None (no-op) for queries below the
    /// minimum length.
    pub fn begin_search(&mut self, query: &str) -> Option<SearchTicket> {
        if query.trim().len() < MIN_QUERY_LEN {
            return None;
        }
        self.sequence += 1;
        self.loading = true;
        Some(SearchTicket(self.sequence))
    }

    /// Apply a supplier response. Stale tickets are discarded silently;
    /// failures clear the result list and leave the picker usable.
    pub fn resolve(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Vec<Place>, Box<dyn std::error::Error + Send + Sync>>,
    ) {
        if ticket.0 != self.sequence {
            tracing::debug!(ticket = ticket.0, current = self.sequence, "dropping stale place search response");
            return;
        }
        self.loading = false;
        match outcome {
            Ok(mut places) => {
                places.truncate(MAX_RESULTS);
                self.results = places;
            }
            Err(err) => {
                tracing::warn!(error = %err, "place search failed");
                self.results.clear();
            }
        }
    }

    /// Convenience wrapper composing both phases around the supplier call
    pub async fn search(&mut self, supplier: &dyn FlightSupplier, query: &str) {
        let Some(ticket) = self.begin_search(query) else {
            return;
        };
        let outcome = supplier.search_places(query).await;
        self.resolve(ticket, outcome);
    }

    /// Pick a result by index, clearing the list
    pub fn select(&mut self, index: usize) -> Option<Place> {
        if index >= self.results.len() {
            return None;
        }
        let place = self.results.swap_remove(index);
        self.results.clear();
        Some(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use skyfare_core::offer::OfferSearchRequest;
    use skyfare_core::supplier::{OrderConfirmation, OrderRequest};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn place(code: &str) -> Place {
        Place {
            iata_code: code.to_string(),
            name: format!("{code} Airport"),
            city_name: code.to_string(),
        }
    }

    struct FixedSupplier {
        places: Vec<Place>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl FlightSupplier for FixedSupplier {
        async fn search_places(
            &self,
            _query: &str,
        ) -> Result<Vec<Place>, Box<dyn std::error::Error + Send + Sync>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.places.clone())
        }

        async fn search_offers(
            &self,
            _request: &OfferSearchRequest,
        ) -> Result<Vec<serde_json::Value>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Vec::new())
        }

        async fn create_order(
            &self,
            _request: &OrderRequest,
        ) -> Result<OrderConfirmation, Box<dyn std::error::Error + Send + Sync>> {
            Err("not implemented".into())
        }
    }

    #[test]
    fn test_short_queries_are_ignored() {
        let mut picker = AirportPicker::new();
        assert!(picker.begin_search("j").is_none());
        assert!(picker.begin_search(" ").is_none());
        assert!(!picker.is_loading());
    }

    #[test]
    fn test_results_truncated_to_max() {
        let mut picker = AirportPicker::new();
        let ticket = picker.begin_search("lon").unwrap();
        let places: Vec<Place> = (0..12).map(|i| place(&format!("A{i:02}"))).collect();
        picker.resolve(ticket, Ok(places));
        assert_eq!(picker.results().len(), MAX_RESULTS);
        assert!(!picker.is_loading());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut picker = AirportPicker::new();
        let first = picker.begin_search("lon").unwrap();
        let second = picker.begin_search("new").unwrap();

        picker.resolve(second, Ok(vec![place("JFK")]));
        picker.resolve(first, Ok(vec![place("LHR")]));

        assert_eq!(picker.results().len(), 1);
        assert_eq!(picker.results()[0].iata_code, "JFK");
    }

    #[test]
    fn test_failure_clears_results() {
        let mut picker = AirportPicker::new();
        let ticket = picker.begin_search("lon").unwrap();
        picker.resolve(ticket, Ok(vec![place("LHR")]));

        let ticket = picker.begin_search("par").unwrap();
        picker.resolve(ticket, Err("supplier down".into()));
        assert!(picker.results().is_empty());
        assert!(!picker.is_loading());
    }

    #[tokio::test]
    async fn test_search_convenience_hits_supplier_once() {
        let supplier = FixedSupplier {
            places: vec![place("JFK"), place("LGA")],
            calls: AtomicUsize::new(0),
        };
        let mut picker = AirportPicker::new();

        picker.search(&supplier, "new york").await;
        assert_eq!(supplier.calls.load(Ordering::SeqCst), 1);
        assert_eq!(picker.results().len(), 2);

        // Below the minimum length: supplier untouched
        picker.search(&supplier, "n").await;
        assert_eq!(supplier.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_select_returns_place_and_clears() {
        let mut picker = AirportPicker::new();
        let ticket = picker.begin_search("new").unwrap();
        picker.resolve(ticket, Ok(vec![place("JFK"), place("LGA")]));

        let picked = picker.select(0).unwrap();
        assert_eq!(picked.iata_code, "JFK");
        assert!(picker.results().is_empty());
        assert!(picker.select(0).is_none());
    }
}
