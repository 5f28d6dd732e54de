use crate::dates::{DateRangeSeed, DateSelection};
use skyfare_core::query::{
    derive_trip_type, CabinClass, PassengerCount, Place, QueryField, TripQuery, TripType,
};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("missing information: {}", format_fields(.0))]
    Incomplete(Vec<QueryField>),
    #[error("a search is already in progress")]
    SearchInFlight,
}

fn format_fields(fields: &[QueryField]) -> String {
    fields
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Compound search form: origin/destination pickers, the date range picker,
/// and the passenger selector, assembled into one validated `TripQuery`.
#[derive(Debug, Clone)]
pub struct SearchBar {
    query: TripQuery,
    search_in_flight: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self::with_query(TripQuery::default())
    }

    pub fn with_query(query: TripQuery) -> Self {
        Self {
            query,
            search_in_flight: false,
        }
    }

    pub fn query(&self) -> &TripQuery {
        &self.query
    }

    pub fn set_origin(&mut self, place: Place) {
        self.query.origin = Some(place);
    }

    pub fn set_destination(&mut self, place: Place) {
        self.query.destination = Some(place);
    }

    pub fn set_trip_type(&mut self, trip_type: TripType) {
        self.query.trip_type = trip_type;
    }

    /// Exchange origin and destination, None sides included
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.query.origin, &mut self.query.destination);
    }

    /// Seed for the date picker from the committed query
    pub fn date_seed(&self) -> DateRangeSeed {
        DateRangeSeed {
            departure_date: self.query.departure_date,
            return_date: self.query.return_date,
            trip_type: Some(self.query.trip_type),
        }
    }

    /// Commit a finished date selection. The trip type is derived here, at
    /// commit time: a return date makes the query a round trip, its absence
    /// a one-way.
    pub fn commit_dates(&mut self, selection: DateSelection) {
        self.query.departure_date = Some(selection.departure_date);
        self.query.return_date = selection.return_date;
        self.query.trip_type = derive_trip_type(selection.return_date);
    }

    /// Commit applied passenger counts and cabin class
    pub fn commit_passengers(&mut self, counts: PassengerCount, cabin_class: CabinClass) {
        self.query.passengers = counts;
        self.query.cabin_class = cabin_class;
    }

    /// Hand the assembled query to the caller. Incomplete queries and repeat
    /// submits while a search is pending are rejected without state change;
    /// a success latches until `search_finished`.
    pub fn submit(&mut self) -> Result<TripQuery, QueryError> {
        if self.search_in_flight {
            return Err(QueryError::SearchInFlight);
        }

        let missing = self.query.missing_fields();
        if !missing.is_empty() {
            return Err(QueryError::Incomplete(missing));
        }

        let mut query = self.query.clone();
        if query.trip_type != TripType::RoundTrip {
            // A stale return date from an earlier round-trip edit is not
            // part of the submitted query
            query.return_date = None;
        }

        self.search_in_flight = true;
        tracing::info!(
            origin = ?query.origin.as_ref().map(|p| &p.iata_code),
            destination = ?query.destination.as_ref().map(|p| &p.iata_code),
            trip_type = ?query.trip_type,
            "search submitted"
        );
        Ok(query)
    }

    /// Report that the search the last submit triggered has settled
    pub fn search_finished(&mut self) {
        self.search_in_flight = false;
    }
}
