use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Journey shape of a trip query
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    RoundTrip,
    OneWay,
    MultiCity,
}

/// Service tier, matching the supplier wire format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    pub fn label(&self) -> &'static str {
        match self {
            CabinClass::Economy => "Economy",
            CabinClass::PremiumEconomy => "Premium Economy",
            CabinClass::Business => "Business",
            CabinClass::First => "First",
        }
    }
}

/// Traveler headcount per category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerCount {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl PassengerCount {
    pub fn total(&self) -> u32 {
        self.adults + self.children + self.infants
    }
}

impl Default for PassengerCount {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

/// An airport or city picked from the supplier's place search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Place {
    pub iata_code: String,
    pub name: String,
    pub city_name: String,
}

impl Place {
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.city_name, self.iata_code)
    }
}

/// Derive the trip type from a committed date selection. A return date means
/// a round trip, its absence a one-way.
pub fn derive_trip_type(return_date: Option<NaiveDate>) -> TripType {
    if return_date.is_some() {
        TripType::RoundTrip
    } else {
        TripType::OneWay
    }
}

/// A fully assembled search query, handed off by value to the results flow
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripQuery {
    pub trip_type: TripType,
    pub origin: Option<Place>,
    pub destination: Option<Place>,
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub passengers: PassengerCount,
    pub cabin_class: CabinClass,
}

impl Default for TripQuery {
    fn default() -> Self {
        Self {
            trip_type: TripType::RoundTrip,
            origin: None,
            destination: None,
            departure_date: None,
            return_date: None,
            passengers: PassengerCount::default(),
            cabin_class: CabinClass::Economy,
        }
    }
}

/// Fields the search bar requires before a query may be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryField {
    Origin,
    Destination,
    DepartureDate,
    ReturnDate,
}

impl std::fmt::Display for QueryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            QueryField::Origin => "origin",
            QueryField::Destination => "destination",
            QueryField::DepartureDate => "departure date",
            QueryField::ReturnDate => "return date",
        };
        f.write_str(name)
    }
}

impl TripQuery {
    /// List the fields still missing for submission. The return date counts
    /// only for round trips.
    pub fn missing_fields(&self) -> Vec<QueryField> {
        let mut missing = Vec::new();
        if self.origin.is_none() {
            missing.push(QueryField::Origin);
        }
        if self.destination.is_none() {
            missing.push(QueryField::Destination);
        }
        if self.departure_date.is_none() {
            missing.push(QueryField::DepartureDate);
        }
        if self.trip_type == TripType::RoundTrip && self.return_date.is_none() {
            missing.push(QueryField::ReturnDate);
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
