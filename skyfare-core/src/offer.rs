use crate::money::Money;
use crate::query::{CabinClass, PassengerCount, TripQuery, TripType};
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Offer search wire models
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferSearchRequest {
    pub slices: Vec<SliceRequest>,
    pub passengers: Vec<PassengerSpec>,
    pub cabin_class: CabinClass,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceRequest {
    pub origin: String,      // IATA code
    pub destination: String, // IATA code
    pub departure_date: chrono::NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PassengerType {
    Adult,
    Child,
    InfantWithoutSeat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerSpec {
    #[serde(rename = "type")]
    pub passenger_type: PassengerType,
}

impl OfferSearchRequest {
    /// Build the supplier request from a completed trip query. Fails if the
    /// query is still missing required fields.
    pub fn from_query(query: &TripQuery) -> CoreResult<Self> {
        let missing = query.missing_fields();
        if !missing.is_empty() {
            let names: Vec<String> = missing.iter().map(|f| f.to_string()).collect();
            return Err(CoreError::ValidationError(format!(
                "incomplete query, missing: {}",
                names.join(", ")
            )));
        }

        let origin = query.origin.as_ref().map(|p| p.iata_code.clone()).unwrap_or_default();
        let destination = query
            .destination
            .as_ref()
            .map(|p| p.iata_code.clone())
            .unwrap_or_default();
        let departure = query.departure_date.unwrap_or_default();

        let mut slices = vec![SliceRequest {
            origin: origin.clone(),
            destination: destination.clone(),
            departure_date: departure,
        }];
        if query.trip_type == TripType::RoundTrip {
            if let Some(return_date) = query.return_date {
                slices.push(SliceRequest {
                    origin: destination,
                    destination: origin,
                    departure_date: return_date,
                });
            }
        }

        let passengers = expand_passengers(&query.passengers);
        tracing::debug!(
            slices = slices.len(),
            passengers = passengers.len(),
            "offer search request built"
        );
        Ok(Self {
            slices,
            passengers,
            cabin_class: query.cabin_class,
        })
    }
}

fn expand_passengers(count: &PassengerCount) -> Vec<PassengerSpec> {
    let mut specs = Vec::with_capacity(count.total() as usize);
    for _ in 0..count.adults {
        specs.push(PassengerSpec {
            passenger_type: PassengerType::Adult,
        });
    }
    for _ in 0..count.children {
        specs.push(PassengerSpec {
            passenger_type: PassengerType::Child,
        });
    }
    for _ in 0..count.infants {
        specs.push(PassengerSpec {
            passenger_type: PassengerType::InfantWithoutSeat,
        });
    }
    specs
}

// ============================================================================
// Offer display projection
// ============================================================================

/// One directional leg of an offer, reduced to its display endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SliceSummary {
    pub origin: String,
    pub destination: String,
}

/// Baggage included with the fare
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaggageAllowance {
    pub kind: String,
    pub quantity: u32,
}

/// Display projection of an opaque supplier offer payload. The payload itself
/// stays untyped; only the fields the booking flow renders are extracted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OfferSummary {
    pub id: String,
    pub total: Money,
    pub cabin_class: Option<String>,
    pub slices: Vec<SliceSummary>,
    pub included_baggage: Vec<BaggageAllowance>,
}

impl OfferSummary {
    /// Extract the summary from a raw offer payload. The id and total amount
    /// are required; everything else degrades to empty.
    pub fn from_payload(payload: &Value) -> CoreResult<Self> {
        let id = payload
            .get("id")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::PayloadError("offer missing id".to_string()))?
            .to_string();

        let amount = payload
            .get("total_amount")
            .and_then(Value::as_str)
            .ok_or_else(|| CoreError::PayloadError("offer missing total_amount".to_string()))?;
        let currency = payload
            .get("total_currency")
            .and_then(Value::as_str)
            .unwrap_or("USD");
        let total = Money::parse(amount, currency)?;

        let cabin_class = payload
            .get("cabin_class")
            .and_then(Value::as_str)
            .map(str::to_string);

        let slices = payload
            .get("slices")
            .and_then(Value::as_array)
            .map(|slices| slices.iter().filter_map(slice_summary).collect())
            .unwrap_or_default();

        Ok(Self {
            id,
            total,
            cabin_class,
            slices,
            included_baggage: extract_baggage(payload),
        })
    }
}

fn slice_summary(slice: &Value) -> Option<SliceSummary> {
    Some(SliceSummary {
        origin: place_code(slice.get("origin")?)?,
        destination: place_code(slice.get("destination")?)?,
    })
}

// Suppliers send either a bare IATA string or a place object
fn place_code(value: &Value) -> Option<String> {
    match value {
        Value::String(code) => Some(code.clone()),
        Value::Object(_) => value
            .get("iata_code")
            .and_then(Value::as_str)
            .map(str::to_string),
        _ => None,
    }
}

fn extract_baggage(payload: &Value) -> Vec<BaggageAllowance> {
    let mut allowances = Vec::new();
    let segments = payload
        .get("slices")
        .and_then(Value::as_array)
        .and_then(|s| s.first())
        .and_then(|s| s.get("segments"))
        .and_then(Value::as_array);

    let baggages = segments
        .and_then(|s| s.first())
        .and_then(|s| s.get("passengers"))
        .and_then(Value::as_array)
        .and_then(|p| p.first())
        .and_then(|p| p.get("baggages"))
        .and_then(Value::as_array);

    if let Some(baggages) = baggages {
        for bag in baggages {
            let kind = bag.get("type").and_then(Value::as_str);
            let quantity = bag.get("quantity").and_then(Value::as_u64);
            if let (Some(kind), Some(quantity)) = (kind, quantity) {
                allowances.push(BaggageAllowance {
                    kind: kind.to_string(),
                    quantity: quantity as u32,
                });
            }
        }
    }
    allowances
}
