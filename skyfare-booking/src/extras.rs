use serde::{Deserialize, Serialize};

/// A seat picked on the extras step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatChoice {
    pub designator: String, // e.g., "12A"
    pub price_minor: i64,
}

/// Additional baggage picked on the extras step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaggageChoice {
    pub kind: String, // e.g., "checked"
    pub quantity: u32,
    pub price_minor: i64,
}

pub fn seat_total(seats: &[SeatChoice]) -> i64 {
    seats.iter().map(|s| s.price_minor).sum()
}

pub fn baggage_total(baggage: &[BaggageChoice]) -> i64 {
    baggage
        .iter()
        .map(|b| b.price_minor * i64::from(b.quantity))
        .sum()
}
