use serde::{Deserialize, Serialize};

/// Contracted booking fee, applied as a fixed percentage of the base fare.
/// The rate comes from configuration so every flow charges the same markup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FeeSchedule {
    pub booking_fee_rate: f64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            booking_fee_rate: 0.12,
        }
    }
}

impl FeeSchedule {
    pub fn new(booking_fee_rate: f64) -> Self {
        Self { booking_fee_rate }
    }

    /// Fee on a base fare, rounded to the nearest minor unit
    pub fn fee_minor(&self, base_minor: i64) -> i64 {
        (base_minor as f64 * self.booking_fee_rate).round() as i64
    }
}

/// Sidebar price breakdown. Inputs are stored and the total derived, so a
/// changed seat or baggage price replaces its slot instead of accumulating.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceSummary {
    pub base_minor: i64,
    pub fee_minor: i64,
    pub seat_minor: i64,
    pub baggage_minor: i64,
    pub currency: String,
}

impl PriceSummary {
    pub fn new(base_minor: i64, currency: &str, fees: &FeeSchedule) -> Self {
        Self {
            base_minor,
            fee_minor: fees.fee_minor(base_minor),
            seat_minor: 0,
            baggage_minor: 0,
            currency: currency.to_string(),
        }
    }

    pub fn set_base(&mut self, base_minor: i64, fees: &FeeSchedule) {
        self.base_minor = base_minor;
        self.fee_minor = fees.fee_minor(base_minor);
    }

    pub fn total_minor(&self) -> i64 {
        self.base_minor + self.fee_minor + self.seat_minor + self.baggage_minor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fee_rate() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.fee_minor(50000), 6000); // 12% of 500.00
    }

    #[test]
    fn test_fee_rounds_to_nearest_minor_unit() {
        let fees = FeeSchedule::new(0.12);
        assert_eq!(fees.fee_minor(104), 12); // 12.48 -> 12
        assert_eq!(fees.fee_minor(105), 13); // 12.60 -> 13
    }

    #[test]
    fn test_total_from_components() {
        let fees = FeeSchedule::default();
        let mut summary = PriceSummary::new(50000, "USD", &fees);
        summary.seat_minor = 2500;
        summary.baggage_minor = 3000;
        assert_eq!(summary.total_minor(), 50000 + 6000 + 2500 + 3000);
    }

    #[test]
    fn test_base_change_recomputes_fee_without_drift() {
        let fees = FeeSchedule::default();
        let mut summary = PriceSummary::new(50000, "USD", &fees);
        summary.set_base(60000, &fees);
        summary.set_base(60000, &fees);
        assert_eq!(summary.fee_minor, 7200);
        assert_eq!(summary.total_minor(), 67200);
    }
}
