use skyfare_core::query::{CabinClass, PassengerCount};

/// Default per-category ceiling, airline convention
pub const DEFAULT_MAX_PER_CATEGORY: u32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelerCategory {
    Adults,
    Children,
    Infants,
}

/// Counter form for traveler headcounts plus a single-select cabin class.
/// Adults floor at one, everything else at zero; all counts cap at the
/// configured per-category maximum. Out-of-range steps are no-ops.
#[derive(Debug, Clone)]
pub struct PassengerSelector {
    counts: PassengerCount,
    cabin_class: CabinClass,
    max_per_category: u32,
}

impl PassengerSelector {
    /// Open the selector seeded from the caller's last-applied values
    pub fn open(counts: PassengerCount, cabin_class: CabinClass) -> Self {
        Self::with_max(counts, cabin_class, DEFAULT_MAX_PER_CATEGORY)
    }

    pub fn with_max(counts: PassengerCount, cabin_class: CabinClass, max_per_category: u32) -> Self {
        Self {
            counts,
            cabin_class,
            max_per_category,
        }
    }

    pub fn counts(&self) -> PassengerCount {
        self.counts
    }

    pub fn cabin_class(&self) -> CabinClass {
        self.cabin_class
    }

    /// Headline total shown on the apply button
    pub fn total(&self) -> u32 {
        self.counts.total()
    }

    pub fn increment(&mut self, category: TravelerCategory) {
        let max = self.max_per_category;
        let slot = self.slot(category);
        if *slot < max {
            *slot += 1;
        }
    }

    pub fn decrement(&mut self, category: TravelerCategory) {
        let floor = match category {
            TravelerCategory::Adults => 1,
            _ => 0,
        };
        let slot = self.slot(category);
        if *slot > floor {
            *slot -= 1;
        }
    }

    pub fn set_cabin_class(&mut self, cabin_class: CabinClass) {
        self.cabin_class = cabin_class;
    }

    /// Commit the current counts and class back to the caller
    pub fn apply(&self) -> (PassengerCount, CabinClass) {
        (self.counts, self.cabin_class)
    }

    fn slot(&mut self, category: TravelerCategory) -> &mut u32 {
        match category {
            TravelerCategory::Adults => &mut self.counts.adults,
            TravelerCategory::Children => &mut self.counts.children,
            TravelerCategory::Infants => &mut self.counts.infants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_default() -> PassengerSelector {
        PassengerSelector::open(PassengerCount::default(), CabinClass::Economy)
    }

    #[test]
    fn test_adults_floor_at_one() {
        let mut selector = open_default();
        selector.decrement(TravelerCategory::Adults);
        assert_eq!(selector.counts().adults, 1);
    }

    #[test]
    fn test_children_and_infants_floor_at_zero() {
        let mut selector = open_default();
        selector.decrement(TravelerCategory::Children);
        selector.decrement(TravelerCategory::Infants);
        assert_eq!(selector.counts().children, 0);
        assert_eq!(selector.counts().infants, 0);
    }

    #[test]
    fn test_increment_caps_at_max() {
        let mut selector = PassengerSelector::with_max(
            PassengerCount::default(),
            CabinClass::Economy,
            2,
        );
        selector.increment(TravelerCategory::Adults);
        selector.increment(TravelerCategory::Adults);
        selector.increment(TravelerCategory::Adults);
        assert_eq!(selector.counts().adults, 2);

        selector.increment(TravelerCategory::Children);
        selector.increment(TravelerCategory::Children);
        selector.increment(TravelerCategory::Children);
        assert_eq!(selector.counts().children, 2);
    }

    #[test]
    fn test_cabin_class_single_select() {
        let mut selector = open_default();
        selector.set_cabin_class(CabinClass::Business);
        selector.set_cabin_class(CabinClass::First);
        assert_eq!(selector.cabin_class(), CabinClass::First);
    }

    #[test]
    fn test_apply_emits_current_state() {
        let mut selector = open_default();
        selector.increment(TravelerCategory::Adults);
        selector.increment(TravelerCategory::Children);
        selector.set_cabin_class(CabinClass::PremiumEconomy);

        let (counts, cabin) = selector.apply();
        assert_eq!(counts.adults, 2);
        assert_eq!(counts.children, 1);
        assert_eq!(cabin, CabinClass::PremiumEconomy);
        assert_eq!(selector.total(), 3);
    }

    #[test]
    fn test_reopen_seeds_from_applied_values() {
        let mut selector = open_default();
        selector.increment(TravelerCategory::Adults);
        let (counts, cabin) = selector.apply();

        let reopened = PassengerSelector::open(counts, cabin);
        assert_eq!(reopened.counts().adults, 2);
    }
}
