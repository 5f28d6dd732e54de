use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use skyfare_core::query::TripType;

/// The committed outcome of a picker session. `return_date` is None for
/// one-way selections.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateSelection {
    pub departure_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
}

/// Values the picker is reseeded from every time it opens
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRangeSeed {
    pub departure_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub trip_type: Option<TripType>,
}

/// Calendar range picker. All invalid interactions are no-ops; the only exit
/// is `finish`, which is gated on a complete selection.
#[derive(Debug, Clone)]
pub struct DateRangePicker {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    return_enabled: bool,
    visible_month: NaiveDate,
    today: NaiveDate,
}

impl DateRangePicker {
    /// Open the picker seeded from the caller's committed state. A previous
    /// abandoned edit never leaks into a new session.
    pub fn open(seed: DateRangeSeed, today: NaiveDate) -> Self {
        let visible = seed.departure_date.unwrap_or(today);
        Self {
            start: seed.departure_date,
            end: seed.return_date,
            return_enabled: seed.trip_type == Some(TripType::RoundTrip),
            visible_month: first_of_month(visible),
            today,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn return_enabled(&self) -> bool {
        self.return_enabled
    }

    pub fn visible_month(&self) -> NaiveDate {
        self.visible_month
    }

    /// Handle a click on a calendar day. Past dates are ignored; today is
    /// selectable. With the return toggle on, an out-of-order second click
    /// reorders into a valid range instead of erroring.
    pub fn select(&mut self, date: NaiveDate) {
        if date < self.today {
            return;
        }

        if !self.return_enabled {
            self.start = Some(date);
            self.end = None;
            return;
        }

        match (self.start, self.end) {
            (None, _) | (Some(_), Some(_)) => {
                // Start a fresh range
                self.start = Some(date);
                self.end = None;
            }
            (Some(start), None) if date > start => {
                self.end = Some(date);
            }
            (Some(start), None) => {
                // Swap tie-break: second click at or before the start
                self.start = Some(date);
                self.end = Some(start);
            }
        }
    }

    /// Toggling the return leg off discards any selected end date
    pub fn set_return_enabled(&mut self, enabled: bool) {
        self.return_enabled = enabled;
        if !enabled {
            self.end = None;
        }
    }

    pub fn can_finish(&self) -> bool {
        self.start.is_some() && (!self.return_enabled || self.end.is_some())
    }

    /// Commit the selection. Returns None while the finish gate is closed.
    pub fn finish(&self) -> Option<DateSelection> {
        if !self.can_finish() {
            return None;
        }
        Some(DateSelection {
            departure_date: self.start?,
            return_date: if self.return_enabled { self.end } else { None },
        })
    }

    /// Month navigation never touches the selection
    pub fn next_month(&mut self) {
        self.visible_month = self.visible_month + Months::new(1);
    }

    pub fn prev_month(&mut self) {
        self.visible_month = self.visible_month - Months::new(1);
    }

    pub fn grid(&self) -> MonthGrid {
        MonthGrid::for_month(self.visible_month)
    }
}

/// One month of calendar cells: leading/trailing blanks pad the day list to
/// whole Sunday-to-Saturday weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: NaiveDate,
    pub leading_blanks: u32,
    pub days: Vec<NaiveDate>,
    pub trailing_blanks: u32,
}

impl MonthGrid {
    pub fn for_month(any_day: NaiveDate) -> Self {
        let first = first_of_month(any_day);
        let next_first = first + Months::new(1);
        let last = next_first.pred_opt().unwrap_or(first);

        let days = first.iter_days().take_while(|d| *d < next_first).collect();

        Self {
            month: first,
            leading_blanks: first.weekday().num_days_from_sunday(),
            days,
            trailing_blanks: 6 - last.weekday().num_days_from_sunday(),
        }
    }

    /// Total cell count, always a multiple of seven
    pub fn cell_count(&self) -> usize {
        self.leading_blanks as usize + self.days.len() + self.trailing_blanks as usize
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists for a valid year/month
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 8, 1)
    }

    fn open_round_trip() -> DateRangePicker {
        DateRangePicker::open(
            DateRangeSeed {
                trip_type: Some(TripType::RoundTrip),
                ..DateRangeSeed::default()
            },
            today(),
        )
    }

    #[test]
    fn test_in_order_range() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 8, 10));
        picker.select(date(2025, 8, 15));
        assert_eq!(picker.start(), Some(date(2025, 8, 10)));
        assert_eq!(picker.end(), Some(date(2025, 8, 15)));
    }

    #[test]
    fn test_out_of_order_swap() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 8, 15));
        picker.select(date(2025, 8, 10));
        assert_eq!(picker.start(), Some(date(2025, 8, 10)));
        assert_eq!(picker.end(), Some(date(2025, 8, 15)));
    }

    #[test]
    fn test_same_day_second_click_yields_zero_length_range() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 8, 10));
        picker.select(date(2025, 8, 10));
        assert_eq!(picker.start(), Some(date(2025, 8, 10)));
        assert_eq!(picker.end(), Some(date(2025, 8, 10)));
    }

    #[test]
    fn test_third_click_starts_fresh_range() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 8, 10));
        picker.select(date(2025, 8, 15));
        picker.select(date(2025, 8, 20));
        assert_eq!(picker.start(), Some(date(2025, 8, 20)));
        assert_eq!(picker.end(), None);
    }

    #[test]
    fn test_past_dates_are_ignored_today_is_selectable() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 7, 31));
        assert_eq!(picker.start(), None);

        picker.select(today());
        assert_eq!(picker.start(), Some(today()));
    }

    #[test]
    fn test_one_way_select_clears_end() {
        let mut picker = DateRangePicker::open(DateRangeSeed::default(), today());
        assert!(!picker.return_enabled());
        picker.select(date(2025, 8, 10));
        picker.select(date(2025, 8, 15));
        assert_eq!(picker.start(), Some(date(2025, 8, 15)));
        assert_eq!(picker.end(), None);
    }

    #[test]
    fn test_toggle_off_clears_end() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 8, 10));
        picker.select(date(2025, 8, 15));
        picker.set_return_enabled(false);
        assert_eq!(picker.end(), None);
        assert_eq!(picker.start(), Some(date(2025, 8, 10)));
    }

    #[test]
    fn test_finish_gating() {
        let mut picker = open_round_trip();
        assert!(picker.finish().is_none());

        picker.select(date(2025, 8, 10));
        assert!(picker.finish().is_none()); // return leg still missing

        picker.select(date(2025, 8, 15));
        let selection = picker.finish().unwrap();
        assert_eq!(selection.departure_date, date(2025, 8, 10));
        assert_eq!(selection.return_date, Some(date(2025, 8, 15)));
    }

    #[test]
    fn test_finish_omits_return_when_toggle_off() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 8, 10));
        picker.set_return_enabled(false);
        let selection = picker.finish().unwrap();
        assert_eq!(selection.return_date, None);
    }

    #[test]
    fn test_reopen_reseeds_from_committed_values() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 8, 20)); // abandoned edit

        let reopened = DateRangePicker::open(
            DateRangeSeed {
                departure_date: Some(date(2025, 8, 10)),
                return_date: Some(date(2025, 8, 15)),
                trip_type: Some(TripType::RoundTrip),
            },
            today(),
        );
        assert_eq!(reopened.start(), Some(date(2025, 8, 10)));
        assert_eq!(reopened.end(), Some(date(2025, 8, 15)));
        assert_eq!(reopened.visible_month(), date(2025, 8, 1));
    }

    #[test]
    fn test_month_navigation_keeps_selection() {
        let mut picker = open_round_trip();
        picker.select(date(2025, 8, 10));
        picker.next_month();
        picker.next_month();
        picker.prev_month();
        assert_eq!(picker.visible_month(), date(2025, 9, 1));
        assert_eq!(picker.start(), Some(date(2025, 8, 10)));
    }

    #[test]
    fn test_month_grid_august_2025() {
        // August 2025 starts on a Friday and ends on a Sunday
        let grid = MonthGrid::for_month(date(2025, 8, 15));
        assert_eq!(grid.leading_blanks, 5);
        assert_eq!(grid.days.len(), 31);
        assert_eq!(grid.trailing_blanks, 6);
        assert_eq!(grid.cell_count() % 7, 0);
        assert_eq!(grid.days[0], date(2025, 8, 1));
        assert_eq!(*grid.days.last().unwrap(), date(2025, 8, 31));
    }

    #[test]
    fn test_month_grid_february_leap_year() {
        let grid = MonthGrid::for_month(date(2024, 2, 1));
        assert_eq!(grid.days.len(), 29);
        assert_eq!(grid.cell_count() % 7, 0);
    }
}
