pub mod airports;
pub mod bar;
pub mod dates;
pub mod passengers;

pub use bar::{QueryError, SearchBar};
pub use dates::{DateRangePicker, DateSelection};
pub use passengers::PassengerSelector;
