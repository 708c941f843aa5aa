//! Calendar-by-district request construction.
//!
//! Building a request is pure: nothing touches the network until
//! [`crate::fetch::fetch_calendar`] performs it.

mod request;

pub use request::{CalendarQuery, CalendarRequest, CALENDAR_BY_DISTRICT_PATH};
