//! CoWIN calendar payload: centers → sessions, plus per-center vaccine fees.
//!
//! Every field is optional on the wire. A missing key or an explicit `null`
//! decodes to the type's zero value (empty string, 0, empty list), so any
//! payload that matches the schema's shape decodes without error.

use serde::{Deserialize, Deserializer};

/// Treat `null` like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level body of `calendarByDistrict`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalendarResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub centers: Vec<Center>,
}

impl CalendarResponse {
    /// Parse a complete response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// A vaccination site.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Center {
    #[serde(default, deserialize_with = "null_as_default")]
    pub center_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub district_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub block_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pincode: i64,
    #[serde(default, rename = "lat", deserialize_with = "null_as_default")]
    pub latitude: f64,
    #[serde(default, rename = "long", deserialize_with = "null_as_default")]
    pub longitude: f64,
    /// "Free" or "Paid".
    #[serde(default, deserialize_with = "null_as_default")]
    pub fee_type: String,
    /// Opening time, e.g. "09:00:00".
    #[serde(default, deserialize_with = "null_as_default")]
    pub from: String,
    /// Closing time.
    #[serde(default, deserialize_with = "null_as_default")]
    pub to: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sessions: Vec<Session>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vaccine_fees: Vec<VaccineFee>,
}

/// One dated vaccination opportunity at a center.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "null_as_default")]
    pub session_id: String,
    /// As sent by the API (`DD-MM-YYYY`); not parsed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub available_capacity: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub min_age_limit: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vaccine: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slots: Vec<String>,
}

/// Fee for one vaccine at a paid center. `fee` stays textual ("Free", "780").
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VaccineFee {
    #[serde(default, deserialize_with = "null_as_default")]
    pub vaccine: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fee: String,
}

/// Flattened view of one center and one of its matching sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterResult {
    pub name: String,
    pub address: String,
    pub block_name: String,
    pub district_name: String,
    pub state_name: String,
    pub pincode: i64,
    pub to: String,
    pub from: String,
    pub latitude: f64,
    pub longitude: f64,
    pub vaccine: String,
    pub available_capacity: i64,
    pub date: String,
    pub fees: Vec<VaccineFee>,
}

impl CenterResult {
    pub fn new(center: &Center, session: &Session) -> Self {
        Self {
            name: center.name.clone(),
            address: center.address.clone(),
            block_name: center.block_name.clone(),
            district_name: center.district_name.clone(),
            state_name: center.state_name.clone(),
            pincode: center.pincode,
            to: center.to.clone(),
            from: center.from.clone(),
            latitude: center.latitude,
            longitude: center.longitude,
            vaccine: session.vaccine.clone(),
            available_capacity: session.available_capacity,
            date: session.date.clone(),
            fees: center.vaccine_fees.clone(),
        }
    }
}
