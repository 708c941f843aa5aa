//! Session eligibility: which sessions a person of a given age can book for a given vaccine.

use crate::model::{Center, CenterResult, Session};

/// The (vaccine, age) rule a session must satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    /// Compared byte-for-byte with `Session::vaccine` ("COVAXIN" ≠ "covaxin").
    pub vaccine: String,
    pub age: i64,
}

impl Eligibility {
    pub fn new(vaccine: impl Into<String>, age: i64) -> Self {
        Self {
            vaccine: vaccine.into(),
            age,
        }
    }

    /// Capacity is not considered; a fully booked session still matches.
    pub fn admits(&self, session: &Session) -> bool {
        session.min_age_limit <= self.age && session.vaccine == self.vaccine
    }
}

/// Every (center, session) pair admitted by `rule`, flattened, in API order.
pub fn eligible_sessions(centers: &[Center], rule: &Eligibility) -> Vec<CenterResult> {
    let mut results = Vec::new();
    for center in centers {
        for session in &center.sessions {
            if rule.admits(session) {
                results.push(CenterResult::new(center, session));
            }
        }
    }
    results
}
