pub mod config;
pub mod logging;

pub mod calendar;
pub mod eligibility;
pub mod fetch;
pub mod model;
pub mod report;
pub mod search;
