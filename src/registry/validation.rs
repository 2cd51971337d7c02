//! Optional advisory checks over [`FormData`].
//!
//! The wizard itself never validates. These checks only produce hints for
//! the confirmation step when `registry.validation_hints` is enabled.
//! Empty fields are not reported.

use super::FormData;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldIssue {
    #[error("quantity \"{0}\" is not a number")]
    QuantityNotNumeric(String),
    #[error("harvest date \"{0}\" is not a YYYY-MM-DD date")]
    HarvestDateFormat(String),
    #[error("coordinates \"{0}\" are not in \"lat, lon\" form")]
    CoordinatesFormat(String),
    #[error("coordinates {lat}, {lon} are out of range")]
    CoordinatesRange { lat: f64, lon: f64 },
}

pub fn check(form: &FormData) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    let quantity = form.quantity.trim();
    if !quantity.is_empty() && quantity.parse::<f64>().map_or(true, |q| !q.is_finite()) {
        issues.push(FieldIssue::QuantityNotNumeric(form.quantity.clone()));
    }

    let date = form.harvest_date.trim();
    if !date.is_empty() && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        issues.push(FieldIssue::HarvestDateFormat(form.harvest_date.clone()));
    }

    if let Err(issue) = check_coordinates(&form.coordinates) {
        issues.push(issue);
    }

    issues
}

fn check_coordinates(raw: &str) -> Result<(), FieldIssue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(());
    }
    let malformed = || FieldIssue::CoordinatesFormat(raw.to_string());
    let (lat, lon) = raw.split_once(',').ok_or_else(malformed)?;
    let lat: f64 = lat.trim().parse().map_err(|_| malformed())?;
    let lon: f64 = lon.trim().parse().map_err(|_| malformed())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(FieldIssue::CoordinatesRange { lat, lon });
    }
    Ok(())
}
