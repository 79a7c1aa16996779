//! Donation input validation — pure logic, no database access.
//!
//! Every request body passes through [`validate_donation`] before the store
//! sees it. The evaluator keeps going after the first failure so a caller
//! gets one [`FieldViolation`] per broken field.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::donation::{DonationType, NewDonation, MAX_DONOR_NAME_LEN};
use crate::types::Timestamp;

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub rule_type: String,
    pub message: String,
}

impl FieldViolation {
    fn new(field: &str, rule_type: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            rule_type: rule_type.to_string(),
            message: message.into(),
        }
    }
}

/// Validate and normalize an untrusted donation body.
///
/// On success `donor_name` is trimmed, `amount` is a finite number and
/// `donated_at` is a concrete UTC timestamp.
pub fn validate_donation(input: &Value) -> Result<NewDonation, Vec<FieldViolation>> {
    let Some(obj) = input.as_object() else {
        return Err(vec![FieldViolation::new(
            "body",
            "type_check",
            "Request body must be a JSON object",
        )]);
    };

    let mut errors = Vec::new();

    let donor_name = collect(&mut errors, validate_donor_name(obj));
    let donation_type = collect(&mut errors, validate_donation_type(obj));
    let amount = collect(&mut errors, validate_amount(obj));
    let donated_at = collect(&mut errors, validate_donated_at(obj));

    match (donor_name, donation_type, amount, donated_at) {
        (Some(donor_name), Some(donation_type), Some(amount), Some(donated_at))
            if errors.is_empty() =>
        {
            Ok(NewDonation {
                donor_name,
                donation_type,
                amount,
                donated_at,
            })
        }
        _ => Err(errors),
    }
}

fn collect<T>(errors: &mut Vec<FieldViolation>, result: Result<T, FieldViolation>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(violation) => {
            errors.push(violation);
            None
        }
    }
}

fn present<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a Value, FieldViolation> {
    match obj.get(field) {
        None | Some(Value::Null) => Err(FieldViolation::new(
            field,
            "required",
            format!("{field} is required"),
        )),
        Some(v) => Ok(v),
    }
}

fn required_str<'a>(obj: &'a Map<String, Value>, field: &str) -> Result<&'a str, FieldViolation> {
    present(obj, field)?.as_str().ok_or_else(|| {
        FieldViolation::new(field, "type_check", format!("{field} must be a string"))
    })
}

fn validate_donor_name(obj: &Map<String, Value>) -> Result<String, FieldViolation> {
    let name = required_str(obj, "donor_name")?.trim();
    if name.is_empty() {
        return Err(FieldViolation::new(
            "donor_name",
            "min_length",
            "donor_name must not be empty",
        ));
    }
    if name.chars().count() > MAX_DONOR_NAME_LEN {
        return Err(FieldViolation::new(
            "donor_name",
            "max_length",
            format!("donor_name must be at most {MAX_DONOR_NAME_LEN} characters"),
        ));
    }
    Ok(name.to_string())
}

fn validate_donation_type(obj: &Map<String, Value>) -> Result<DonationType, FieldViolation> {
    let raw = required_str(obj, "donation_type")?;
    raw.parse().map_err(|_| {
        let allowed: Vec<&str> = DonationType::ALL.iter().map(|t| t.as_str()).collect();
        FieldViolation::new(
            "donation_type",
            "enum_values",
            format!("donation_type must be one of: {}", allowed.join(", ")),
        )
    })
}

fn validate_amount(obj: &Map<String, Value>) -> Result<f64, FieldViolation> {
    let value = present(obj, "amount")?;
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .ok_or_else(|| FieldViolation::new("amount", "type_check", "amount must be a number"))?;

    if !amount.is_finite() {
        return Err(FieldViolation::new(
            "amount",
            "type_check",
            "amount must be a finite number",
        ));
    }
    if amount < 0.0 {
        return Err(FieldViolation::new(
            "amount",
            "min_value",
            "amount must be greater than or equal to 0",
        ));
    }
    Ok(amount)
}

fn validate_donated_at(obj: &Map<String, Value>) -> Result<Timestamp, FieldViolation> {
    let raw = required_str(obj, "donated_at")?;
    parse_donated_at(raw).ok_or_else(|| {
        FieldViolation::new(
            "donated_at",
            "format",
            "Use YYYY-MM-DD or ISO datetime",
        )
    })
}

/// Parse a donation date.
///
/// Accepts `YYYY-MM-DD` (taken as UTC midnight), RFC 3339 date-times with
/// an offset, and `YYYY-MM-DDTHH:MM[:SS[.fff]]` without one (taken as UTC).
/// Everything else, including impossible calendar dates and surrounding
/// whitespace, yields `None`.
pub fn parse_donated_at(raw: &str) -> Option<Timestamp> {
    if !has_date_prefix(raw) {
        return None;
    }

    if raw.len() == 10 {
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// `true` when `s` starts with exactly `DDDD-DD-DD`.
fn has_date_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[..10].iter().enumerate().all(|(i, c)| match i {
            4 | 7 => *c == b'-',
            _ => c.is_ascii_digit(),
        })
}
