use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use super::domain::{Item, Receipt};
use super::money::{Money, MoneyError};

static RETAILER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s\-&]+$").expect("retailer pattern compiles"));
static DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\s\-]+$").expect("description pattern compiles"));
static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern compiles"));
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));
static TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("time pattern compiles"));

/// Reason a submitted document was rejected.
///
/// Callers over HTTP only ever see a single generic rejection; the variant is
/// kept for logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("receipt must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(String),
    #[error("field `{field}` must be {expected}")]
    WrongType { field: String, expected: &'static str },
    #[error("field `{field}` does not match the allowed pattern (found {value:?})")]
    PatternMismatch { field: String, value: String },
    #[error("purchaseDate {0:?} is not a calendar date in YYYY-MM-DD form")]
    InvalidDate(String),
    #[error("purchaseTime {0:?} is not a 24-hour time in HH:MM form")]
    InvalidTime(String),
    #[error("receipt must list at least one item")]
    EmptyItems,
    #[error("field `{field}`: {source}")]
    Amount {
        field: String,
        #[source]
        source: MoneyError,
    },
}

/// Check a raw document against the intake schema and build a typed receipt.
///
/// Fields are checked in a fixed order (retailer, purchaseDate, purchaseTime,
/// items, total) and the first failure is returned.
pub fn validate_receipt(raw: &Value) -> Result<Receipt, ValidationError> {
    let fields = raw.as_object().ok_or(ValidationError::NotAnObject)?;

    let retailer = matching_string(fields, "retailer", "retailer", &RETAILER_PATTERN)?;
    let purchase_date = purchase_date(fields)?;
    let purchase_time = purchase_time(fields)?;
    let items = items(fields)?;
    let total = amount(fields, "total", "total")?;

    Ok(Receipt {
        retailer: retailer.to_string(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

fn string_field<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    label: &str,
) -> Result<&'a str, ValidationError> {
    match fields.get(key) {
        None => Err(ValidationError::MissingField(label.to_string())),
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(ValidationError::WrongType {
            field: label.to_string(),
            expected: "a string",
        }),
    }
}

fn matching_string<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    label: &str,
    pattern: &Regex,
) -> Result<&'a str, ValidationError> {
    let value = string_field(fields, key, label)?;
    if pattern.is_match(value) {
        Ok(value)
    } else {
        Err(ValidationError::PatternMismatch {
            field: label.to_string(),
            value: value.to_string(),
        })
    }
}

fn amount(fields: &Map<String, Value>, key: &str, label: &str) -> Result<Money, ValidationError> {
    let raw = matching_string(fields, key, label, &AMOUNT_PATTERN)?;
    Money::parse(raw).map_err(|source| ValidationError::Amount {
        field: label.to_string(),
        source,
    })
}

fn purchase_date(fields: &Map<String, Value>) -> Result<NaiveDate, ValidationError> {
    let raw = string_field(fields, "purchaseDate", "purchaseDate")?;
    if !DATE_SHAPE.is_match(raw) {
        return Err(ValidationError::InvalidDate(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn purchase_time(fields: &Map<String, Value>) -> Result<NaiveTime, ValidationError> {
    let raw = string_field(fields, "purchaseTime", "purchaseTime")?;
    if !TIME_SHAPE.is_match(raw) {
        return Err(ValidationError::InvalidTime(raw.to_string()));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| ValidationError::InvalidTime(raw.to_string()))
}

fn items(fields: &Map<String, Value>) -> Result<Vec<Item>, ValidationError> {
    let entries = match fields.get("items") {
        None => return Err(ValidationError::MissingField("items".to_string())),
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(ValidationError::WrongType {
                field: "items".to_string(),
                expected: "an array",
            })
        }
    };

    if entries.is_empty() {
        return Err(ValidationError::EmptyItems);
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| item(index, entry))
        .collect()
}

fn item(index: usize, entry: &Value) -> Result<Item, ValidationError> {
    let fields = entry.as_object().ok_or_else(|| ValidationError::WrongType {
        field: format!("items[{index}]"),
        expected: "an object",
    })?;

    let description = matching_string(
        fields,
        "shortDescription",
        &format!("items[{index}].shortDescription"),
        &DESCRIPTION_PATTERN,
    )?;
    let price = amount(fields, "price", &format!("items[{index}].price"))?;

    Ok(Item {
        short_description: description.to_string(),
        price,
    })
}
