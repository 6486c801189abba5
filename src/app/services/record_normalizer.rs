//! Record normalization for raw station rows
//!
//! Raw station files carry every field as text. This module turns each field
//! into a tagged [`FieldValue`] once, at the input boundary, and coerces a
//! normalized row into a typed [`Station`].

use crate::app::models::Station;
use crate::constants::{FALSE_TOKEN, NULL_TOKEN, STATION_FIELD_COUNT, TRUE_TOKEN, columns};
use crate::{Error, Result};
use csv::StringRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single normalized field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Absent,
    Text(String),
}

impl FieldValue {
    /// Normalize one raw field
    ///
    /// `"True"`/`"False"` become booleans, `""`/`"null"` become [`FieldValue::Absent`],
    /// decimal numbers become integers (no `.`) or reals, everything else
    /// is kept as text.
    pub fn parse(raw: &str) -> Self {
        match raw {
            TRUE_TOKEN => return FieldValue::Boolean(true),
            FALSE_TOKEN => return FieldValue::Boolean(false),
            "" | NULL_TOKEN => return FieldValue::Absent,
            _ => {}
        }

        if is_decimal_number(raw) {
            let trimmed = raw.trim();
            if trimmed.contains('.') {
                if let Ok(value) = trimmed.parse::<f64>() {
                    return FieldValue::Real(value);
                }
            } else if let Ok(value) = trimmed.parse::<i64>() {
                return FieldValue::Integer(value);
            } else if let Ok(value) = trimmed.parse::<f64>() {
                // Too wide for i64
                return FieldValue::Real(value);
            }
        }

        FieldValue::Text(raw.to_string())
    }

    /// Short name of the variant for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Integer(_) => "integer",
            FieldValue::Real(_) => "real",
            FieldValue::Boolean(_) => "boolean",
            FieldValue::Absent => "absent",
            FieldValue::Text(_) => "text",
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Real(value) => write!(f, "{}", value),
            FieldValue::Boolean(true) => f.write_str(TRUE_TOKEN),
            FieldValue::Boolean(false) => f.write_str(FALSE_TOKEN),
            FieldValue::Absent => Ok(()),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// Whether `value` spells a decimal number: optional sign, digits, at most
/// one `.`, surrounding whitespace ignored
pub fn is_decimal_number(value: &str) -> bool {
    let trimmed = value.trim();
    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);

    let mut digits = 0;
    let mut dots = 0;
    for c in unsigned.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }

    digits > 0 && dots <= 1
}

/// Normalize every field of a raw CSV record
pub fn normalize_record(record: &StringRecord) -> Vec<FieldValue> {
    record.iter().map(FieldValue::parse).collect()
}

// =============================================================================
// Row Coercion
// =============================================================================

impl TryFrom<&[FieldValue]> for Station {
    type Error = Error;

    fn try_from(fields: &[FieldValue]) -> Result<Self> {
        if fields.len() != STATION_FIELD_COUNT {
            return Err(Error::data_validation(format!(
                "Expected {} fields ({}), found {}",
                STATION_FIELD_COUNT,
                columns::ALL.join(","),
                fields.len()
            )));
        }

        let id = expect_integer(&fields[0], columns::ID)?;
        let id = i32::try_from(id).map_err(|_| {
            Error::data_validation(format!("Station id {} does not fit in 32 bits", id))
        })?;

        Station::new(
            id,
            expect_text(&fields[1], columns::NAME)?,
            expect_real(&fields[2], columns::LATITUDE)?,
            expect_real(&fields[3], columns::LONGITUDE)?,
            expect_count(&fields[4], columns::CAPACITY)?,
            expect_count(&fields[5], columns::BIKES_AVAILABLE)?,
            expect_count(&fields[6], columns::DOCKS_AVAILABLE)?,
            expect_boolean(&fields[7], columns::IS_RENTING)?,
            expect_boolean(&fields[8], columns::IS_RETURNING)?,
        )
    }
}

fn type_mismatch(field_name: &str, expected: &str, value: &FieldValue) -> Error {
    if value.is_absent() {
        Error::data_validation(format!("Missing value for required column '{}'", field_name))
    } else {
        Error::data_validation(format!(
            "Invalid {} for {}: '{}' ({})",
            expected,
            field_name,
            value,
            value.kind()
        ))
    }
}

fn expect_integer(value: &FieldValue, field_name: &str) -> Result<i64> {
    match value {
        FieldValue::Integer(v) => Ok(*v),
        other => Err(type_mismatch(field_name, "integer", other)),
    }
}

fn expect_count(value: &FieldValue, field_name: &str) -> Result<u32> {
    let raw = expect_integer(value, field_name)?;
    u32::try_from(raw).map_err(|_| {
        Error::data_validation(format!(
            "Invalid count for {}: {} (must be a non-negative 32-bit integer)",
            field_name, raw
        ))
    })
}

fn expect_real(value: &FieldValue, field_name: &str) -> Result<f64> {
    match value {
        FieldValue::Real(v) => Ok(*v),
        FieldValue::Integer(v) => Ok(*v as f64),
        other => Err(type_mismatch(field_name, "real number", other)),
    }
}

fn expect_boolean(value: &FieldValue, field_name: &str) -> Result<bool> {
    match value {
        FieldValue::Boolean(v) => Ok(*v),
        other => Err(type_mismatch(field_name, "boolean", other)),
    }
}

// Numeric and boolean names are rendered back to text in canonical form;
// `parse_station_record` restores the raw spelling.
fn expect_text(value: &FieldValue, field_name: &str) -> Result<String> {
    match value {
        FieldValue::Absent => Err(type_mismatch(field_name, "text", value)),
        other => Ok(other.to_string()),
    }
}
