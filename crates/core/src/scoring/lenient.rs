//! Best-effort coercions applied while deserializing dashboard payloads.
//!
//! The review endpoint never rejects a well-formed JSON body because of a
//! bad field: numbers may arrive as strings, fields may be null, rows may be
//! junk. Each helper here maps such values onto a documented default.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::warn;

use super::input::EmployeeScoreInput;
use super::weights::WeightOverrides;

/// Interpret a JSON value as a finite number, accepting numeric strings.
fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|n| n.is_finite())
}

/// Number, or 0.0 for null / non-numeric values.
pub(crate) fn number_or_zero<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(to_number(&value).unwrap_or(0.0))
}

/// Number, or `None` for null / non-numeric values.
pub(crate) fn optional_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(to_number(&value))
}

/// Text field; scalars are stringified, null and containers become `None`.
pub(crate) fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    let value = Value::deserialize(d)?;
    Ok(match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Department name, `"Unknown"` when null or unusable.
pub(crate) fn department<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(optional_text(d)?.unwrap_or_else(|| EmployeeScoreInput::UNKNOWN_DEPARTMENT.to_string()))
}

const TASK_QUALITY: &str = "taskQuality";
const TASK_QUALITY_SNAKE: &str = "task_quality";

/// One employee row. `taskQuality` wins over `task_quality` when both are
/// present; the snake_case spelling is only read when the camelCase one is
/// missing.
fn employee_row(mut fields: Map<String, Value>) -> Result<EmployeeScoreInput, serde_json::Error> {
    if let Some(snake) = fields.remove(TASK_QUALITY_SNAKE) {
        fields.entry(TASK_QUALITY).or_insert(snake);
    }
    EmployeeScoreInput::deserialize(Value::Object(fields))
}

/// Employee rows. Anything other than an array yields `None` (the caller
/// then falls back to the sample dataset); non-object rows are skipped.
pub(crate) fn employee_rows<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<Vec<EmployeeScoreInput>>, D::Error> {
    let Value::Array(rows) = Value::deserialize(d)? else {
        return Ok(None);
    };

    let mut employees = Vec::with_capacity(rows.len());
    for (index, row) in rows.into_iter().enumerate() {
        let Value::Object(fields) = row else {
            warn!(index, "Skipping employee row that is not a JSON object");
            continue;
        };
        match employee_row(fields) {
            Ok(employee) => employees.push(employee),
            Err(err) => warn!(index, error = %err, "Skipping unreadable employee row"),
        }
    }
    Ok(Some(employees))
}

/// Weight overrides; anything other than an object means "no overrides".
pub(crate) fn weight_overrides<'de, D: Deserializer<'de>>(d: D) -> Result<WeightOverrides, D::Error> {
    let value = Value::deserialize(d)?;
    if !value.is_object() {
        return Ok(WeightOverrides::default());
    }
    Ok(WeightOverrides::deserialize(value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number_accepts_numeric_strings() {
        assert_eq!(to_number(&json!(42)), Some(42.0));
        assert_eq!(to_number(&json!("87.5")), Some(87.5));
        assert_eq!(to_number(&json!(" 12 ")), Some(12.0));
    }

    #[test]
    fn test_row_with_both_task_quality_spellings_is_kept() {
        let rows = employee_rows(json!([
            {"name": "Ana", "taskQuality": 80, "task_quality": 10},
            {"name": "Bo"}
        ]))
        .unwrap()
        .unwrap();
        let names: Vec<_> = rows.iter().map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec![Some("Ana"), Some("Bo")]);
        assert_eq!(rows[0].task_quality, 80.0);
        assert_eq!(rows[1].task_quality, 0.0);
    }

    #[test]
    fn test_non_array_rows_mean_no_list() {
        assert_eq!(employee_rows(json!({"name": "Ana"})).unwrap(), None);
    }

    #[test]
    fn test_to_number_rejects_junk() {
        assert_eq!(to_number(&json!("abc")), None);
        assert_eq!(to_number(&json!(null)), None);
        assert_eq!(to_number(&json!(true)), None);
        assert_eq!(to_number(&json!([1, 2])), None);
        assert_eq!(to_number(&json!("NaN")), None);
        assert_eq!(to_number(&json!("inf")), None);
    }
}
