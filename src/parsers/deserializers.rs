use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a field as `Some(T)` when its JSON value fits `T`, `None` otherwise.
///
/// Log records come from an upstream tool whose schema drifts; a wrongly typed field
/// must not cost us the rest of the record.
pub fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// JSON truthiness: `false`, `null`, `0`, `""`, `[]` and `{}` are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Parse an ISO-8601 timestamp into a local datetime.
///
/// A trailing `Z` is rewritten to `+00:00` first. Timestamps without an offset are
/// taken as local time, and a bare date means local midnight. Returns `None` for
/// anything unparseable, including surrounding whitespace.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    if raw.starts_with(char::is_whitespace) || raw.ends_with(char::is_whitespace) {
        return None;
    }
    let normalized = match raw.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => raw.to_string(),
    };

    if let Ok(dt) = normalized.parse::<DateTime<FixedOffset>>() {
        return Some(dt.with_timezone(&Local));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(&normalized, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").ok().and_then(|d| d.and_hms_opt(0, 0, 0))
        })?;

    Local.from_local_datetime(&naive).earliest()
}

/// Local calendar date of a record timestamp, if it parses
pub fn local_date_of(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|dt| dt.date_naive())
}
