use chrono::{NaiveDate, NaiveDateTime};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Local wall-clock time, `YYYY-MM-DDTHH:MM[:SS]` (a space also separates).
pub(crate) fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    let trimmed = raw.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| format!("failed to parse '{raw}' as YYYY-MM-DDTHH:MM"))
}

/// Parses a `questionId=value` questionnaire answer.
pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected questionId=value, got '{raw}'"))?;
    let (question, value) = (question.trim(), value.trim());
    if question.is_empty() || value.is_empty() {
        return Err(format!("expected questionId=value, got '{raw}'"));
    }
    Ok((question.to_string(), value.to_string()))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.filter(|value| !value.trim().is_empty())
        .map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_timestamp(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_split_on_the_first_equals() {
        assert_eq!(
            parse_answer("q1=very-irregular"),
            Ok(("q1".to_string(), "very-irregular".to_string()))
        );
        assert!(parse_answer("q1").is_err());
        assert!(parse_answer("=no").is_err());
    }

    #[test]
    fn timestamps_accept_minutes_or_seconds() {
        let expected = parse_date("2025-06-01")
            .ok()
            .and_then(|date| date.and_hms_opt(8, 30, 0));
        assert_eq!(parse_timestamp("2025-06-01T08:30").ok(), expected);
        assert_eq!(parse_timestamp("2025-06-01 08:30:00").ok(), expected);
        assert!(parse_timestamp("tomorrow").is_err());
    }
}
