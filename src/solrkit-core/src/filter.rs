//! Filter queries (`fq`) narrowing search results without affecting scoring.

use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// A value a filter compares a field against
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Rendered as ISO-8601 UTC with millisecond precision
    Timestamp(DateTime<Utc>),
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Text(text) => f.write_str(text),
            FilterValue::Integer(n) => write!(f, "{}", n),
            FilterValue::Float(n) => write!(f, "{}", n),
            FilterValue::Timestamp(ts) => {
                f.write_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Integer(value.into())
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Integer(value.into())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<f32> for FilterValue {
    fn from(value: f32) -> Self {
        FilterValue::Float(value.into())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Float(value)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        FilterValue::Timestamp(value)
    }
}

/// Restricts results to documents with an accepted value in one field.
///
/// When several modes are set, `equals` wins over `ors`, which wins over
/// the `from`/`to` range. With no mode set the filter is an open range
/// (`field:[* TO *]`), matching any document that has the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    field: String,
    equals: Option<FilterValue>,
    ors: Vec<FilterValue>,
    from: Option<FilterValue>,
    to: Option<FilterValue>,
}

impl SearchFilter {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Exact value the field should contain
    pub fn equals(mut self, value: impl Into<FilterValue>) -> Self {
        self.equals = Some(value.into());
        self
    }

    /// Values of which the field should contain at least one
    pub fn ors<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue>,
    {
        self.ors = values.into_iter().map(Into::into).collect();
        self
    }

    /// Inclusive start of a range
    pub fn from(mut self, value: impl Into<FilterValue>) -> Self {
        self.from = Some(value.into());
        self
    }

    /// Inclusive end of a range
    pub fn to(mut self, value: impl Into<FilterValue>) -> Self {
        self.to = Some(value.into());
        self
    }

    /// Render the clause sent as `fq`, empty when no field was given
    pub fn to_query_param(&self) -> String {
        if self.field.is_empty() {
            return String::new();
        }

        if let Some(value) = &self.equals {
            return format!("{}:{}", self.field, value);
        }

        if !self.ors.is_empty() {
            let values: Vec<String> = self.ors.iter().map(ToString::to_string).collect();
            return format!("{}:({})", self.field, values.join(" OR "));
        }

        let bound = |value: &Option<FilterValue>| {
            value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "*".to_string())
        };
        format!("{}:[{} TO {}]", self.field, bound(&self.from), bound(&self.to))
    }
}

impl fmt::Display for SearchFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_param())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_equals() {
        assert_eq!(SearchFilter::new("f").equals(5).to_query_param(), "f:5");
        assert_eq!(
            SearchFilter::new("field1").equals("value1").to_query_param(),
            "field1:value1"
        );
    }

    #[test]
    fn test_equals_zero_is_still_a_value() {
        assert_eq!(SearchFilter::new("f").equals(0).to_query_param(), "f:0");
    }

    #[test]
    fn test_ors() {
        let filter = SearchFilter::new("f").ors(["a", "b"]);
        assert_eq!(filter.to_query_param(), "f:(a OR b)");

        let filter = SearchFilter::new("n").ors([1, 2, 3]);
        assert_eq!(filter.to_query_param(), "n:(1 OR 2 OR 3)");
    }

    #[test]
    fn test_no_mode_is_open_range() {
        assert_eq!(SearchFilter::new("f").to_query_param(), "f:[* TO *]");
    }

    #[test]
    fn test_ranges() {
        assert_eq!(
            SearchFilter::new("f").from("x").to("y").to_query_param(),
            "f:[x TO y]"
        );
        assert_eq!(SearchFilter::new("f").from(5).to(10).to_query_param(), "f:[5 TO 10]");
        assert_eq!(SearchFilter::new("f").from(5).to_query_param(), "f:[5 TO *]");
        assert_eq!(SearchFilter::new("f").to(1.5).to_query_param(), "f:[* TO 1.5]");
    }

    #[test]
    fn test_equals_takes_precedence_over_ors_and_range() {
        let filter = SearchFilter::new("f").from(1).to(2).ors(["a"]).equals("b");
        assert_eq!(filter.to_query_param(), "f:b");

        let filter = SearchFilter::new("f").from(1).to(2).ors(["a", "c"]);
        assert_eq!(filter.to_query_param(), "f:(a OR c)");
    }

    #[test]
    fn test_empty_ors_falls_back_to_range() {
        let empty: [&str; 0] = [];
        let filter = SearchFilter::new("f").ors(empty).from(3);
        assert_eq!(filter.to_query_param(), "f:[3 TO *]");
    }

    #[test]
    fn test_empty_field_renders_nothing() {
        assert_eq!(SearchFilter::new("").equals("x").to_query_param(), "");
    }

    #[test]
    fn test_timestamp_renders_iso_millis_utc() {
        let ts = Utc.with_ymd_and_hms(2003, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(42);
        assert_eq!(
            SearchFilter::new("created").equals(ts).to_query_param(),
            "created:2003-01-01T00:00:00.042Z"
        );
    }

    #[test]
    fn test_timestamp_round_trips_at_millisecond_precision() {
        let ts = Utc.timestamp_millis_opt(1_700_000_123_456).unwrap();
        let rendered = FilterValue::from(ts).to_string();
        assert!(rendered.ends_with('Z'));

        let parsed = DateTime::parse_from_rfc3339(&rendered)
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(parsed, ts);
    }

    #[test]
    fn test_timestamp_range() {
        let from = Utc.with_ymd_and_hms(2003, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2004, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            SearchFilter::new("started").from(from).to(to).to_query_param(),
            "started:[2003-01-01T00:00:00.000Z TO 2004-01-01T00:00:00.000Z]"
        );
    }
}
