//! Contract every operation builder implements so it can be executed.

use std::fmt::Display;

use crate::error::Result;
use crate::models::{HttpHeaders, HttpMethod, RequestBody};

/// Response writer requested from Solr on every operation
pub const WT_JSON: &str = "json";

/// Describes one HTTP request against a Solr server.
///
/// `absolute_path` and `http_query_string` validate the builder and fail
/// before anything is sent. Rendering is pure: calling these again on an
/// unchanged builder yields the same request.
pub trait SolrRequest: Send + Sync {
    /// Path on the server, e.g. `/solr/admin/collections`
    fn absolute_path(&self) -> Result<String>;

    fn http_method(&self) -> HttpMethod;

    fn http_headers(&self) -> HttpHeaders;

    /// Query string without the leading `?`
    fn http_query_string(&self) -> Result<String>;

    /// Body sent when the method carries one
    fn http_body(&self) -> Result<RequestBody>;

    /// Path and query string joined by `?`
    fn request_target(&self) -> Result<String> {
        let path = self.absolute_path()?;
        let query = self.http_query_string()?;
        Ok(format!("{}?{}", path, query))
    }
}

/// Accumulates `key=value` pairs in insertion order.
///
/// Values are written as-is apart from `%` and `#`, which would otherwise be
/// read as an escape or cut the target short at a fragment.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    pairs: Vec<String>,
}

impl QueryString {
    /// Starts with `wt=json`
    pub fn json() -> Self {
        let mut query = Self::default();
        query.push("wt", WT_JSON);
        query
    }

    pub fn push(&mut self, key: &str, value: impl Display) -> &mut Self {
        let value = encode_reserved(&value.to_string());
        self.pairs.push(format!("{}={}", key, value));
        self
    }

    pub fn finish(self) -> String {
        self.pairs.join("&")
    }
}

/// Percent-encode `%` and `#` so a value survives URL parsing intact
pub(crate) fn encode_reserved(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '#' => encoded.push_str("%23"),
            c => encoded.push(c),
        }
    }
    encoded
}

/// Percent-encode every whitespace character as `%20`
pub(crate) fn encode_whitespace(query: &str) -> String {
    let mut encoded = String::with_capacity(query.len());
    for c in query.chars() {
        if c.is_whitespace() {
            encoded.push_str("%20");
        } else {
            encoded.push(c);
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl SolrRequest for Ping {
        fn absolute_path(&self) -> Result<String> {
            Ok("/solr/admin/ping".to_string())
        }

        fn http_method(&self) -> HttpMethod {
            HttpMethod::Get
        }

        fn http_headers(&self) -> HttpHeaders {
            Vec::new()
        }

        fn http_query_string(&self) -> Result<String> {
            Ok(QueryString::json().finish())
        }

        fn http_body(&self) -> Result<RequestBody> {
            Ok(RequestBody::Empty)
        }
    }

    #[test]
    fn test_request_target_joins_path_and_query() {
        assert_eq!(Ping.request_target().unwrap(), "/solr/admin/ping?wt=json");
    }

    #[test]
    fn test_query_string_keeps_insertion_order() {
        let mut query = QueryString::json();
        query.push("b", 2).push("a", "x y");
        assert_eq!(query.finish(), "wt=json&b=2&a=x y");
    }

    #[test]
    fn test_push_encodes_percent_and_hash() {
        let mut query = QueryString::json();
        query.push("q", "C#").push("fq", "rate:100%").push("name", "%23");
        assert_eq!(query.finish(), "wt=json&q=C%23&fq=rate:100%25&name=%2523");
    }

    #[test]
    fn test_encode_whitespace() {
        assert_eq!(encode_whitespace("sort=x asc"), "sort=x%20asc");
        assert_eq!(encode_whitespace("a\tb"), "a%20b");
        assert_eq!(encode_whitespace("plain"), "plain");
    }
}
