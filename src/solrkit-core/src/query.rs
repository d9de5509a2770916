//! Query values rendered into the `q` parameter of a search.

use std::fmt;

use crate::models::wire_enum;

wire_enum! {
    /// Query parser Solr should use for `q`
    #[derive(Default)]
    pub enum DefType: "defType" {
        #[default]
        Lucene => "lucene",
        Dismax => "dismax",
        Edismax => "edismax",
    }
}

/// Escape Lucene syntax characters in a term.
///
/// Every special character, and each `&&` or `||` pair, gets one
/// backslash in front of it.
pub fn escape_term(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 8);
    let mut chars = term.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '+' | '-' | '!' | '(' | ')' | '{' | '}' | '[' | ']' | '^' | '"' | '~' | '*' | '?'
            | ':' | '/' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '&' | '|' if chars.peek() == Some(&c) => {
                chars.next();
                escaped.push('\\');
                escaped.push(c);
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }

    escaped
}

/// Boolean query over escaped, quoted terms
///
/// Renders as `field:("t1" "t2")^weight`; with no terms it matches
/// everything (`*:*`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LuceneQuery {
    terms: Vec<String>,
    field: Option<String>,
    weight: f64,
}

impl LuceneQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term to search on
    pub fn term(mut self, term: impl AsRef<str>) -> Self {
        self.terms.push(format!("\"{}\"", escape_term(term.as_ref())));
        self
    }

    /// Field to search in, defaults to the server's default field
    pub fn in_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Boost for matches in this field, ignored when zero
    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn def_type(&self) -> DefType {
        DefType::Lucene
    }
}

impl fmt::Display for LuceneQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self
            .field
            .as_deref()
            .filter(|field| !field.is_empty())
            .unwrap_or("*");

        if self.terms.is_empty() {
            write!(f, "{}:*", field)?;
        } else {
            write!(f, "{}:({})", field, self.terms.join(" "))?;
        }

        if self.weight != 0.0 {
            write!(f, "^{}", self.weight)?;
        }
        Ok(())
    }
}

/// Query passed to Solr verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    term: String,
}

impl RawQuery {
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn def_type(&self) -> DefType {
        DefType::Lucene
    }
}

impl fmt::Display for RawQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.term)
    }
}

/// Any query a search operation can send as `q`
#[derive(Debug, Clone, PartialEq)]
pub enum SearchQuery {
    Lucene(LuceneQuery),
    Raw(RawQuery),
}

impl SearchQuery {
    pub fn def_type(&self) -> DefType {
        match self {
            SearchQuery::Lucene(query) => query.def_type(),
            SearchQuery::Raw(query) => query.def_type(),
        }
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        SearchQuery::Lucene(LuceneQuery::default())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchQuery::Lucene(query) => fmt::Display::fmt(query, f),
            SearchQuery::Raw(query) => fmt::Display::fmt(query, f),
        }
    }
}

impl From<LuceneQuery> for SearchQuery {
    fn from(query: LuceneQuery) -> Self {
        SearchQuery::Lucene(query)
    }
}

impl From<RawQuery> for SearchQuery {
    fn from(query: RawQuery) -> Self {
        SearchQuery::Raw(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_special_characters() {
        let query = LuceneQuery::new().term(r#"+ - && || ! ( ) { } [ ] ^ " ~ * ? : /"#);
        assert_eq!(
            query.to_string(),
            r#"*:("\+ \- \&& \|| \! \( \) \{ \} \[ \] \^ \" \~ \* \? \: \/")"#
        );
    }

    #[test]
    fn test_escapes_backslash_and_leaves_single_ampersand() {
        assert_eq!(escape_term(r"a\b"), r"a\\b");
        assert_eq!(escape_term("a & b | c"), "a & b | c");
        assert_eq!(escape_term("&&&"), r"\&&&");
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(LuceneQuery::new().to_string(), "*:*");
        assert_eq!(LuceneQuery::new().in_field("title").to_string(), "title:*");
        assert_eq!(SearchQuery::default().to_string(), "*:*");
    }

    #[test]
    fn test_multiple_terms_in_field_with_weight() {
        let query = LuceneQuery::new()
            .term("beer")
            .term("home brewery")
            .in_field("title")
            .weight(1.0);
        assert_eq!(query.to_string(), r#"title:("beer" "home brewery")^1"#);
    }

    #[test]
    fn test_zero_weight_has_no_boost() {
        let query = LuceneQuery::new().term("a").weight(0.0);
        assert_eq!(query.to_string(), r#"*:("a")"#);
    }

    #[test]
    fn test_fractional_weight() {
        let query = LuceneQuery::new().term("ale").weight(2.5);
        assert_eq!(query.to_string(), r#"*:("ale")^2.5"#);
    }

    #[test]
    fn test_raw_query_is_not_escaped() {
        let raw = "started:[2003-01-01T00:00:00.000Z TO 2004-01-01T00:00:00.000Z] OR ended:[2003-01-01T00:00:00.000Z TO 2004-01-01T00:00:00.000Z]";
        let query: SearchQuery = RawQuery::new(raw).into();
        assert_eq!(query.to_string(), raw);
        assert_eq!(query.def_type(), DefType::Lucene);
    }

    #[test]
    fn test_raw_query_term_replaces_previous() {
        let query = RawQuery::new("a:1").term("b:2");
        assert_eq!(query.to_string(), "b:2");
    }
}
