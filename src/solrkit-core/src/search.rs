use crate::error::{Result, ValidationError};
use crate::filter::SearchFilter;
use crate::models::{HttpHeaders, HttpMethod, RequestBody, SortOrder};
use crate::query::SearchQuery;
use crate::request::{encode_reserved, encode_whitespace, QueryString, SolrRequest};

/// Request handler used when none is configured
pub const DEFAULT_HANDLER: &str = "select";

/// Search a collection through one of its request handlers
///
/// ```
/// use solrkit_core::{LuceneQuery, SearchFilter, SearchOperation, SortOrder};
///
/// let search = SearchOperation::new()
///     .in_collection("beers")
///     .query(LuceneQuery::new().term("home brewery").in_field("title"))
///     .filter(SearchFilter::new("abv").from(5).to(8))
///     .sort("name", SortOrder::Asc)
///     .limit(20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchOperation {
    query: SearchQuery,
    start: u64,
    rows: u64,
    sort: Option<(String, SortOrder)>,
    filters: Vec<SearchFilter>,
    facet_fields: Vec<String>,
    fields: Vec<String>,
    collection: String,
    handler: String,
}

impl SearchOperation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query to search for, defaults to `*:*`
    pub fn query(mut self, query: impl Into<SearchQuery>) -> Self {
        self.query = query.into();
        self
    }

    /// Offset of the first result to return
    pub fn offset(mut self, offset: u64) -> Self {
        self.start = offset;
        self
    }

    /// Maximum number of results, server default when zero
    pub fn limit(mut self, limit: u64) -> Self {
        self.rows = limit;
        self
    }

    /// Add a field to return for each result
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Add a field Solr should facet on
    pub fn facet_on_field(mut self, field: impl Into<String>) -> Self {
        self.facet_fields.push(field.into());
        self
    }

    /// Collection to search in
    pub fn in_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub fn filter(mut self, filter: SearchFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn sort(mut self, on: impl Into<String>, order: SortOrder) -> Self {
        self.sort = Some((on.into(), order));
        self
    }

    /// Request handler to use instead of `select`
    pub fn handler(mut self, handler: impl Into<String>) -> Self {
        self.handler = handler.into();
        self
    }
}

impl SolrRequest for SearchOperation {
    fn absolute_path(&self) -> Result<String> {
        if self.collection.is_empty() {
            return Err(ValidationError::MissingParameter("collection"));
        }
        let handler = if self.handler.is_empty() {
            DEFAULT_HANDLER
        } else {
            &self.handler
        };
        Ok(format!(
            "/solr/{}/{}",
            encode_reserved(&self.collection),
            encode_reserved(handler)
        ))
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn http_headers(&self) -> HttpHeaders {
        Vec::new()
    }

    fn http_query_string(&self) -> Result<String> {
        let mut query = QueryString::json();
        query
            .push("q", &self.query)
            .push("defType", self.query.def_type());

        if let Some((field, order)) = &self.sort {
            if !field.is_empty() {
                query.push("sort", format_args!("{} {}", field, order));
            }
        }
        if self.start != 0 {
            query.push("start", self.start);
        }
        for filter in &self.filters {
            query.push("fq", filter);
        }
        if !self.facet_fields.is_empty() {
            query.push("facet", true);
            for field in &self.facet_fields {
                query.push("facet.field", field);
            }
        }
        if !self.fields.is_empty() {
            query.push("fl", self.fields.join(","));
        }
        if self.rows != 0 {
            query.push("rows", self.rows);
        }

        Ok(encode_whitespace(&query.finish()))
    }

    fn http_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }
}
