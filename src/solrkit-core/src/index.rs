//! Bulk indexing through a collection's update handler.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, ValidationError};
use crate::models::{HttpHeaders, HttpMethod, RequestBody};
use crate::request::{encode_reserved, QueryString, SolrRequest};

#[derive(Serialize)]
struct BulkUpdate<'a> {
    add: &'a [Value],
    delete: &'a [String],
}

/// Add and delete documents in one request, committed immediately
#[derive(Debug, Clone, Default)]
pub struct IndexOperation {
    collection: String,
    adds: Vec<Value>,
    deletes: Vec<String>,
}

impl IndexOperation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection to index into
    pub fn in_collection(mut self, name: impl Into<String>) -> Self {
        self.collection = name.into();
        self
    }

    /// Replace the documents to add and the ids to delete
    pub fn prepare_bulk<A, D>(mut self, adds: A, deletes: D) -> Self
    where
        A: IntoIterator<Item = Value>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.adds = adds.into_iter().collect();
        self.deletes = deletes.into_iter().map(Into::into).collect();
        self
    }

    pub fn add(mut self, document: Value) -> Self {
        self.adds.push(document);
        self
    }

    pub fn delete(mut self, id: impl Into<String>) -> Self {
        self.deletes.push(id.into());
        self
    }

    pub fn adds(&self) -> &[Value] {
        &self.adds
    }

    pub fn deletes(&self) -> &[String] {
        &self.deletes
    }
}

impl SolrRequest for IndexOperation {
    fn absolute_path(&self) -> Result<String> {
        if self.collection.is_empty() {
            return Err(ValidationError::MissingParameter("collection"));
        }
        Ok(format!("/solr/{}/update", encode_reserved(&self.collection)))
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Post
    }

    fn http_headers(&self) -> HttpHeaders {
        vec![("content-type".to_string(), "application/json".to_string())]
    }

    fn http_query_string(&self) -> Result<String> {
        let mut query = QueryString::json();
        query.push("commit", true);
        Ok(query.finish())
    }

    fn http_body(&self) -> Result<RequestBody> {
        let body = BulkUpdate {
            add: &self.adds,
            delete: &self.deletes,
        };
        let bytes =
            serde_json::to_vec(&body).map_err(|e| ValidationError::InvalidBody(e.to_string()))?;
        Ok(RequestBody::Bytes(bytes))
    }
}
