//! solrkit Client Library
//!
//! Executes solrkit operations against a Solr server over HTTP.

mod client;
mod execute;
mod transport;

pub use client::SolrClient;
pub use execute::{execute, RequestLogger, TracingRequestLogger};
pub use transport::{Endpoint, HttpRequest, HttpResponse, ReqwestTransport, Transport};
pub use solrkit_core::{
    AliasAction, AliasOperation, ClientConfig, CollectionAction, CollectionOperation,
    ConfigsetAction, ConfigsetOperation, DefType, FilterValue, HttpMethod, IndexOperation,
    LuceneQuery, RawQuery, RequestBody, RouterName, SearchFilter, SearchOperation, SearchQuery,
    SolrRequest, SortOrder, ValidationError,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read request body: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON in response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Error reported by Solr in the response body
    #[error("{message}")]
    Server { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
