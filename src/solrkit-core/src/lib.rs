//! solrkit Core Library
//!
//! This crate builds requests against the Solr REST API without doing any I/O:
//! - Query values (escaped Lucene terms, raw queries)
//! - Filter queries
//! - Operation builders for search, collections, configsets, aliases and indexing
//! - The `SolrRequest` contract used to execute any of them

pub mod alias;
pub mod collection;
pub mod config;
pub mod configset;
pub mod error;
pub mod filter;
pub mod index;
pub mod models;
pub mod query;
pub mod request;
pub mod search;

// Re-export commonly used types
pub use alias::{AliasAction, AliasOperation};
pub use collection::{CollectionAction, CollectionOperation, RouterName};
pub use config::ClientConfig;
pub use configset::{ConfigsetAction, ConfigsetOperation};
pub use error::ValidationError;
pub use filter::{FilterValue, SearchFilter};
pub use index::IndexOperation;
pub use models::*;
pub use query::{DefType, LuceneQuery, RawQuery, SearchQuery};
pub use request::SolrRequest;
pub use search::SearchOperation;
