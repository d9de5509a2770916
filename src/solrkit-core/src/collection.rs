//! Collection management through the Collections API.

use crate::error::{Result, ValidationError};
use crate::models::{wire_enum, HttpHeaders, HttpMethod, RequestBody};
use crate::request::{QueryString, SolrRequest};

/// Path of the Collections API, shared with alias management
pub const COLLECTIONS_PATH: &str = "/solr/admin/collections";

wire_enum! {
    #[derive(Default)]
    pub enum CollectionAction: "action" {
        #[default]
        Create => "CREATE",
        Delete => "DELETE",
    }
}

wire_enum! {
    /// How documents are assigned to shards
    #[derive(Default)]
    pub enum RouterName: "router" {
        /// Hash based, needs `numShards`
        #[default]
        CompositeId => "compositeId",
        /// Caller defined, needs `shards`
        Implicit => "implicit",
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollectionOperation {
    action: CollectionAction,
    name: String,
    router_name: RouterName,
    num_shards: u32,
    shards: u32,
    config_name: String,
}

impl CollectionOperation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create collection `name` using configset `config`
    pub fn prepare_create(mut self, name: impl Into<String>, config: impl Into<String>) -> Self {
        self.action = CollectionAction::Create;
        self.name = name.into();
        self.config_name = config.into();
        self
    }

    pub fn prepare_delete(mut self, name: impl Into<String>) -> Self {
        self.action = CollectionAction::Delete;
        self.name = name.into();
        self
    }

    pub fn router_name(mut self, router: RouterName) -> Self {
        self.router_name = router;
        self
    }

    pub fn collection_config_name(mut self, name: impl Into<String>) -> Self {
        self.config_name = name.into();
        self
    }

    /// Shard count for the `compositeId` router
    pub fn num_shards(mut self, amount: u32) -> Self {
        self.num_shards = amount;
        self
    }

    /// Shard count for the `implicit` router
    pub fn shards(mut self, amount: u32) -> Self {
        self.shards = amount;
        self
    }

    pub fn action(&self) -> CollectionAction {
        self.action
    }
}

impl SolrRequest for CollectionOperation {
    fn absolute_path(&self) -> Result<String> {
        Ok(COLLECTIONS_PATH.to_string())
    }

    fn http_method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn http_headers(&self) -> HttpHeaders {
        Vec::new()
    }

    fn http_query_string(&self) -> Result<String> {
        let mut query = QueryString::json();

        if self.action == CollectionAction::Create {
            match self.router_name {
                RouterName::CompositeId => {
                    if self.num_shards == 0 {
                        return Err(ValidationError::MissingParameter("numShards"));
                    }
                    query
                        .push("router.name", self.router_name)
                        .push("numShards", self.num_shards);
                }
                RouterName::Implicit => {
                    if self.shards == 0 {
                        return Err(ValidationError::MissingParameter("shards"));
                    }
                    query
                        .push("router.name", self.router_name)
                        .push("shards", self.shards);
                }
            }
        }

        if self.name.is_empty() {
            return Err(ValidationError::MissingParameter("name"));
        }
        query.push("name", &self.name);

        if !self.config_name.is_empty() {
            query.push("collection.configName", &self.config_name);
        }
        query.push("action", self.action);

        Ok(query.finish())
    }

    fn http_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_composite_id_requires_num_shards() {
        let op = CollectionOperation::new().prepare_create("collection", "configsetid");
        assert_eq!(
            op.http_query_string().unwrap_err(),
            ValidationError::MissingParameter("numShards")
        );

        let op = op.num_shards(3);
        assert_eq!(
            op.http_query_string().unwrap(),
            "wt=json&router.name=compositeId&numShards=3&name=collection\
             &collection.configName=configsetid&action=CREATE"
        );
    }

    #[test]
    fn test_create_with_implicit_router_requires_shards() {
        let op = CollectionOperation::new()
            .router_name(RouterName::Implicit)
            .num_shards(1)
            .prepare_create("collection", "configsetid");
        assert_eq!(
            op.http_query_string().unwrap_err(),
            ValidationError::MissingParameter("shards")
        );

        let query = op.shards(2).http_query_string().unwrap();
        assert!(query.contains("router.name=implicit&shards=2"));
        assert!(query.contains("name=collection"));
    }

    #[test]
    fn test_shards_are_ignored_for_composite_id() {
        let op = CollectionOperation::new()
            .shards(1)
            .prepare_create("collection", "configsetid");
        assert!(op.http_query_string().is_err());

        let op = op.router_name(RouterName::Implicit);
        assert!(op.http_query_string().unwrap().contains("router.name=implicit"));
    }

    #[test]
    fn test_create_requires_name() {
        let op = CollectionOperation::new()
            .num_shards(3)
            .prepare_create("", "configsetid");
        assert_eq!(
            op.request_target().unwrap_err().to_string(),
            "name is required"
        );
    }

    #[test]
    fn test_delete() {
        let op = CollectionOperation::new().num_shards(3).prepare_delete("collection");
        assert_eq!(
            op.request_target().unwrap(),
            "/solr/admin/collections?wt=json&name=collection&action=DELETE"
        );
        assert!(CollectionOperation::new()
            .prepare_delete("")
            .http_query_string()
            .is_err());
    }

    #[test]
    fn test_config_name_can_be_set_separately() {
        let query = CollectionOperation::new()
            .num_shards(1)
            .prepare_create("c", "")
            .collection_config_name("other")
            .http_query_string()
            .unwrap();
        assert!(query.ends_with("&name=c&collection.configName=other&action=CREATE"));
    }

    #[test]
    fn test_action_parses_from_wire_spelling() {
        assert_eq!("DELETE".parse::<CollectionAction>().unwrap(), CollectionAction::Delete);
        assert_eq!(
            "RELOAD".parse::<CollectionAction>().unwrap_err().to_string(),
            "Could not handle action RELOAD"
        );
        assert_eq!("implicit".parse::<RouterName>().unwrap(), RouterName::Implicit);
    }
}
