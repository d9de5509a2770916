use serde_json::Value;
use solrkit_core::{
    AliasOperation, ClientConfig, CollectionOperation, ConfigsetOperation, IndexOperation,
    SearchOperation, SolrRequest,
};
use std::sync::Arc;

use crate::execute::{execute, RequestLogger, TracingRequestLogger};
use crate::transport::{Endpoint, ReqwestTransport, Transport};
use crate::Result;

/// Solr REST API Client
#[derive(Clone)]
pub struct SolrClient {
    endpoint: Endpoint,
    api_version: f32,
    transport: Arc<dyn Transport>,
    logger: Option<Arc<dyn RequestLogger>>,
}

impl SolrClient {
    /// Create a new client for the Solr node at `host:port`
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        let defaults = ClientConfig::default();
        Self {
            endpoint: Endpoint::new(host, port),
            api_version: defaults.api_version,
            transport: Arc::new(ReqwestTransport::new()),
            logger: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        let client =
            Self::new(config.host.clone(), config.port).with_api_version(config.api_version);
        if config.log_requests {
            client.with_logger(Arc::new(TracingRequestLogger))
        } else {
            client
        }
    }

    pub fn with_api_version(mut self, api_version: f32) -> Self {
        self.api_version = api_version;
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Report every request to `logger` before it is sent
    pub fn with_logger(mut self, logger: Arc<dyn RequestLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn api_version(&self) -> f32 {
        self.api_version
    }

    pub fn search(&self) -> SearchOperation {
        SearchOperation::new()
    }

    pub fn collections(&self) -> CollectionOperation {
        CollectionOperation::new()
    }

    pub fn configsets(&self) -> ConfigsetOperation {
        ConfigsetOperation::new()
    }

    pub fn aliases(&self) -> AliasOperation {
        AliasOperation::new()
    }

    pub fn index(&self) -> IndexOperation {
        IndexOperation::new()
    }

    /// Send an operation and return Solr's JSON response
    pub async fn execute<R>(&self, request: &R) -> Result<Value>
    where
        R: SolrRequest + ?Sized,
    {
        execute(
            request,
            self.transport.as_ref(),
            &self.endpoint,
            self.logger.as_deref(),
        )
        .await
    }
}

impl std::fmt::Debug for SolrClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolrClient")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("logs_requests", &self.logger.is_some())
            .finish()
    }
}
