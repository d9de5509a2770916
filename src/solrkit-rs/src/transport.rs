use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client as HttpClient;
use solrkit_core::{HttpHeaders, HttpMethod, RequestBody};
use tokio_util::io::ReaderStream;

use crate::Result;

/// Host and port of a Solr node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

/// A fully rendered request, ready to go on the wire
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub endpoint: Endpoint,
    pub method: HttpMethod,
    /// Path and query string
    pub target: String,
    pub headers: HttpHeaders,
    pub body: RequestBody,
}

#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

/// Sends a request and returns the raw response
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Plain HTTP transport on top of reqwest
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: HttpClient,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured reqwest client (proxies, TLS, pooling)
    pub fn with_client(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let url = format!(
            "http://{}:{}{}",
            request.endpoint.host, request.endpoint.port, request.target
        );
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.client.request(method, &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if request.method.has_body() {
            builder = match request.body {
                RequestBody::Empty => builder,
                RequestBody::Bytes(bytes) => builder.body(bytes),
                RequestBody::File(path) => {
                    // Read errors mid-stream abort the request instead of hanging it
                    let file = tokio::fs::File::open(&path).await?;
                    builder.body(reqwest::Body::wrap_stream(ReaderStream::new(file)))
                }
            };
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(HttpResponse { status, body })
    }
}
