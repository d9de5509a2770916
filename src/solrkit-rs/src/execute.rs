use serde_json::Value;
use solrkit_core::{HttpMethod, RequestBody, SolrRequest};

use crate::transport::{Endpoint, HttpRequest, HttpResponse, Transport};
use crate::{ClientError, Result};

/// Receives every request right before it is sent
pub trait RequestLogger: Send + Sync {
    fn log_request(&self, method: HttpMethod, target: &str);
}

/// Logs requests as `tracing` events
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRequestLogger;

impl RequestLogger for TracingRequestLogger {
    fn log_request(&self, method: HttpMethod, target: &str) {
        tracing::info!(%method, path = target, "Solr request");
    }
}

/// Execute one operation against a Solr node
///
/// Validation happens before the transport is touched. The response body
/// must be JSON; an `error` member in it fails the call whatever the HTTP
/// status was.
pub async fn execute<R, T>(
    request: &R,
    transport: &T,
    endpoint: &Endpoint,
    logger: Option<&dyn RequestLogger>,
) -> Result<Value>
where
    R: SolrRequest + ?Sized,
    T: Transport + ?Sized,
{
    let target = request.request_target()?;
    let method = request.http_method();
    let body = if method.has_body() {
        request.http_body()?
    } else {
        RequestBody::Empty
    };

    if let Some(logger) = logger {
        logger.log_request(method, &target);
    }
    tracing::debug!(
        %method,
        host = %endpoint.host,
        port = endpoint.port,
        path = %target,
        "Dispatching request"
    );

    let response = transport
        .send(HttpRequest {
            endpoint: endpoint.clone(),
            method,
            target,
            headers: request.http_headers(),
            body,
        })
        .await?;

    normalize_response(response)
}

fn normalize_response(response: HttpResponse) -> Result<Value> {
    let value: Value = serde_json::from_slice(&response.body)?;

    if let Some(message) = server_error_message(&value) {
        tracing::warn!(status = response.status, %message, "Solr reported an error");
        return Err(ClientError::Server {
            status: response.status,
            message,
        });
    }

    Ok(value)
}

/// Message of the `error` member, if the response carries one
fn server_error_message(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(message) if message.is_empty() => None,
        Value::String(message) => Some(message.clone()),
        error => Some(
            error
                .get("msg")
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| error.to_string()),
        ),
    }
}
