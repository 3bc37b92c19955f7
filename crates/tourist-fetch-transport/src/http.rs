//! Request building and response reading shared by the HTTP strategies.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tourist_fetch_core::{Method, RequestSpec, TransportFailure, TransportResult};
use url::Url;

const JSON: &str = "application/json";
const MAX_DETAIL: usize = 200;

/// Largest response body read into memory.
pub(crate) const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

/// Which headers a request carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Headers {
    /// `Content-Type` and `Accept` set to JSON.
    Json,
    /// `Accept` only; `Content-Type` only when a body is sent.
    Minimal,
    /// Nothing beyond what the client adds itself.
    Bare,
}

pub(crate) fn build(client: &Client, url: Url, spec: &RequestSpec, headers: Headers) -> RequestBuilder {
    let builder = match spec.method() {
        Method::Get => client.get(url),
        Method::Post => client.post(url),
    };

    let builder = match headers {
        Headers::Json => builder.header(CONTENT_TYPE, JSON).header(ACCEPT, JSON),
        Headers::Minimal if spec.json_body().is_some() => {
            builder.header(CONTENT_TYPE, JSON).header(ACCEPT, JSON)
        }
        Headers::Minimal => builder.header(ACCEPT, JSON),
        Headers::Bare => builder,
    };

    match spec.json_body() {
        Some(body) => builder.body(body.to_string()),
        None => builder,
    }
}

/// Sends `request` and reads a JSON body, mapping outcomes the way readable
/// strategies do: transport errors are unreachable, non-2xx statuses are
/// HTTP errors, undecodable bodies are malformed.
pub(crate) async fn send_readable(request: RequestBuilder) -> TransportResult {
    let response = match request.send().await {
        Ok(response) => response,
        Err(err) => return TransportResult::Failure(TransportFailure::unreachable(describe(&err))),
    };

    let status = response.status();

    #[cfg(feature = "metrics")]
    metrics::counter!("fetch_http_responses_total", "status" => status.as_u16().to_string())
        .increment(1);

    if !status.is_success() {
        let body = match read_capped(response, MAX_DETAIL * 4).await {
            Ok(Capped::Complete(bytes) | Capped::Truncated(bytes)) => bytes,
            Err(_) => Vec::new(),
        };
        return TransportResult::Failure(TransportFailure::http(
            status.as_u16(),
            format!(
                "request failed with status {}: {}",
                status,
                truncate(&String::from_utf8_lossy(&body))
            ),
        ));
    }

    read_json(response).await.into()
}

pub(crate) async fn read_json(response: Response) -> Result<Value, TransportFailure> {
    read_json_capped(response, MAX_BODY_BYTES).await
}

async fn read_json_capped(response: Response, limit: usize) -> Result<Value, TransportFailure> {
    let bytes = match read_capped(response, limit).await {
        Ok(Capped::Complete(bytes)) => bytes,
        Ok(Capped::Truncated(_)) => {
            return Err(TransportFailure::malformed(format!(
                "response body exceeds {} bytes",
                limit
            )));
        }
        Err(err) => return Err(TransportFailure::unreachable(describe(&err))),
    };

    serde_json::from_slice(&bytes).map_err(|err| {
        TransportFailure::malformed(format!(
            "response body is not valid JSON ({}): {}",
            err,
            truncate(&String::from_utf8_lossy(&bytes))
        ))
    })
}

/// A body read up to a byte limit.
pub(crate) enum Capped {
    Complete(Vec<u8>),
    /// The body was longer than the limit; holds the first `limit` bytes.
    Truncated(Vec<u8>),
}

/// Reads at most `limit` bytes of the body, chunk by chunk.
pub(crate) async fn read_capped(
    mut response: Response,
    limit: usize,
) -> Result<Capped, reqwest::Error> {
    if response
        .content_length()
        .is_some_and(|len| len > limit as u64)
    {
        return Ok(Capped::Truncated(Vec::new()));
    }

    let mut buf = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let room = limit - buf.len();
        if chunk.len() > room {
            buf.extend_from_slice(&chunk[..room]);
            return Ok(Capped::Truncated(buf));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(Capped::Complete(buf))
}

pub(crate) fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("request timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}

fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_DETAIL) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
