//! Resilient request pipeline.
//!
//! [`ApiClient`] performs one logical API call per invocation with bounded latency and
//! uniform error semantics. Each call merges the configured default headers with the
//! per-call overrides, races the transport exchange against a cancellation timer, and
//! normalizes every outcome into either the caller's decoded payload or an
//! [`Error`](crate::client::error::Error) of kind `ApiError`, `TimeoutError` or
//! `TransportError`. No retries are performed: callers needing them wrap the client.

pub mod request;
pub mod transport;

use std::{sync::Arc, time::Duration};

use dioxus_logger::tracing;
use futures::future::{select, Either};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::{
        api::{
            request::{
                HttpBody, HttpRequest, HttpResponse, MultipartForm, RequestBody, RequestDescriptor,
            },
            transport::Transport,
        },
        config::ApiConfig,
        error::Error,
        util::timer::sleep,
    },
    model::api::ErrorDto,
};

/// Shared request pipeline.
///
/// Cloning is cheap; clones share the same transport handle and configuration.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    config: Arc<ApiConfig>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self {
            transport,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform one API call described by `descriptor`.
    ///
    /// # Arguments
    /// - `descriptor` - Method, path, body, header overrides and optional timeout override
    ///
    /// # Returns
    /// - `Ok(R)` - The success body decoded as `R`; an empty body decodes as JSON `null`
    /// - `Err(Error::ApiError)` - Non-success status, with the server message when present
    /// - `Err(Error::TimeoutError)` - The timer fired before the exchange completed
    /// - `Err(Error::TransportError)` - The exchange or decoding failed
    pub async fn request<R>(&self, descriptor: RequestDescriptor) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let method = descriptor.method;
        let url = self.url_for(&descriptor.path);

        tracing::debug!(method = %method, url = %url, "Sending API request");

        let result = self.execute(url.clone(), descriptor).await;

        if let Err(err) = &result {
            tracing::warn!(
                method = %method,
                url = %url,
                status = ?err.status(),
                error = %err,
                "API request failed"
            );
        }

        result
    }

    pub async fn get<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request(RequestDescriptor::get(path)).await
    }

    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(RequestDescriptor::post(path).json(body)?).await
    }

    pub async fn post_form<R>(&self, path: &str, form: MultipartForm) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request(RequestDescriptor::post(path).multipart(form))
            .await
    }

    pub async fn put<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.request(RequestDescriptor::put(path).json(body)?).await
    }

    pub async fn put_form<R>(&self, path: &str, form: MultipartForm) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request(RequestDescriptor::put(path).multipart(form))
            .await
    }

    pub async fn delete<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request(RequestDescriptor::delete(path)).await
    }

    async fn execute<R>(&self, url: String, descriptor: RequestDescriptor) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let timeout = descriptor.timeout.unwrap_or(self.config.timeout);
        let request = self.build_request(url, descriptor);

        let response = self.exchange(request, timeout).await?;

        decode_response(response)
    }

    /// Race the transport against the timer; whichever loses is dropped.
    async fn exchange(&self, request: HttpRequest, timeout: Duration) -> Result<HttpResponse, Error> {
        let in_flight = Box::pin(self.transport.send(request));
        let timer = Box::pin(sleep(timeout));

        match select(in_flight, timer).await {
            Either::Left((response, _timer)) => response,
            Either::Right(((), in_flight)) => {
                drop(in_flight);

                Err(timeout_error(timeout))
            }
        }
    }

    fn build_request(&self, url: String, descriptor: RequestDescriptor) -> HttpRequest {
        let multipart = matches!(descriptor.body, RequestBody::Multipart(_));

        // Multipart bodies need the transport to set the content type with its boundary
        let defaults = self
            .config
            .default_headers
            .iter()
            .filter(|(name, _)| !(multipart && name.eq_ignore_ascii_case("content-type")));

        let headers = merge_headers(defaults, descriptor.headers);

        let body = match descriptor.body {
            RequestBody::Empty => HttpBody::Empty,
            RequestBody::Json(value) => HttpBody::Text(value.to_string()),
            RequestBody::Multipart(form) => HttpBody::Multipart(form),
        };

        HttpRequest {
            method: descriptor.method,
            url,
            headers,
            body,
        }
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        if path.starts_with('/') {
            format!("{}{}", self.config.base_url, path)
        } else {
            format!("{}/{}", self.config.base_url, path)
        }
    }
}

/// Timeout error for `timeout`, saturating at `u64::MAX` milliseconds
fn timeout_error(timeout: Duration) -> Error {
    Error::TimeoutError {
        timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
    }
}

/// Merge default headers with per-call overrides, overrides winning on a
/// case-insensitive name match.
fn merge_headers<'a>(
    defaults: impl Iterator<Item = &'a (String, String)>,
    overrides: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .filter(|(name, _)| {
            !overrides
                .iter()
                .any(|(overridden, _)| overridden.eq_ignore_ascii_case(name))
        })
        .cloned()
        .collect();

    merged.extend(overrides);
    merged
}

fn decode_response<R>(response: HttpResponse) -> Result<R, Error>
where
    R: DeserializeOwned,
{
    if !response.is_success() {
        let error_dto: ErrorDto = serde_json::from_str(&response.body).unwrap_or_default();

        let message = error_dto.message().unwrap_or_else(|| {
            format!(
                "Request failed with status {}: {}",
                response.status, response.status_text
            )
        });

        return Err(Error::ApiError {
            status: response.status,
            message,
        });
    }

    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };

    serde_json::from_str(body)
        .map_err(|e| Error::TransportError(format!("Failed to decode response body: {}", e)))
}
