//! Transports that carry a resolved [`HttpRequest`] over the wire.
//!
//! Browser builds go through the Fetch API (`reqwasm`), native builds through
//! `reqwest`. A transport reads the whole response body before returning, so the
//! pipeline timeout covers the complete exchange.

use crate::client::{
    api::request::{HttpRequest, HttpResponse},
    error::Error,
};

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::ReqwestTransport;
#[cfg(target_arch = "wasm32")]
pub use web::ReqwasmTransport;

/// Transport used by the running application on the current target
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformTransport = ReqwestTransport;
#[cfg(target_arch = "wasm32")]
pub type PlatformTransport = ReqwasmTransport;

#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Send the request and read the full response body.
    ///
    /// Any failure to complete the exchange is reported as `Error::TransportError`.
    /// Dropping the returned future must cancel the in-flight request.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, Error>;
}
