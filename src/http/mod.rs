//! The transport seam.
//!
//! The crate never talks to a socket itself. Callers supply an
//! [`HttpClient`] — backed by `reqwest`, `hyper`, or anything else able to
//! carry an [`http::Request`] — and the executor works purely against these
//! traits. A `reqwest::Client` implementation ships behind the
//! `http-client-reqwest-0_12` feature on native targets.

#[cfg(all(not(target_arch = "wasm32"), feature = "http-client-reqwest-0_12"))]
mod reqwest_0_12;

use bytes::Bytes;
use http::{HeaderMap, Request, StatusCode};

use crate::platform::{MaybeSend, MaybeSendSync};

/// A transport able to carry one HTTP request.
pub trait HttpClient: MaybeSendSync {
    /// The error reported when the request cannot be carried at all.
    type Error: crate::Error;

    /// The response type this transport produces.
    type Response: HttpResponse;

    /// Sends `request` and resolves to the transport's response.
    ///
    /// The returned future resolves exactly once. The crate layers no
    /// retries, timeouts, or cancellation on top — whatever the transport
    /// does natively is what the caller gets.
    fn execute(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + MaybeSend;
}

/// A response produced by an [`HttpClient`].
pub trait HttpResponse: MaybeSendSync {
    /// The error reported when the body cannot be read.
    type Error: crate::Error;

    /// Returns the response status code.
    fn status(&self) -> StatusCode;

    /// Returns the response headers.
    fn headers(&self) -> HeaderMap;

    /// Consumes the response and reads the full body.
    fn body(self) -> impl Future<Output = Result<Bytes, Self::Error>> + MaybeSend;
}
