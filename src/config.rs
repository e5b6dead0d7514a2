//! Transport configuration: default headers and the acceptable status range.

use std::ops::Range;

use bytes::Bytes;
use http::Request;
use http::header::HeaderMap;

use crate::resource::Resource;

/// Status codes a fresh configuration treats as success.
const DEFAULT_ACCEPTABLE: Range<u16> = 200..300;

/// Lowest status code a configured range may start at.
const STATUS_FLOOR: u16 = 100;
/// Exclusive upper limit for a configured range.
const STATUS_CEILING: u16 = 600;

/// Request defaults shared across fetches.
///
/// Holds the headers attached to every request built through it and the
/// status range treated as success. A configuration is plain data: clone it
/// freely or share it by reference. It is read-only while a fetch is in
/// flight — if you want to reconfigure between requests, do so before
/// handing out references, or keep a configuration per call site.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    default_headers: HeaderMap,
    acceptable_statuses: Range<u16>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new(HeaderMap::new())
    }
}

impl TransportConfig {
    /// Creates a configuration with the given default headers and the
    /// standard `200..300` acceptable status range.
    #[must_use]
    pub fn new(default_headers: HeaderMap) -> Self {
        Self {
            default_headers,
            acceptable_statuses: DEFAULT_ACCEPTABLE,
        }
    }

    /// Replaces the acceptable status range.
    ///
    /// The lower bound is clamped to at least 100 and the upper bound to at
    /// most 600. The clamped range is installed verbatim: an inverted or
    /// empty range is not rejected, it simply accepts no status code at
    /// all, and every response classifies as
    /// [`FetchError::BadStatus`](crate::FetchError::BadStatus).
    pub fn set_acceptable_statuses(&mut self, range: Range<u16>) {
        self.acceptable_statuses = range.start.max(STATUS_FLOOR)..range.end.min(STATUS_CEILING);
    }

    /// Returns the status range currently treated as success.
    #[must_use]
    pub fn acceptable_statuses(&self) -> &Range<u16> {
        &self.acceptable_statuses
    }

    /// Returns the headers attached to every built request.
    #[must_use]
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Builds the wire-level request for `resource`.
    ///
    /// The request headers are the default headers overlaid with the
    /// resource's own; on a name collision the resource's value wins.
    /// Method, URL, and body are attached verbatim, with an absent body
    /// becoming an empty one.
    #[must_use]
    pub fn build_request(&self, resource: &Resource) -> Request<Bytes> {
        let (mut parts, ()) = Request::new(()).into_parts();
        parts.method = resource.method().as_http();
        parts.uri = resource.url().as_uri().clone();

        parts.headers = self.default_headers.clone();
        for (name, value) in resource.headers() {
            parts.headers.insert(name.clone(), value.clone());
        }

        let body = resource.body().cloned().unwrap_or_else(Bytes::new);
        Request::from_parts(parts, body)
    }
}
