//! The declarative request description.

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use snafu::{ResultExt as _, Snafu, ensure};

use crate::{
    Method,
    config::TransportConfig,
    executor::{self, FetchError},
    http::{HttpClient, HttpResponse},
    request_url::{IntoRequestUrl, RequestUrl, RequestUrlError},
};

/// An immutable description of a single HTTP request.
///
/// A `Resource` holds everything needed to perform one request — method,
/// absolute URL, optional body, per-request headers — and nothing about how
/// to perform it. It carries no transport state and can be fetched any
/// number of times, against any [`TransportConfig`] and [`HttpClient`].
///
/// A GET resource is never allowed to carry a body; [`Resource::with_parts`]
/// rejects the combination with [`InvalidResource::GetWithBody`].
#[derive(Debug, Clone)]
pub struct Resource {
    method: Method,
    url: RequestUrl,
    body: Option<Bytes>,
    headers: HeaderMap,
}

impl Resource {
    /// Creates a resource with no body and no per-request headers.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidResource::Url`] if `url` is not a valid absolute
    /// URL.
    pub fn new<U: IntoRequestUrl>(method: Method, url: U) -> Result<Self, InvalidResource> {
        Self::with_parts(method, url, None, HeaderMap::new())
    }

    /// Creates a resource from all of its parts.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidResource::Url`] if `url` is not a valid absolute
    /// URL, or [`InvalidResource::GetWithBody`] if `method` is
    /// [`Method::Get`] and a body was supplied.
    pub fn with_parts<U: IntoRequestUrl>(
        method: Method,
        url: U,
        body: Option<Bytes>,
        headers: HeaderMap,
    ) -> Result<Self, InvalidResource> {
        let url = url
            .into_request_url()
            .map_err(Into::<RequestUrlError>::into)
            .context(UrlSnafu)?;
        ensure!(method != Method::Get || body.is_none(), GetWithBodySnafu);

        Ok(Self {
            method,
            url,
            body,
            headers,
        })
    }

    /// Shorthand for a bodyless GET resource.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidResource::Url`] if `url` is not a valid absolute
    /// URL.
    pub fn get<U: IntoRequestUrl>(url: U) -> Result<Self, InvalidResource> {
        Self::new(Method::Get, url)
    }

    /// Shorthand for a POST resource with a body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidResource::Url`] if `url` is not a valid absolute
    /// URL.
    pub fn post<U: IntoRequestUrl>(url: U, body: impl Into<Bytes>) -> Result<Self, InvalidResource> {
        Self::with_parts(Method::Post, url, Some(body.into()), HeaderMap::new())
    }

    /// Shorthand for a PUT resource with a body.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidResource::Url`] if `url` is not a valid absolute
    /// URL.
    pub fn put<U: IntoRequestUrl>(url: U, body: impl Into<Bytes>) -> Result<Self, InvalidResource> {
        Self::with_parts(Method::Put, url, Some(body.into()), HeaderMap::new())
    }

    /// Shorthand for a bodyless DELETE resource.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidResource::Url`] if `url` is not a valid absolute
    /// URL.
    pub fn delete<U: IntoRequestUrl>(url: U) -> Result<Self, InvalidResource> {
        Self::new(Method::Delete, url)
    }

    /// Returns this resource with `value` set for the `name` header,
    /// replacing any existing value.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> Method {
        self.method
    }

    /// Returns the request URL.
    #[must_use]
    pub fn url(&self) -> &RequestUrl {
        &self.url
    }

    /// Returns the request body, if any.
    #[must_use]
    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }

    /// Returns the per-request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Fetches this resource and returns the raw body bytes.
    ///
    /// Builds the wire request from `config`, sends it through
    /// `http_client`, and classifies the outcome. The returned future
    /// resolves exactly once; dropping it is the only way to abandon the
    /// request.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing the first check that failed:
    /// transport failure, unreadable response, unacceptable status code, or
    /// an empty body.
    pub async fn fetch<C: HttpClient>(
        &self,
        config: &TransportConfig,
        http_client: &C,
    ) -> Result<Bytes, FetchError<C::Error, <C::Response as HttpResponse>::Error>> {
        let request = config.build_request(self);
        executor::execute(config, http_client, request).await
    }

    /// Fetches this resource and decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns any error [`Resource::fetch`] can return, plus
    /// [`FetchError::Decode`] when the body is not valid JSON for `T`.
    pub async fn fetch_json<T: DeserializeOwned, C: HttpClient>(
        &self,
        config: &TransportConfig,
        http_client: &C,
    ) -> Result<T, FetchError<C::Error, <C::Response as HttpResponse>::Error>> {
        let body = self.fetch(config, http_client).await?;
        executor::decode_json(&body)
    }
}

/// Errors produced when constructing a [`Resource`].
#[derive(Debug, Snafu)]
pub enum InvalidResource {
    /// The URL was rejected.
    #[snafu(display("resource URL was rejected"))]
    Url {
        /// The underlying conversion error.
        source: RequestUrlError,
    },
    /// A GET resource was given a body.
    #[snafu(display("GET requests must not carry a body"))]
    GetWithBody,
}

impl crate::Error for InvalidResource {
    fn is_retryable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde::Deserialize;

    use super::*;
    use crate::http::testing::{DownTransport, StaticTransport};

    #[test]
    fn get_with_body_is_rejected() {
        let err = Resource::with_parts(
            Method::Get,
            "https://example.test",
            Some(Bytes::from_static(b"payload")),
            HeaderMap::new(),
        )
        .unwrap_err();

        assert!(matches!(err, InvalidResource::GetWithBody));
    }

    #[test]
    fn bad_url_is_rejected() {
        let err = Resource::get("not a url").unwrap_err();
        assert!(matches!(err, InvalidResource::Url { .. }));
    }

    #[test]
    fn header_replaces_existing_value() {
        let resource = Resource::get("https://example.test")
            .unwrap()
            .header(
                HeaderName::from_static("x-trace"),
                HeaderValue::from_static("first"),
            )
            .header(
                HeaderName::from_static("x-trace"),
                HeaderValue::from_static("second"),
            );

        assert_eq!(
            resource.headers().get("x-trace"),
            Some(&HeaderValue::from_static("second"))
        );
    }

    #[test]
    fn post_shorthand_carries_body() {
        let resource = Resource::post("https://example.test/posts", "Sample").unwrap();
        assert_eq!(resource.method(), Method::Post);
        assert_eq!(resource.body(), Some(&Bytes::from_static(b"Sample")));
    }

    #[tokio::test]
    async fn fetch_returns_body_bytes() {
        let transport = StaticTransport::new(StatusCode::OK, r#"{"id":1}"#);
        let resource = Resource::get("https://example.test/posts/1").unwrap();

        let body = resource
            .fetch(&TransportConfig::default(), &transport)
            .await
            .unwrap();

        assert_eq!(body, Bytes::from_static(br#"{"id":1}"#));
    }

    #[tokio::test]
    async fn fetch_json_decodes_body() {
        #[derive(Debug, Deserialize)]
        struct Post {
            id: u64,
            title: String,
        }

        let transport = StaticTransport::new(StatusCode::OK, r#"{"id":7,"title":"hello"}"#);
        let resource = Resource::get("https://example.test/posts/7").unwrap();

        let post: Post = resource
            .fetch_json(&TransportConfig::default(), &transport)
            .await
            .unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.title, "hello");
    }

    #[tokio::test]
    async fn fetch_json_reports_malformed_body() {
        #[derive(Debug, Deserialize)]
        struct Post {
            #[allow(dead_code)]
            id: u64,
        }

        let transport = StaticTransport::new(StatusCode::OK, "not json");
        let resource = Resource::get("https://example.test/posts/7").unwrap();

        let err = resource
            .fetch_json::<Post, _>(&TransportConfig::default(), &transport)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn fetch_surfaces_transport_failure() {
        let resource = Resource::get("https://unreachable.test").unwrap();

        let err = resource
            .fetch(&TransportConfig::default(), &DownTransport)
            .await
            .unwrap_err();

        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
