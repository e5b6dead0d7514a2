//! A validated request URL.
//!
//! [`RequestUrl`] is a newtype over [`Uri`] that guarantees the URL is
//! absolute — scheme and authority present — so a transport can always
//! route it. It can be constructed from common string and URL types via
//! [`IntoRequestUrl`]; once constructed it can be cloned and reused across
//! resources without re-validation.

use std::convert::Infallible;
use std::fmt;

use http::Uri;
use snafu::{ResultExt as _, Snafu, ensure};
use url::Url;

/// A validated absolute request URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(Uri);

impl RequestUrl {
    /// Returns the inner [`Uri`].
    #[must_use]
    pub fn as_uri(&self) -> &Uri {
        &self.0
    }

    /// Consumes the [`RequestUrl`] and returns the inner [`Uri`].
    #[must_use]
    pub fn into_uri(self) -> Uri {
        self.0
    }

    fn try_from_uri(uri: Uri) -> Result<Self, RequestUrlError> {
        ensure!(
            uri.scheme().is_some() && uri.authority().is_some(),
            NotAbsoluteSnafu { uri }
        );
        Ok(Self(uri))
    }
}

impl fmt::Display for RequestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Errors produced when converting a value into a [`RequestUrl`].
#[derive(Debug, Snafu)]
pub enum RequestUrlError {
    /// The value could not be parsed as a URI at all.
    #[snafu(display("request URL could not be parsed"))]
    Invalid {
        /// The underlying parse error.
        source: http::uri::InvalidUri,
    },
    /// The URI parsed but lacks a scheme or authority.
    #[snafu(display("request URL `{uri}` is not absolute"))]
    NotAbsolute {
        /// The offending URI.
        uri: Uri,
    },
}

impl crate::Error for RequestUrlError {
    fn is_retryable(&self) -> bool {
        false
    }
}

impl From<Infallible> for RequestUrlError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Conversion trait for types that can be turned into a [`RequestUrl`].
pub trait IntoRequestUrl {
    /// The error type returned if the conversion fails.
    type Error: Into<RequestUrlError>;

    /// Attempts to convert this value into a [`RequestUrl`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a valid absolute URL.
    fn into_request_url(self) -> Result<RequestUrl, Self::Error>;
}

impl IntoRequestUrl for RequestUrl {
    type Error = Infallible;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        Ok(self)
    }
}

impl IntoRequestUrl for Uri {
    type Error = RequestUrlError;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        RequestUrl::try_from_uri(self)
    }
}

impl IntoRequestUrl for Url {
    type Error = RequestUrlError;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        let uri = self.as_str().parse::<Uri>().context(InvalidSnafu)?;
        RequestUrl::try_from_uri(uri)
    }
}

impl IntoRequestUrl for &str {
    type Error = RequestUrlError;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        let uri = self.parse::<Uri>().context(InvalidSnafu)?;
        RequestUrl::try_from_uri(uri)
    }
}

impl IntoRequestUrl for String {
    type Error = RequestUrlError;

    fn into_request_url(self) -> Result<RequestUrl, Self::Error> {
        self.as_str().into_request_url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_str_converts() {
        let url = "https://example.test/posts/1".into_request_url().unwrap();
        assert_eq!(url.as_uri().host(), Some("example.test"));
        assert_eq!(url.as_uri().path(), "/posts/1");
    }

    #[test]
    fn relative_path_is_rejected() {
        let err = "/posts/1".into_request_url().unwrap_err();
        assert!(matches!(err, RequestUrlError::NotAbsolute { .. }));
    }

    #[test]
    fn garbage_is_rejected() {
        let err = "not a url".into_request_url().unwrap_err();
        assert!(matches!(err, RequestUrlError::Invalid { .. }));
    }

    #[test]
    fn url_crate_values_convert() {
        let parsed = Url::parse("https://example.test/a?b=c").unwrap();
        let url = parsed.into_request_url().unwrap();
        assert_eq!(url.to_string(), "https://example.test/a?b=c");
    }
}
