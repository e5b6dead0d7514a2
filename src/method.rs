//! The HTTP methods a [`Resource`](crate::Resource) can use.

use std::fmt;

/// HTTP method of a [`Resource`](crate::Resource).
///
/// Only the four methods of the declarative surface are listed. The wire
/// token comes from [`Method::as_http`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET` — fetch a representation. Must not carry a body.
    Get,
    /// `POST` — submit a payload.
    Post,
    /// `PUT` — replace a representation.
    Put,
    /// `DELETE` — remove a representation.
    Delete,
}

impl Method {
    /// Returns the corresponding [`http::Method`].
    #[must_use]
    pub fn as_http(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post => http::Method::POST,
            Self::Put => http::Method::PUT,
            Self::Delete => http::Method::DELETE,
        }
    }
}

impl From<Method> for http::Method {
    fn from(value: Method) -> Self {
        value.as_http()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_http().as_str())
    }
}
