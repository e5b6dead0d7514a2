//! The crate-wide [`Error`] trait and [`BoxedError`].
//!
//! Every error this crate surfaces — and every error a transport
//! implementation plugs into the seam — implements [`Error`], which extends
//! [`std::error::Error`] with a retryability hint. The hint is advisory:
//! the crate itself never retries anything.

use std::convert::Infallible;

use snafu::{AsErrorSource, Snafu};

use crate::platform::MaybeSendSync;

/// Errors that may occur while building, fetching, or decoding a resource.
pub trait Error: std::error::Error + AsErrorSource + MaybeSendSync + 'static {
    /// If true, reissuing the failed request may succeed.
    fn is_retryable(&self) -> bool;
}

impl Error for Infallible {
    fn is_retryable(&self) -> bool {
        false
    }
}

/// A type-erased [`Error`], for callers that do not want to thread the
/// transport's error types through their signatures.
#[derive(Debug, Snafu)]
#[snafu(transparent)]
pub struct BoxedError {
    source: Box<dyn Error>,
}

impl BoxedError {
    /// Boxes a concrete [`Error`].
    pub fn from_err<E: Error + 'static>(err: E) -> Self {
        Self {
            source: Box::new(err),
        }
    }
}

impl Error for BoxedError {
    fn is_retryable(&self) -> bool {
        self.source.is_retryable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::ConnectionRefused;

    #[test]
    fn boxing_preserves_retryability() {
        let boxed = BoxedError::from_err(ConnectionRefused);
        assert!(boxed.is_retryable());
        assert_eq!(boxed.to_string(), "connection refused");
    }
}
