//! Request execution and response classification.
//!
//! The executor owns the one interesting decision in the crate: turning a
//! transport-level outcome into body bytes or a [`FetchError`]. The checks
//! run in a fixed order — transport failure, unreadable response,
//! unacceptable status, empty body — and the first one that trips wins.
//! Nothing is retried and nothing is logged; the error itself is the whole
//! observable outcome.

use bytes::Bytes;
use http::{Request, StatusCode};
use snafu::prelude::*;

use crate::config::TransportConfig;
use crate::decode::DecodeError;
use crate::http::{HttpClient, HttpResponse};

/// Errors produced while fetching a resource.
///
/// Generic over the transport's two error channels, so a concrete
/// transport's errors surface with their original types intact. Use
/// [`BoxedError`](crate::BoxedError) to erase them.
#[derive(Debug, Snafu)]
pub enum FetchError<HttpReqErr: crate::Error + 'static, HttpRespErr: crate::Error + 'static> {
    /// The transport failed to carry the request at all — connection
    /// refused, DNS failure, and the like.
    #[snafu(display("transport failed to carry the request"))]
    Transport {
        /// The transport's own error.
        source: HttpReqErr,
    },
    /// The response could not be read back as an HTTP response body.
    #[snafu(display("response could not be read"))]
    Response {
        /// The transport's body-read error.
        source: HttpRespErr,
    },
    /// The status code fell outside the configured acceptable range.
    #[snafu(display("unacceptable status code {status}"))]
    BadStatus {
        /// The offending status code.
        status: StatusCode,
    },
    /// The response carried no body bytes.
    #[snafu(display("response carried no body"))]
    NoData,
    /// The body could not be decoded into the requested type.
    #[snafu(display("response body could not be decoded"))]
    Decode {
        /// The underlying decode error.
        source: DecodeError,
    },
}

impl<HttpReqErr: crate::Error, HttpRespErr: crate::Error> crate::Error
    for FetchError<HttpReqErr, HttpRespErr>
{
    fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { source } => source.is_retryable(),
            Self::Response { source } => source.is_retryable(),
            Self::BadStatus { status } => status.is_server_error(),
            Self::NoData | Self::Decode { .. } => false,
        }
    }
}

/// Sends a built request and classifies the outcome.
pub(crate) async fn execute<C: HttpClient>(
    config: &TransportConfig,
    http_client: &C,
    request: Request<Bytes>,
) -> Result<Bytes, FetchError<C::Error, <C::Response as HttpResponse>::Error>> {
    let response = http_client.execute(request).await.context(TransportSnafu)?;
    let status = response.status();
    let body = response.body().await.context(ResponseSnafu)?;

    classify(config, status, body)
}

/// Applies the status and body checks to an already-read response.
fn classify<HttpReqErr: crate::Error, HttpRespErr: crate::Error>(
    config: &TransportConfig,
    status: StatusCode,
    body: Bytes,
) -> Result<Bytes, FetchError<HttpReqErr, HttpRespErr>> {
    ensure!(
        config.acceptable_statuses().contains(&status.as_u16()),
        BadStatusSnafu { status }
    );
    ensure!(!body.is_empty(), NoDataSnafu);

    Ok(body)
}

/// Wraps a JSON decode failure into the fetch taxonomy.
pub(crate) fn decode_json<T, HttpReqErr, HttpRespErr>(
    body: &Bytes,
) -> Result<T, FetchError<HttpReqErr, HttpRespErr>>
where
    T: serde::de::DeserializeOwned,
    HttpReqErr: crate::Error,
    HttpRespErr: crate::Error,
{
    crate::decode::json(body).context(DecodeSnafu)
}
