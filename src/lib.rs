//! A minimal declarative HTTP client.
//!
//! Describe a request as a [`Resource`], fetch it through any transport
//! implementing [`HttpClient`](crate::http::HttpClient), and let the crate
//! classify the outcome by status code and optionally decode the body as
//! JSON. The crate never opens a socket itself; the transport is always
//! supplied by the caller.
//!
//! ```no_run
//! # #[cfg(all(not(target_arch = "wasm32"), feature = "http-client-reqwest-0_12"))]
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use serde::Deserialize;
//! use skiff::{Resource, TransportConfig};
//!
//! #[derive(Deserialize)]
//! struct Post {
//!     id: u64,
//!     title: String,
//! }
//!
//! let config = TransportConfig::default();
//! let client = reqwest::Client::new();
//!
//! let post: Post = Resource::get("https://example.test/posts/1")?
//!     .fetch_json(&config, &client)
//!     .await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::panic)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
pub mod decode;
mod error;
mod executor;
pub mod http;
mod method;
pub mod platform;
pub mod prelude;
mod request_url;
mod resource;

pub use config::TransportConfig;
pub use error::{BoxedError, Error};
pub use executor::FetchError;
pub use method::Method;
pub use request_url::{IntoRequestUrl, RequestUrl, RequestUrlError};
pub use resource::{InvalidResource, Resource};

pub use bytes::Bytes;
