//! Imports for syntax extensions.

pub use crate::IntoRequestUrl as _;
pub use crate::http::HttpClient as _;
pub use crate::http::HttpResponse as _;
