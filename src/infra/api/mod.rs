//! Backend REST API: the [`AdminApi`] seam and its reqwest implementation.

pub mod error;
pub mod http;
pub mod traits;

pub use error::ApiError;
pub use http::HttpAdminApi;
pub use traits::AdminApi;
