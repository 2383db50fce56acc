//! # Sprig HTTP
//!
//! The HTTP values around the router: a [`Request`] that reduces a raw
//! request-target to a bare path, a [`Response`] that can write itself out,
//! and [`HttpError`] for failures that map onto a status code.
//!
//! ## Example
//!
//! ```
//! use sprig_http::{HttpError, Request, Response};
//! use http::StatusCode;
//!
//! let request = Request::from_request_target("/posts/42?preview=1").unwrap();
//! assert_eq!(request.path(), "/posts/42");
//!
//! let response: Response = HttpError::not_found(request.path()).into();
//! assert_eq!(response.status, StatusCode::NOT_FOUND);
//! ```

pub mod exception;
pub mod request;
pub mod response;

pub use exception::{HttpError, HttpResult};
pub use request::Request;
pub use response::{DEFAULT_PROTOCOL, REDIRECT_STATUS_CODES, Response};

// Re-export the value types used in this crate's API
pub use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
