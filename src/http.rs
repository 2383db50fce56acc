//! HTTP module.
//!
//! Request, response and error values used around the router.
//!
//! # Examples
//!
//! ```rust
//! use sprig::http::{Request, Response, StatusCode};
//!
//! let request = Request::from_request_target("/posts?page=2").unwrap();
//! assert_eq!(request.path(), "/posts");
//!
//! let response = Response::redirect("/posts/", StatusCode::MOVED_PERMANENTLY).unwrap();
//! assert!(response.is_redirect());
//! ```

pub use sprig_http::*;
