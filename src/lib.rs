//! # Sprig
//!
//! A small web toolkit built around an ordered path router.
//!
//! Routes are declared as `(id, path template, action)` triples. Incoming
//! paths are matched exact-first, then against `{name}` placeholder templates
//! in declaration order, and any route can be turned back into a path from
//! its id and parameter values.
//!
//! ## Feature Flags
//!
//! - `config` (default) - load route tables from TOML files
//!
//! ## Quick Example
//!
//! ```rust
//! use sprig::prelude::*;
//!
//! let table = RouteTable::new(vec![
//!     RouteDefinition::new("posts", "/posts", "posts::index"),
//!     RouteDefinition::new("post", "/posts/{postId}", "posts::show"),
//! ])
//! .unwrap();
//!
//! let request = Request::from_request_target("/posts/42?preview=1").unwrap();
//! let matched = resolve(&table, &request).unwrap();
//! assert_eq!(*matched.action(), "posts::show");
//! assert_eq!(matched.parameter("postId"), Some("42"));
//!
//! let target = table.path_for("posts").unwrap();
//! let response = Response::redirect(&target, StatusCode::SEE_OTHER).unwrap();
//! assert_eq!(response.target_url(), Some("/posts"));
//! ```

pub mod http;
pub mod urls;

// Re-export routing
pub use sprig_urls::{
	ConfigurationError, LookupError, MatchedRoute, ParamValue, Route, RouteDefinition, RouteTable,
	resolve,
};

#[cfg(feature = "config")]
pub use sprig_urls::RouteConfig;

// Re-export HTTP types
pub use sprig_http::{HttpError, Request, Response, StatusCode};

/// Commonly used types, for glob import.
pub mod prelude {
	pub use crate::{
		ConfigurationError, HttpError, LookupError, MatchedRoute, ParamValue, Request, Response,
		Route, RouteDefinition, RouteTable, StatusCode, resolve,
	};

	#[cfg(feature = "config")]
	pub use crate::RouteConfig;
}
