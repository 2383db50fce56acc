//! # Sprig URLs
//!
//! Path routing for the sprig toolkit.
//!
//! A [`RouteTable`] maps request paths to named routes and builds paths back
//! from a route id and parameter values:
//!
//! - **Exact routes first**: a template without placeholders that equals the
//!   path always wins, wherever it is declared
//! - **Declaration order**: among placeholder routes the first match wins
//! - **Flat placeholders**: `{name}` with `name` in `[a-zA-Z]+`, matching within
//!   a single path segment; no types, constraints or optional segments
//! - **Trailing slashes are significant**: `/posts` and `/posts/` are distinct
//!
//! ## Example
//!
//! ```
//! use sprig_urls::{RouteDefinition, RouteTable};
//!
//! let table = RouteTable::new(vec![
//!     RouteDefinition::new("home", "/", "pages::home"),
//!     RouteDefinition::new("post", "/posts/{postId}", "posts::show"),
//! ])
//! .unwrap();
//!
//! let matched = table.match_path("/posts/the-quick-brown-fox").unwrap();
//! assert_eq!(*matched.action(), "posts::show");
//! assert_eq!(matched.parameter("postId"), Some("the-quick-brown-fox"));
//!
//! let path = table.generate_path("post", [("postId", "hello")]).unwrap();
//! assert_eq!(path, "/posts/hello");
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default) - load route tables from TOML with [`RouteConfig`]

#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;
pub mod error;
pub mod pattern;
pub mod resolver;
pub mod reverse;
pub mod route;
pub mod table;

#[cfg(feature = "config")]
pub use config::RouteConfig;
pub use error::{
	ConfigResult, ConfigurationError, LookupError, LookupResult, REQUIRED_FIELDS, RouteRef,
};
pub use pattern::Placeholders;
pub use resolver::resolve;
pub use reverse::ParamValue;
pub use route::{MatchedRoute, Route, RouteDefinition};
pub use table::RouteTable;
