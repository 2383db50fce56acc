//! Route tables loaded from TOML.
//!
//! A configuration file lists routes as an array of tables; order in the file
//! is match priority:
//!
//! ```toml
//! [[routes]]
//! id = "home"
//! path = "/"
//! action = "pages::home"
//!
//! [[routes]]
//! id = "post"
//! path = "/posts/{postId}"
//! action = "posts::show"
//!
//! [routes.parameters]
//! format = "html"
//! ```
//!
//! `action` deserializes into the table's action type, so it may be a string,
//! an array such as `["PostController", "show"]`, or any other TOML value the
//! type accepts.

use crate::error::{ConfigResult, ConfigurationError};
use crate::route::RouteDefinition;
use crate::table::RouteTable;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// The deserialized form of a route configuration document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteConfig<A> {
	/// Route definitions, in declaration order.
	#[serde(default = "Vec::new")]
	pub routes: Vec<RouteDefinition<A>>,
}

impl<A: DeserializeOwned> RouteConfig<A> {
	/// Load configuration from a TOML file.
	///
	/// # Errors
	///
	/// Returns error if file cannot be read or parsed.
	pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
		let content =
			std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigurationError::Io {
				path: path.as_ref().to_path_buf(),
				source,
			})?;

		Self::from_toml(&content)
	}

	/// Parse configuration from TOML string.
	pub fn from_toml(content: &str) -> ConfigResult<Self> {
		Ok(toml::from_str(content)?)
	}
}

impl<A> RouteConfig<A> {
	/// Validates the definitions into a [`RouteTable`].
	pub fn into_table(self) -> ConfigResult<RouteTable<A>> {
		RouteTable::new(self.routes)
	}
}

impl<A: DeserializeOwned> RouteTable<A> {
	/// Builds a table from a TOML document.
	///
	/// Parsing errors are [`ConfigurationError::Parse`]; the definitions are
	/// then validated exactly as by [`RouteTable::new`].
	///
	/// # Examples
	///
	/// ```
	/// use sprig_urls::RouteTable;
	///
	/// let table: RouteTable<String> = RouteTable::from_toml(
	///     r#"
	///     [[routes]]
	///     id = "posts"
	///     path = "/posts"
	///     action = "posts::index"
	///     "#,
	/// )
	/// .unwrap();
	///
	/// assert_eq!(table.match_path("/posts").unwrap().action(), "posts::index");
	/// ```
	pub fn from_toml(content: &str) -> ConfigResult<Self> {
		RouteConfig::from_toml(content)?.into_table()
	}

	/// Builds a table from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
		let table = RouteConfig::from_file(path.as_ref())?.into_table()?;

		tracing::debug!(
			path = %path.as_ref().display(),
			routes = table.len(),
			"route configuration loaded"
		);

		Ok(table)
	}
}
