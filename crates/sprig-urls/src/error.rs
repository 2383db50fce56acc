//! Error types for route tables.
//!
//! Construction problems are [`ConfigurationError`]s and are fatal to the
//! table. Query-time problems are [`LookupError`]s. A path that matches no
//! route is not an error at all: [`RouteTable::match_path`] returns `None`.
//!
//! [`RouteTable::match_path`]: crate::RouteTable::match_path

use std::fmt;
#[cfg(feature = "config")]
use std::path::PathBuf;
use thiserror::Error;

/// Fields every route definition must carry, in the order they are reported.
pub const REQUIRED_FIELDS: [&str; 3] = ["id", "path", "action"];

/// Identifies a route definition in configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRef {
	/// The route's declared id.
	Id(String),
	/// Position in the definition list, used when the id itself is missing.
	Index(usize),
}

impl fmt::Display for RouteRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Id(id) => write!(f, "`{}`", id),
			Self::Index(index) => write!(f, "at index {}", index),
		}
	}
}

/// Errors raised while building a [`RouteTable`](crate::RouteTable).
#[derive(Debug, Error)]
pub enum ConfigurationError {
	/// The definition list was empty.
	#[error("There are no routes.")]
	NoRoutes,

	/// A definition lacks one or more required fields.
	#[error(
		"Route {route} is missing elements: {}.  Required: {}.",
		.missing.join(", "),
		REQUIRED_FIELDS.join(", ")
	)]
	MissingFields {
		/// The offending route.
		route: RouteRef,
		/// Missing field names, in [`REQUIRED_FIELDS`] order.
		missing: Vec<&'static str>,
	},

	/// Two definitions share an id.
	#[error("Route `{0}` is defined more than once.")]
	DuplicateId(String),

	/// The configuration document could not be parsed.
	#[cfg(feature = "config")]
	#[error("Invalid route configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// The configuration file could not be read.
	#[cfg(feature = "config")]
	#[error("Failed to read route configuration {}: {source}", .path.display())]
	Io {
		/// Path of the file that failed to load.
		path: PathBuf,
		/// Underlying I/O failure.
		source: std::io::Error,
	},
}

/// Errors raised by path generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
	/// No route has the requested id.
	#[error("The route, `{0}`, does not exist.")]
	RouteNotFound(String),

	/// Placeholders of the route were left without values.
	#[error(
		"Parameter values were missing for route `{route}`.  Required: {}.",
		.missing.join(", ")
	)]
	MissingParameters {
		/// Id of the route being generated.
		route: String,
		/// Every placeholder without a value, in template order.
		missing: Vec<String>,
	},
}

/// Result type for table construction.
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Result type for path generation.
pub type LookupResult<T> = Result<T, LookupError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_no_routes_display() {
		assert_eq!(ConfigurationError::NoRoutes.to_string(), "There are no routes.");
	}

	#[rstest]
	#[case(RouteRef::Id("invalid".to_string()), "Route `invalid` is missing")]
	#[case(RouteRef::Index(2), "Route at index 2 is missing")]
	fn test_missing_fields_names_the_route(#[case] route: RouteRef, #[case] prefix: &str) {
		// Arrange
		let err = ConfigurationError::MissingFields {
			route,
			missing: vec!["path"],
		};

		// Act
		let message = err.to_string();

		// Assert
		assert!(message.starts_with(prefix), "unexpected message: {}", message);
		assert!(message.ends_with("Required: id, path, action."));
	}

	#[rstest]
	fn test_missing_parameters_lists_every_name() {
		let err = LookupError::MissingParameters {
			route: "fooBar".to_string(),
			missing: vec!["fooId".to_string(), "barId".to_string()],
		};

		assert_eq!(
			err.to_string(),
			"Parameter values were missing for route `fooBar`.  Required: fooId, barId."
		);
	}

	#[rstest]
	fn test_route_not_found_display() {
		assert_eq!(
			LookupError::RouteNotFound("nonExistent".to_string()).to_string(),
			"The route, `nonExistent`, does not exist."
		);
	}
}
