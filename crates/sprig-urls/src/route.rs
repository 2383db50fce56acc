use crate::error::{ConfigResult, ConfigurationError, RouteRef};
use std::collections::HashMap;

/// Route definition as supplied by configuration.
///
/// Every field is optional here so that an incomplete definition is reported
/// by [`RouteTable::new`](crate::RouteTable::new) with the route it belongs to,
/// rather than rejected by the type system without context.
///
/// `action` is opaque to the router: a handler name, a `(class, method)` pair,
/// a function pointer. It is passed through to [`MatchedRoute`] unchanged.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
pub struct RouteDefinition<A> {
	/// Unique key within the table.
	pub id: Option<String>,
	/// Path template, possibly containing `{name}` placeholders.
	pub path: Option<String>,
	/// Caller-defined handle returned on a match.
	pub action: Option<A>,
	/// Default parameter values, overridden by values captured from the path.
	#[cfg_attr(feature = "config", serde(default))]
	pub parameters: HashMap<String, String>,
}

impl<A> RouteDefinition<A> {
	/// Create a complete route definition
	///
	/// # Examples
	///
	/// ```
	/// use sprig_urls::RouteDefinition;
	///
	/// let definition = RouteDefinition::new("posts", "/posts/{postId}", "show_post")
	///     .with_default("format", "html");
	/// assert_eq!(definition.path.as_deref(), Some("/posts/{postId}"));
	/// assert_eq!(definition.parameters.get("format").map(String::as_str), Some("html"));
	/// ```
	pub fn new(id: impl Into<String>, path: impl Into<String>, action: A) -> Self {
		Self {
			id: Some(id.into()),
			path: Some(path.into()),
			action: Some(action),
			parameters: HashMap::new(),
		}
	}

	/// Set a default parameter value
	pub fn with_default(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.parameters.insert(name.into(), value.into());
		self
	}

	/// Validates the definition into a [`Route`].
	///
	/// `index` is the definition's position in the list and identifies it in
	/// the error when the id is missing.
	pub(crate) fn into_route(self, index: usize) -> ConfigResult<Route<A>> {
		let id = self.id.filter(|id| !id.is_empty());
		let path = self.path.filter(|path| !path.is_empty());

		let missing: Vec<&'static str> = [
			("id", id.is_none()),
			("path", path.is_none()),
			("action", self.action.is_none()),
		]
		.into_iter()
		.filter_map(|(field, absent)| absent.then_some(field))
		.collect();

		match (id, path, self.action) {
			(Some(id), Some(path), Some(action)) => Ok(Route {
				id,
				path,
				action,
				defaults: self.parameters,
			}),
			(id, _, _) => Err(ConfigurationError::MissingFields {
				route: id.map_or(RouteRef::Index(index), RouteRef::Id),
				missing,
			}),
		}
	}
}

/// A validated, routable endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Route<A> {
	id: String,
	path: String,
	action: A,
	defaults: HashMap<String, String>,
}

impl<A> Route<A> {
	pub fn id(&self) -> &str {
		&self.id
	}

	/// The path template as declared.
	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn action(&self) -> &A {
		&self.action
	}

	/// Default parameter values declared for this route.
	pub fn defaults(&self) -> &HashMap<String, String> {
		&self.defaults
	}

	/// Whether the template can only be matched by the placeholder pass.
	///
	/// Any `{` sends a route there, even one that starts no valid placeholder.
	pub fn has_placeholders(&self) -> bool {
		self.path.contains('{')
	}
}

/// The result of a successful match.
///
/// Borrows the matched [`Route`] and owns the parameter values: the route's
/// defaults overlaid by whatever was captured from the path.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRoute<'a, A> {
	route: &'a Route<A>,
	parameters: HashMap<String, String>,
}

impl<'a, A> MatchedRoute<'a, A> {
	pub(crate) fn new(route: &'a Route<A>, captured: HashMap<String, String>) -> Self {
		let mut parameters = route.defaults.clone();
		parameters.extend(captured);

		Self { route, parameters }
	}

	pub fn route(&self) -> &'a Route<A> {
		self.route
	}

	pub fn id(&self) -> &'a str {
		&self.route.id
	}

	/// The matched route's template, not the request path.
	pub fn path(&self) -> &'a str {
		&self.route.path
	}

	pub fn action(&self) -> &'a A {
		&self.route.action
	}

	pub fn parameters(&self) -> &HashMap<String, String> {
		&self.parameters
	}

	/// A single parameter value.
	pub fn parameter(&self, name: &str) -> Option<&str> {
		self.parameters.get(name).map(String::as_str)
	}

	/// Takes ownership of the parameter map.
	pub fn into_parameters(self) -> HashMap<String, String> {
		self.parameters
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn definition(
		id: Option<&str>,
		path: Option<&str>,
		action: Option<&'static str>,
	) -> RouteDefinition<&'static str> {
		RouteDefinition {
			id: id.map(str::to_string),
			path: path.map(str::to_string),
			action,
			parameters: HashMap::new(),
		}
	}

	#[rstest]
	fn test_into_route_accepts_complete_definition() {
		let route = RouteDefinition::new("posts", "/posts", "list_posts")
			.into_route(0)
			.unwrap();

		assert_eq!(route.id(), "posts");
		assert_eq!(route.path(), "/posts");
		assert_eq!(*route.action(), "list_posts");
		assert!(!route.has_placeholders());
	}

	#[rstest]
	#[case(definition(Some("invalid"), None, Some("show")), RouteRef::Id("invalid".into()), vec!["path"])]
	#[case(definition(Some("invalid"), Some("/something"), None), RouteRef::Id("invalid".into()), vec!["action"])]
	#[case(definition(None, Some("/something"), Some("show")), RouteRef::Index(3), vec!["id"])]
	#[case(definition(Some(""), Some(""), None), RouteRef::Index(3), vec!["id", "path", "action"])]
	fn test_into_route_reports_missing_fields(
		#[case] definition: RouteDefinition<&'static str>,
		#[case] expected_route: RouteRef,
		#[case] expected_missing: Vec<&'static str>,
	) {
		// Act
		let result = definition.into_route(3);

		// Assert
		match result {
			Err(ConfigurationError::MissingFields { route, missing }) => {
				assert_eq!(route, expected_route);
				assert_eq!(missing, expected_missing);
			}
			other => panic!("expected MissingFields, got {:?}", other),
		}
	}

	#[rstest]
	fn test_matched_route_captures_override_defaults() {
		// Arrange
		let route = RouteDefinition::new("page", "/pages/{slug}", "show_page")
			.with_default("slug", "home")
			.with_default("format", "html")
			.into_route(0)
			.unwrap();
		let captured = HashMap::from([("slug".to_string(), "about".to_string())]);

		// Act
		let matched = MatchedRoute::new(&route, captured);

		// Assert
		assert_eq!(matched.parameter("slug"), Some("about"));
		assert_eq!(matched.parameter("format"), Some("html"));
		assert_eq!(matched.path(), "/pages/{slug}");
		assert_eq!(*matched.action(), "show_page");
	}
}
