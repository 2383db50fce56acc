use crate::error::{ConfigResult, ConfigurationError, LookupError, LookupResult};
use crate::pattern::{self, Placeholders};
use crate::reverse::{self, ParamValue};
use crate::route::{MatchedRoute, Route, RouteDefinition};
use indexmap::IndexMap;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A route plus what is derived from its template on first use.
#[derive(Debug)]
struct Entry<A> {
	route: Route<A>,
	placeholders: OnceLock<Placeholders>,
	/// `None` when the template failed to compile; the route then never matches.
	pattern: OnceLock<Option<Regex>>,
}

impl<A> Entry<A> {
	fn new(route: Route<A>) -> Self {
		Self {
			route,
			placeholders: OnceLock::new(),
			pattern: OnceLock::new(),
		}
	}

	fn placeholders(&self) -> &Placeholders {
		self.placeholders
			.get_or_init(|| Placeholders::scan(self.route.path()))
	}

	fn pattern(&self) -> Option<&Regex> {
		self.pattern
			.get_or_init(
				|| match pattern::compile(self.route.path()) {
					Ok(regex) => Some(regex),
					Err(error) => {
						tracing::warn!(
							route = self.route.id(),
							path = self.route.path(),
							%error,
							"route pattern failed to compile; route will never match"
						);
						None
					}
				},
			)
			.as_ref()
	}

	/// Captures the placeholder values of `path`.
	///
	/// A placeholder that occurs more than once must capture the same value
	/// at every occurrence.
	fn capture(&self, path: &str) -> Option<HashMap<String, String>> {
		let regex = self.pattern()?;
		let caps = regex.captures(path)?;

		let repeats_agree = regex
			.capture_names()
			.flatten()
			.filter_map(|group| pattern::repeat_of(group).map(|name| (group, name)))
			.all(|(group, name)| {
				caps.name(group).map(|m| m.as_str()) == caps.name(name).map(|m| m.as_str())
			});

		if !repeats_agree {
			return None;
		}

		Some(
			self.placeholders()
				.names()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.to_string(), m.as_str().to_string()))
				})
				.collect(),
		)
	}
}

/// An ordered, immutable collection of routes.
///
/// Declaration order is match priority among routes of the same kind and is
/// never re-sorted. Exact (placeholder-free) routes always win over
/// placeholder routes.
///
/// Placeholders and compiled patterns are derived lazily per route and kept
/// for the table's lifetime. The caches are write-once, so a table can be
/// shared between threads and queried concurrently.
///
/// # Examples
///
/// ```
/// use sprig_urls::{RouteDefinition, RouteTable};
///
/// let table = RouteTable::new(vec![
///     RouteDefinition::new("posts", "/posts", "list_posts"),
///     RouteDefinition::new("post", "/posts/{postId}", "show_post"),
/// ])
/// .unwrap();
///
/// let matched = table.match_path("/posts/42").unwrap();
/// assert_eq!(matched.id(), "post");
/// assert_eq!(matched.parameter("postId"), Some("42"));
///
/// assert_eq!(table.generate_path("post", [("postId", 7)]).unwrap(), "/posts/7");
/// ```
#[derive(Debug)]
pub struct RouteTable<A> {
	entries: IndexMap<String, Entry<A>>,
}

impl<A> RouteTable<A> {
	/// Builds a table from route definitions, in order.
	///
	/// # Errors
	///
	/// - [`ConfigurationError::NoRoutes`] if `definitions` is empty
	/// - [`ConfigurationError::MissingFields`] if a definition lacks an id, path or action
	/// - [`ConfigurationError::DuplicateId`] if two definitions share an id
	pub fn new(definitions: Vec<RouteDefinition<A>>) -> ConfigResult<Self> {
		if definitions.is_empty() {
			return Err(ConfigurationError::NoRoutes);
		}

		let mut entries = IndexMap::with_capacity(definitions.len());

		for (index, definition) in definitions.into_iter().enumerate() {
			let route = definition.into_route(index)?;

			if entries.contains_key(route.id()) {
				return Err(ConfigurationError::DuplicateId(route.id().to_string()));
			}

			entries.insert(route.id().to_string(), Entry::new(route));
		}

		tracing::debug!(routes = entries.len(), "route table built");

		Ok(Self { entries })
	}

	/// Finds the route for a request path.
	///
	/// `path` is a bare path already stripped of scheme, authority and query.
	/// Trailing slashes are significant.
	///
	/// Exact routes are tried first, in declaration order. Only if none equals
	/// `path` are placeholder routes with the same number of `/`-separated
	/// parts tried, again in declaration order. Returns `None` when nothing
	/// matches.
	pub fn match_path(&self, path: &str) -> Option<MatchedRoute<'_, A>> {
		let mut candidates = Vec::new();

		for entry in self.entries.values() {
			if entry.route.has_placeholders() {
				candidates.push(entry);
				continue;
			}

			if entry.route.path() == path {
				tracing::trace!(path, route = entry.route.id(), "exact route matched");
				return Some(MatchedRoute::new(&entry.route, HashMap::new()));
			}
		}

		let segments = pattern::count_segments(path);

		let matched = candidates
			.into_iter()
			.filter(|entry| pattern::count_segments(entry.route.path()) == segments)
			.find_map(|entry| {
				entry
					.capture(path)
					.map(|captured| MatchedRoute::new(&entry.route, captured))
			});

		match &matched {
			Some(matched) => {
				tracing::trace!(path, route = matched.id(), "placeholder route matched")
			}
			None => tracing::trace!(path, "no route matched"),
		}

		matched
	}

	/// Builds a concrete path for a route.
	///
	/// A template without placeholders is returned as is and `parameters` is
	/// ignored. Otherwise every placeholder needs a value; keys that are not
	/// placeholders of the route are ignored.
	///
	/// # Errors
	///
	/// - [`LookupError::RouteNotFound`] if no route has `route_id`
	/// - [`LookupError::MissingParameters`] listing every placeholder without a value
	///
	/// # Examples
	///
	/// ```
	/// use sprig_urls::{ParamValue, RouteDefinition, RouteTable};
	///
	/// let table = RouteTable::new(vec![RouteDefinition::new(
	///     "fooBar",
	///     "/foo/{fooId}/bar/{barId}",
	///     "show",
	/// )])
	/// .unwrap();
	///
	/// let path = table
	///     .generate_path(
	///         "fooBar",
	///         [("fooId", ParamValue::from(123)), ("barId", ParamValue::from("456"))],
	///     )
	///     .unwrap();
	/// assert_eq!(path, "/foo/123/bar/456");
	/// ```
	pub fn generate_path<I, K, V>(&self, route_id: &str, parameters: I) -> LookupResult<String>
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<ParamValue>,
	{
		let entry = self
			.entries
			.get(route_id)
			.ok_or_else(|| LookupError::RouteNotFound(route_id.to_string()))?;

		let placeholders = entry.placeholders();

		if placeholders.is_empty() {
			return Ok(entry.route.path().to_string());
		}

		let values: HashMap<String, ParamValue> = parameters
			.into_iter()
			.map(|(name, value)| (name.into(), value.into()))
			.filter(|(name, _)| placeholders.contains(name))
			.collect();

		if values.len() < placeholders.len() {
			let missing = placeholders
				.names()
				.filter(|name| !values.contains_key(*name))
				.map(str::to_string)
				.collect();

			return Err(LookupError::MissingParameters {
				route: route_id.to_string(),
				missing,
			});
		}

		Ok(reverse::substitute(entry.route.path(), placeholders, &values))
	}

	/// Builds the path of a route that takes no parameters.
	///
	/// Equivalent to [`generate_path`](Self::generate_path) with no values, so
	/// a route with placeholders fails with [`LookupError::MissingParameters`].
	pub fn path_for(&self, route_id: &str) -> LookupResult<String> {
		self.generate_path(route_id, std::iter::empty::<(String, ParamValue)>())
	}

	/// The placeholders of a route's template, or `None` for an unknown id.
	pub fn placeholders(&self, route_id: &str) -> Option<&Placeholders> {
		self.entries.get(route_id).map(Entry::placeholders)
	}

	pub fn get(&self, route_id: &str) -> Option<&Route<A>> {
		self.entries.get(route_id).map(|entry| &entry.route)
	}

	pub fn contains(&self, route_id: &str) -> bool {
		self.entries.contains_key(route_id)
	}

	/// Routes in declaration order.
	pub fn routes(&self) -> impl Iterator<Item = &Route<A>> {
		self.entries.values().map(|entry| &entry.route)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Always `false` for a constructed table; provided for API symmetry.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn table(routes: &[(&str, &str)]) -> RouteTable<&'static str> {
		RouteTable::new(
			routes
				.iter()
				.map(|(id, path)| RouteDefinition::new(*id, *path, "action"))
				.collect(),
		)
		.unwrap()
	}

	#[rstest]
	fn test_new_rejects_empty_list() {
		let result = RouteTable::<&str>::new(Vec::new());

		assert!(matches!(result, Err(ConfigurationError::NoRoutes)));
	}

	#[rstest]
	fn test_new_rejects_duplicate_id() {
		// Arrange
		let definitions = vec![
			RouteDefinition::new("posts", "/posts", "list"),
			RouteDefinition::new("posts", "/articles", "list"),
		];

		// Act
		let result = RouteTable::new(definitions);

		// Assert
		match result {
			Err(ConfigurationError::DuplicateId(id)) => assert_eq!(id, "posts"),
			other => panic!("expected DuplicateId, got {:?}", other),
		}
	}

	#[rstest]
	fn test_repeated_placeholder_must_capture_one_value() {
		// Arrange
		let table = table(&[("posts", "/posts"), ("pair", "/{id}/x/{id}")]);

		// Act
		let path = table.generate_path("pair", [("id", 7)]).unwrap();

		// Assert
		assert_eq!(path, "/7/x/7");
		assert_eq!(table.placeholders("pair").unwrap().len(), 1);

		let matched = table.match_path("/7/x/7").unwrap();
		assert_eq!(matched.id(), "pair");
		assert_eq!(
			matched.parameters(),
			&HashMap::from([("id".to_string(), "7".to_string())])
		);

		assert!(table.match_path("/7/x/8").is_none());
		assert_eq!(table.match_path("/posts").unwrap().id(), "posts");
	}

	#[rstest]
	fn test_concurrent_first_use_fills_caches_once() {
		// Arrange
		let table = table(&[
			("posts", "/posts"),
			("post", "/posts/{postId}"),
			("comment", "/posts/{postId}/comments/{commentId}"),
		]);

		// Act
		let results: Vec<(String, String, String)> = std::thread::scope(|scope| {
			let handles: Vec<_> = (0..8)
				.map(|n| {
					let table = &table;
					scope.spawn(move || {
						let post = table.match_path(&format!("/posts/{}", n)).unwrap();
						let comment = table
							.match_path(&format!("/posts/{}/comments/{}", n, n * 2))
							.unwrap();
						let generated = table
							.generate_path("comment", [("postId", n), ("commentId", n * 2)])
							.unwrap();

						(
							post.parameter("postId").unwrap().to_string(),
							comment.parameter("commentId").unwrap().to_string(),
							generated,
						)
					})
				})
				.collect();

			handles.into_iter().map(|handle| handle.join().unwrap()).collect()
		});

		// Assert
		for (n, (post_id, comment_id, generated)) in results.into_iter().enumerate() {
			assert_eq!(post_id, n.to_string());
			assert_eq!(comment_id, (n * 2).to_string());
			assert_eq!(generated, format!("/posts/{}/comments/{}", n, n * 2));
		}
		assert_eq!(table.placeholders("comment").unwrap().len(), 2);
	}

	#[rstest]
	fn test_new_reports_invalid_route_after_valid_one() {
		let definitions = vec![
			RouteDefinition::new("valid", "/something", "show"),
			RouteDefinition {
				id: Some("invalid".to_string()),
				path: None,
				action: Some("show"),
				parameters: HashMap::new(),
			},
		];

		let err = RouteTable::new(definitions).unwrap_err();

		assert_eq!(
			err.to_string(),
			"Route `invalid` is missing elements: path.  Required: id, path, action."
		);
	}

	#[rstest]
	fn test_routes_keep_declaration_order() {
		let table = table(&[("b", "/b"), ("a", "/a"), ("c", "/c/{id}")]);

		let ids: Vec<&str> = table.routes().map(Route::id).collect();

		assert_eq!(ids, ["b", "a", "c"]);
		assert_eq!(table.len(), 3);
		assert!(!table.is_empty());
	}

	#[rstest]
	fn test_placeholders_are_memoized() {
		let table = table(&[("fooBar", "/foo/{fooId}/bar/{barId}")]);

		let first = table.placeholders("fooBar").unwrap() as *const Placeholders;
		let second = table.placeholders("fooBar").unwrap() as *const Placeholders;

		assert_eq!(first, second);
		assert!(table.placeholders("missing").is_none());
	}

	#[rstest]
	fn test_segment_prefilter_skips_other_lengths() {
		let table = table(&[("deep", "/posts/{id}/comments"), ("shallow", "/posts/{id}")]);

		let matched = table.match_path("/posts/42").unwrap();

		assert_eq!(matched.id(), "shallow");
	}

	#[rstest]
	fn test_placeholder_does_not_span_segments() {
		let table = table(&[("post", "/posts/{id}")]);

		assert!(table.match_path("/posts/a/b").is_none());
		assert!(table.match_path("/posts/").is_none());
	}

	#[rstest]
	fn test_defaults_seed_exact_match() {
		let table = RouteTable::new(vec![
			RouteDefinition::new("about", "/about", "show_page").with_default("page", "about"),
		])
		.unwrap();

		let matched = table.match_path("/about").unwrap();

		assert_eq!(matched.parameter("page"), Some("about"));
	}

	#[rstest]
	fn test_path_for_static_route() {
		let table = table(&[("posts", "/posts"), ("post", "/posts/{postId}")]);

		assert_eq!(table.path_for("posts").unwrap(), "/posts");
		assert!(matches!(
			table.path_for("post"),
			Err(LookupError::MissingParameters { .. })
		));
	}

	#[rstest]
	fn test_table_is_shareable_across_threads() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<RouteTable<String>>();
	}
}
