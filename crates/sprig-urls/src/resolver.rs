//! Resolution of HTTP requests against a route table.
//!
//! [`RouteTable::match_path`] reports "no route" as `None`; this is where the
//! HTTP layer turns that into a 404.

use crate::route::MatchedRoute;
use crate::table::RouteTable;
use sprig_http::{HttpError, Request};

/// Matches a request's path against `table`.
///
/// # Errors
///
/// Returns a 404 [`HttpError`] naming the path when no route matches.
///
/// # Examples
///
/// ```
/// use sprig_http::Request;
/// use sprig_urls::{RouteDefinition, RouteTable, resolve};
///
/// let table = RouteTable::new(vec![RouteDefinition::new("post", "/posts/{postId}", "show")]).unwrap();
/// let request = Request::from_request_target("/posts/42?preview=1").unwrap();
///
/// let matched = resolve(&table, &request).unwrap();
/// assert_eq!(matched.parameter("postId"), Some("42"));
///
/// let missing = Request::from_request_target("/users").unwrap();
/// assert_eq!(resolve(&table, &missing).unwrap_err().status().as_u16(), 404);
/// ```
pub fn resolve<'a, A>(
	table: &'a RouteTable<A>,
	request: &Request,
) -> Result<MatchedRoute<'a, A>, HttpError> {
	table.match_path(request.path()).ok_or_else(|| {
		tracing::debug!(
			method = %request.method(),
			path = request.path(),
			"request did not match any route"
		);
		HttpError::not_found(request.path())
	})
}
