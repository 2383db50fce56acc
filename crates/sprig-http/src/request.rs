//! Incoming request values.
//!
//! A [`Request`] is built from a raw request-target and reduces it to the
//! bare path the router works with.

use crate::exception::{HttpError, HttpResult};
use http::{Method, Uri};
use std::collections::HashMap;

/// Server variable holding the raw request-target.
pub const REQUEST_URI: &str = "REQUEST_URI";
/// Server variable holding the request protocol (`HTTP/1.1`, ...).
pub const SERVER_PROTOCOL: &str = "SERVER_PROTOCOL";
/// Server variable holding the request method.
pub const REQUEST_METHOD: &str = "REQUEST_METHOD";

/// HTTP Request representation
#[derive(Debug, Clone)]
pub struct Request {
	method: Method,
	path: String,
	query_string: Option<String>,
	protocol: Option<String>,
}

impl Request {
	/// Parse a request-target into a `GET` request.
	///
	/// Origin-form (`/path?query`) and absolute-form
	/// (`http://host/path?query`) targets are accepted; the path keeps its
	/// trailing slash, if any.
	///
	/// # Errors
	///
	/// Returns a 400 error if the target does not reduce to a path starting
	/// with `/`.
	///
	/// # Examples
	///
	/// ```
	/// use sprig_http::Request;
	///
	/// let request = Request::from_request_target("/posts/42?foo=bar").unwrap();
	/// assert_eq!(request.path(), "/posts/42");
	/// assert_eq!(request.query_string(), Some("foo=bar"));
	///
	/// let request = Request::from_request_target("https://example.com/posts/").unwrap();
	/// assert_eq!(request.path(), "/posts/");
	///
	/// assert!(Request::from_request_target("").is_err());
	/// ```
	pub fn from_request_target(target: &str) -> HttpResult<Self> {
		let uri: Uri = target.parse().map_err(|error| {
			tracing::debug!(request_target = target, %error, "unparseable request-target");
			invalid_request_uri()
		})?;

		let path = uri.path();
		if !path.starts_with('/') {
			tracing::debug!(request_target = target, "request-target has no absolute path");
			return Err(invalid_request_uri());
		}

		Ok(Self {
			method: Method::GET,
			path: path.to_string(),
			query_string: uri.query().map(str::to_string),
			protocol: None,
		})
	}

	/// Build a request from CGI-style server variables.
	///
	/// Reads [`REQUEST_URI`] (required), [`REQUEST_METHOD`] and
	/// [`SERVER_PROTOCOL`].
	///
	/// # Errors
	///
	/// Returns a 400 error if `REQUEST_URI` is absent or invalid, or if
	/// `REQUEST_METHOD` is not a valid method token.
	pub fn from_server_vars(vars: &HashMap<String, String>) -> HttpResult<Self> {
		let target = vars
			.get(REQUEST_URI)
			.ok_or_else(|| HttpError::bad_request("There is no request URI in the server vars."))?;

		let mut request = Self::from_request_target(target)?;

		if let Some(method) = vars.get(REQUEST_METHOD) {
			request.method = Method::from_bytes(method.as_bytes())
				.map_err(|_| HttpError::bad_request(format!("Invalid request method: {}", method)))?;
		}

		request.protocol = vars.get(SERVER_PROTOCOL).cloned();

		Ok(request)
	}

	/// Set the request method
	pub fn with_method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn method(&self) -> &Method {
		&self.method
	}

	/// The bare path: no scheme, authority or query.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// The raw query string, without the leading `?`.
	pub fn query_string(&self) -> Option<&str> {
		self.query_string.as_deref()
	}

	/// The query string decoded into a map.
	///
	/// When a key repeats, the last value wins.
	///
	/// # Errors
	///
	/// Returns a 400 error if the query string is not valid
	/// `application/x-www-form-urlencoded` data.
	pub fn query(&self) -> HttpResult<HashMap<String, String>> {
		match &self.query_string {
			Some(query) => serde_urlencoded::from_str(query)
				.map_err(|e| HttpError::bad_request(format!("Invalid query string: {}", e))),
			None => Ok(HashMap::new()),
		}
	}

	/// The protocol named by the server, if any.
	pub fn protocol(&self) -> Option<&str> {
		self.protocol.as_deref()
	}
}

fn invalid_request_uri() -> HttpError {
	HttpError::bad_request("The request URI is invalid.")
}
