use crate::exception::{HttpError, HttpResult};
use bytes::Bytes;
use http::header::{CONTENT_TYPE, LOCATION};
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use std::io::{self, Write};

/// Statuses accepted by [`Response::redirect`].
pub const REDIRECT_STATUS_CODES: [StatusCode; 7] = [
	StatusCode::MULTIPLE_CHOICES,
	StatusCode::MOVED_PERMANENTLY,
	StatusCode::FOUND,
	StatusCode::SEE_OTHER,
	StatusCode::NOT_MODIFIED,
	StatusCode::TEMPORARY_REDIRECT,
	StatusCode::PERMANENT_REDIRECT,
];

/// Protocol used in the status line when the request named none.
pub const DEFAULT_PROTOCOL: &str = "HTTP/1.0";

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use sprig_http::Response;
	/// use http::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}

	/// Create a redirect to `target`
	///
	/// Sets `Location` and an HTML body that refreshes to the target for
	/// clients that ignore the header.
	///
	/// # Errors
	///
	/// Fails if `status` is not one of [`REDIRECT_STATUS_CODES`] or `target`
	/// cannot be used as a header value.
	///
	/// # Examples
	///
	/// ```
	/// use sprig_http::Response;
	/// use http::StatusCode;
	///
	/// let response = Response::redirect("/posts/42", StatusCode::FOUND).unwrap();
	/// assert_eq!(response.headers["location"], "/posts/42");
	///
	/// assert!(Response::redirect("/posts/42", StatusCode::OK).is_err());
	/// ```
	pub fn redirect(target: &str, status: StatusCode) -> HttpResult<Self> {
		if !REDIRECT_STATUS_CODES.contains(&status) {
			return Err(HttpError::internal(
				"The status code does not identify a redirect",
			));
		}

		let location = HeaderValue::from_str(target).map_err(|_| {
			HttpError::internal(format!("Invalid redirect target: {}", target))
		})?;

		let escaped = escape_html(target);
		let body = format!(
			"<html>\n\
			<head>\n\
			<meta charset=\"UTF-8\" />\n\
			<meta http-equiv=\"refresh\" content=\"0;url='{0}'\" />\n\
			<title>Redirecting to {0}</title>\n\
			</head>\n\
			<body>Redirecting to <a href=\"{0}\">{0}</a></body>\n\
			</html>",
			escaped
		);

		Ok(Self::new(status)
			.with_header(LOCATION, location)
			.with_header(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=UTF-8"))
			.with_body(body))
	}

	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set a header, replacing any previous value
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);
		self
	}

	/// Whether this response redirects the client
	pub fn is_redirect(&self) -> bool {
		REDIRECT_STATUS_CODES.contains(&self.status)
	}

	/// The `Location` target of a redirect, if set and valid UTF-8
	pub fn target_url(&self) -> Option<&str> {
		self.headers
			.get(LOCATION)
			.and_then(|value| value.to_str().ok())
	}

	/// Writes the status line, headers and body.
	///
	/// `protocol` is the request's protocol (`HTTP/1.1`, ...); [`DEFAULT_PROTOCOL`]
	/// is used when it is `None`.
	pub fn write_to<W: Write>(&self, writer: &mut W, protocol: Option<&str>) -> io::Result<()> {
		let protocol = protocol.unwrap_or(DEFAULT_PROTOCOL);

		match self.status.canonical_reason() {
			Some(reason) => write!(writer, "{} {} {}\r\n", protocol, self.status.as_u16(), reason)?,
			None => write!(writer, "{} {}\r\n", protocol, self.status.as_u16())?,
		}

		for (name, value) in &self.headers {
			write!(writer, "{}: ", name)?;
			writer.write_all(value.as_bytes())?;
			writer.write_all(b"\r\n")?;
		}

		writer.write_all(b"\r\n")?;
		writer.write_all(&self.body)?;
		writer.flush()
	}
}

impl Default for Response {
	fn default() -> Self {
		Self::ok()
	}
}

impl From<HttpError> for Response {
	fn from(err: HttpError) -> Self {
		err.into_response()
	}
}

fn escape_html(value: &str) -> String {
	let mut escaped = String::with_capacity(value.len());

	for c in value.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#039;"),
			_ => escaped.push(c),
		}
	}

	escaped
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_write_to_emits_status_line_headers_and_body() {
		// Arrange
		let response = Response::ok()
			.with_header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
			.with_body("Hello, World!");
		let mut out = Vec::new();

		// Act
		response.write_to(&mut out, Some("HTTP/1.1")).unwrap();

		// Assert
		assert_eq!(
			String::from_utf8(out).unwrap(),
			"HTTP/1.1 200 OK\r\ncontent-type: text/plain\r\n\r\nHello, World!"
		);
	}

	#[rstest]
	fn test_write_to_defaults_protocol() {
		let mut out = Vec::new();

		Response::not_found().write_to(&mut out, None).unwrap();

		assert_eq!(String::from_utf8(out).unwrap(), "HTTP/1.0 404 Not Found\r\n\r\n");
	}

	#[rstest]
	#[case(StatusCode::MULTIPLE_CHOICES)]
	#[case(StatusCode::MOVED_PERMANENTLY)]
	#[case(StatusCode::FOUND)]
	#[case(StatusCode::SEE_OTHER)]
	#[case(StatusCode::NOT_MODIFIED)]
	#[case(StatusCode::TEMPORARY_REDIRECT)]
	#[case(StatusCode::PERMANENT_REDIRECT)]
	fn test_redirect_accepts_redirect_statuses(#[case] status: StatusCode) {
		let response = Response::redirect("/new", status).unwrap();

		assert_eq!(response.status, status);
		assert!(response.is_redirect());
		assert_eq!(response.target_url(), Some("/new"));
	}

	#[rstest]
	#[case(StatusCode::OK)]
	#[case(StatusCode::NOT_FOUND)]
	fn test_redirect_rejects_other_statuses(#[case] status: StatusCode) {
		let err = Response::redirect("/new", status).unwrap_err();

		assert_eq!(
			err.to_string(),
			"500 Internal Server Error: The status code does not identify a redirect"
		);
	}

	#[rstest]
	fn test_redirect_body_escapes_target() {
		let response =
			Response::redirect("/search?q=a&b='c'", StatusCode::SEE_OTHER).unwrap();
		let body = String::from_utf8(response.body.to_vec()).unwrap();

		assert!(body.contains("<a href=\"/search?q=a&amp;b=&#039;c&#039;\">"));
		assert_eq!(response.target_url(), Some("/search?q=a&b='c'"));
	}

	#[rstest]
	fn test_redirect_rejects_header_unsafe_target() {
		assert!(Response::redirect("/a\r\nSet-Cookie: x=1", StatusCode::FOUND).is_err());
	}
}
