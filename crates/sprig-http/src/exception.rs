//! HTTP errors.
//!
//! An [`HttpError`] carries a status code and an optional specifier, and
//! renders as `"{code} {reason}"` or `"{code} {reason}: {specifier}"`.

use crate::response::Response;
use http::StatusCode;
use thiserror::Error;

/// An error that maps directly onto an HTTP response status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct HttpError {
	status: StatusCode,
	specifier: String,
	message: String,
}

impl HttpError {
	/// Create an error for `status` with an optional specifier (may be empty).
	///
	/// # Examples
	///
	/// ```
	/// use sprig_http::HttpError;
	/// use http::StatusCode;
	///
	/// let err = HttpError::new(StatusCode::NOT_FOUND, "/missing");
	/// assert_eq!(err.to_string(), "404 Not Found: /missing");
	///
	/// let err = HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, "");
	/// assert_eq!(err.to_string(), "500 Internal Server Error");
	/// ```
	pub fn new(status: StatusCode, specifier: impl Into<String>) -> Self {
		let specifier = specifier.into();

		let mut message = match status.canonical_reason() {
			Some(reason) => format!("{} {}", status.as_u16(), reason),
			None => status.as_u16().to_string(),
		};

		if !specifier.is_empty() {
			message.push_str(": ");
			message.push_str(&specifier);
		}

		Self {
			status,
			specifier,
			message,
		}
	}

	/// 404 Not Found
	pub fn not_found(specifier: impl Into<String>) -> Self {
		Self::new(StatusCode::NOT_FOUND, specifier)
	}

	/// 400 Bad Request
	pub fn bad_request(specifier: impl Into<String>) -> Self {
		Self::new(StatusCode::BAD_REQUEST, specifier)
	}

	/// 500 Internal Server Error
	pub fn internal(specifier: impl Into<String>) -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR, specifier)
	}

	pub fn status(&self) -> StatusCode {
		self.status
	}

	/// The canonical reason phrase, or `""` for unregistered codes.
	pub fn status_text(&self) -> &'static str {
		self.status.canonical_reason().unwrap_or("")
	}

	pub fn specifier(&self) -> &str {
		&self.specifier
	}

	/// A plain-text response carrying the status and message.
	pub fn into_response(self) -> Response {
		Response::new(self.status)
			.with_header(
				http::header::CONTENT_TYPE,
				http::HeaderValue::from_static("text/plain; charset=utf-8"),
			)
			.with_body(self.message)
	}
}

/// Result type for HTTP operations.
pub type HttpResult<T> = Result<T, HttpError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(HttpError::not_found(""), 404, "404 Not Found")]
	#[case(HttpError::bad_request("The request URI is invalid."), 400, "400 Bad Request: The request URI is invalid.")]
	#[case(HttpError::internal("boom"), 500, "500 Internal Server Error: boom")]
	fn test_message_format(#[case] err: HttpError, #[case] code: u16, #[case] expected: &str) {
		assert_eq!(err.status().as_u16(), code);
		assert_eq!(err.to_string(), expected);
	}

	#[rstest]
	fn test_unregistered_status_has_no_reason() {
		let err = HttpError::new(StatusCode::from_u16(599).unwrap(), "");

		assert_eq!(err.status_text(), "");
		assert_eq!(err.to_string(), "599");
	}

	#[rstest]
	fn test_into_response() {
		// Arrange
		let err = HttpError::not_found("/posts/");

		// Act
		let response = err.into_response();

		// Assert
		assert_eq!(response.status, StatusCode::NOT_FOUND);
		assert_eq!(&response.body[..], b"404 Not Found: /posts/");
		assert_eq!(
			response.headers.get(http::header::CONTENT_TYPE).unwrap(),
			"text/plain; charset=utf-8"
		);
	}
}
