//! Reverse path generation.
//!
//! Fills a template's placeholder tokens with caller-supplied values. Values
//! are inserted verbatim: encoding reserved characters is the caller's job.

use crate::pattern::Placeholders;
use std::collections::HashMap;
use std::fmt;

/// A value supplied for a placeholder.
///
/// Numbers are written in decimal form.
///
/// # Examples
///
/// ```
/// use sprig_urls::ParamValue;
///
/// assert_eq!(ParamValue::from(123).to_string(), "123");
/// assert_eq!(ParamValue::from("456").to_string(), "456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamValue {
	Str(String),
	Int(i64),
	UInt(u64),
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Str(value) => f.write_str(value),
			Self::Int(value) => write!(f, "{}", value),
			Self::UInt(value) => write!(f, "{}", value),
		}
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<&String> for ParamValue {
	fn from(value: &String) -> Self {
		Self::Str(value.clone())
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

macro_rules! impl_from_int {
	($variant:ident => $target:ty: $($source:ty),*) => {
		$(
			impl From<$source> for ParamValue {
				fn from(value: $source) -> Self {
					Self::$variant(<$target>::from(value))
				}
			}
		)*
	};
}

impl_from_int!(Int => i64: i8, i16, i32, i64);
impl_from_int!(UInt => u64: u8, u16, u32, u64);

impl From<usize> for ParamValue {
	fn from(value: usize) -> Self {
		Self::UInt(value as u64)
	}
}

impl From<isize> for ParamValue {
	fn from(value: isize) -> Self {
		Self::Int(value as i64)
	}
}

/// Substitutes every placeholder token of `template` with its value.
///
/// Callers check that `values` covers every placeholder first; a token with
/// no value is left in place.
pub(crate) fn substitute(
	template: &str,
	placeholders: &Placeholders,
	values: &HashMap<String, ParamValue>,
) -> String {
	placeholders
		.iter()
		.fold(template.to_string(), |path, (name, token)| match values.get(name) {
			Some(value) => path.replace(token, &value.to_string()),
			None => path,
		})
}
