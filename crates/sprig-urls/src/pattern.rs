//! Placeholder extraction and pattern compilation for path templates.
//!
//! A template such as `/posts/{postId}/comments/{commentId}` contains
//! placeholders of the form `{name}` where `name` matches `[a-zA-Z]+`.
//! Brace tokens outside that grammar are ordinary template text.

use indexmap::IndexMap;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"\{([a-zA-Z]+)\}").expect("PLACEHOLDER_REGEX: invalid regex pattern")
});

/// Maximum allowed size for a compiled route pattern (in bytes).
const MAX_PATTERN_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// The placeholders of a single template.
///
/// Keyed by placeholder name in left-to-right order of first appearance,
/// each mapped to the literal token (`"{name}"`) it occupies in the template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
	tokens: IndexMap<String, String>,
}

impl Placeholders {
	/// Scans a template for placeholders.
	///
	/// # Examples
	///
	/// ```
	/// use sprig_urls::Placeholders;
	///
	/// let placeholders = Placeholders::scan("/foo/{fooId}/bar/{barId}");
	/// assert_eq!(placeholders.names().collect::<Vec<_>>(), ["fooId", "barId"]);
	/// assert_eq!(placeholders.token("barId"), Some("{barId}"));
	/// ```
	pub fn scan(template: &str) -> Self {
		let tokens = PLACEHOLDER_REGEX
			.captures_iter(template)
			.map(|caps| (caps[1].to_string(), caps[0].to_string()))
			.collect();

		Self { tokens }
	}

	/// Placeholder names in template order.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.tokens.keys().map(String::as_str)
	}

	/// `(name, token)` pairs in template order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.tokens
			.iter()
			.map(|(name, token)| (name.as_str(), token.as_str()))
	}

	/// The literal token for `name`, if the template has that placeholder.
	pub fn token(&self, name: &str) -> Option<&str> {
		self.tokens.get(name).map(String::as_str)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.tokens.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}
}

/// Number of `/`-delimited parts of a raw path or template.
///
/// `/posts/{id}` has three parts: the empty string before the leading slash
/// counts as one.
pub(crate) fn count_segments(path: &str) -> usize {
	path.split('/').count()
}

/// Compiles a template into a pattern anchored to the whole path.
///
/// Literal text is escaped, and each placeholder token becomes a named,
/// non-greedy group matching one or more characters. A name that occurs
/// again gets a group of its own, `{name}_{n}`; see [`repeat_of`].
pub(crate) fn compile(template: &str) -> Result<Regex, regex::Error> {
	let mut regex_str = String::from("^");
	let mut occurrences: HashMap<&str, usize> = HashMap::new();
	let mut literal_start = 0;

	for caps in PLACEHOLDER_REGEX.captures_iter(template) {
		let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
			continue;
		};

		regex_str.push_str(&regex::escape(&template[literal_start..token.start()]));

		let seen = occurrences.entry(name.as_str()).or_insert(0);
		if *seen == 0 {
			regex_str.push_str(&format!("(?P<{}>.+?)", name.as_str()));
		} else {
			regex_str.push_str(&format!("(?P<{}_{}>.+?)", name.as_str(), seen));
		}
		*seen += 1;

		literal_start = token.end();
	}

	regex_str.push_str(&regex::escape(&template[literal_start..]));
	regex_str.push('$');

	RegexBuilder::new(&regex_str)
		.size_limit(MAX_PATTERN_REGEX_SIZE)
		.build()
}

/// The placeholder a group name repeats, if it is a repeat group.
///
/// Placeholder names never contain `_`, so only groups made for second and
/// later occurrences have one.
pub(crate) fn repeat_of(group: &str) -> Option<&str> {
	group.split_once('_').map(|(name, _)| name)
}
