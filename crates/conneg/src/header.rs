//! Header-value sources
//!
//! Negotiation only needs one thing from the transport layer: given a
//! field name, the raw string values of that field in order. Any
//! header representation can adapt to [`HeaderSource`]; implementations
//! for [`http::HeaderMap`] and a plain string multimap ship here.

use std::collections::HashMap;

/// An ordered source of raw header field values.
pub trait HeaderSource {
	/// Returns the raw values of the field `name`, in order of
	/// appearance. Unknown fields yield an empty list.
	fn header_values(&self, name: &str) -> Vec<&str>;
}

/// Field-name lookup is case-insensitive; values that are not valid
/// UTF-8 are skipped.
///
/// # Examples
///
/// ```
/// use conneg::HeaderSource;
/// use http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.append("accept-encoding", "gzip".parse().unwrap());
/// headers.append("accept-encoding", "br;q=0.8".parse().unwrap());
///
/// assert_eq!(
///     headers.header_values("Accept-Encoding"),
///     vec!["gzip", "br;q=0.8"],
/// );
/// assert!(headers.header_values("accept").is_empty());
/// ```
impl HeaderSource for http::HeaderMap {
	fn header_values(&self, name: &str) -> Vec<&str> {
		self.get_all(name)
			.iter()
			.filter_map(|value| value.to_str().ok())
			.collect()
	}
}

/// Plain multimap source for callers without an `http` stack.
///
/// Field names compare case-insensitively, like HTTP requires.
impl HeaderSource for HashMap<String, Vec<String>> {
	fn header_values(&self, name: &str) -> Vec<&str> {
		self.iter()
			.filter(|(key, _)| key.eq_ignore_ascii_case(name))
			.flat_map(|(_, values)| values.iter().map(String::as_str))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn header_map_preserves_value_order() {
		let mut headers = http::HeaderMap::new();
		headers.append("x-accept", "text/html".parse().unwrap());
		headers.append("x-accept", "application/xml;q=0.9".parse().unwrap());

		assert_eq!(
			headers.header_values("X-Accept"),
			vec!["text/html", "application/xml;q=0.9"]
		);
	}

	#[rstest]
	fn header_map_misses_yield_empty() {
		let headers = http::HeaderMap::new();
		assert!(headers.header_values("accept").is_empty());
		// Invalid field names simply have no values.
		assert!(headers.header_values("bad name\n").is_empty());
	}

	#[rstest]
	fn string_multimap_is_case_insensitive() {
		let mut headers = HashMap::new();
		headers.insert(
			"Accept-Language".to_string(),
			vec!["da".to_string(), "en;q=0.7".to_string()],
		);

		assert_eq!(
			headers.header_values("accept-language"),
			vec!["da", "en;q=0.7"]
		);
		assert!(headers.header_values("accept").is_empty());
	}
}
