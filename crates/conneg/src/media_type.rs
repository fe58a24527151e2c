//! Whole-string media type matching
//!
//! A membership test for a concrete media type against a list, used
//! when checking a request's `Content-Type`-style value rather than
//! negotiating a response representation. Unlike the negotiator this
//! comparison is case-sensitive; the two sit at different layers and
//! their asymmetry is deliberate.

/// Returns whether `media_type` is found within `types`.
///
/// Any directives in `media_type` are skipped when comparing, so
/// `text/html; charset=utf-8` matches `text/html`. A list entry
/// without a subtype matches any more precise type: `image/*` matches
/// `image/png`, `image/svg` and so on, and `*/*` matches anything.
///
/// No whitespace trimming happens on either side; an empty type never
/// matches.
///
/// # Examples
///
/// ```
/// use conneg::media_type_matches;
///
/// assert!(media_type_matches("text/html; charset=utf-8", &["text/html"]));
/// assert!(media_type_matches("image/png", &["image/*"]));
/// assert!(media_type_matches("application/json", &["*/*"]));
///
/// // Case-sensitive, unlike negotiation.
/// assert!(!media_type_matches("text/HTML", &["text/html"]));
/// ```
pub fn media_type_matches<S>(media_type: &str, types: &[S]) -> bool
where
	S: AsRef<str>,
{
	// `text/plain; charset=utf-8` is a valid media type which would
	// not compare equal to `text/plain`; only the actual type is
	// tested and any directives are skipped.
	let media_type = match media_type.find(';') {
		Some(at) => &media_type[..at],
		None => media_type,
	};

	if media_type.is_empty() {
		return false;
	}

	types.iter().any(|candidate| {
		let candidate = candidate.as_ref();
		candidate == media_type
			|| candidate == "*/*"
			|| (candidate.ends_with("/*")
				&& media_type.starts_with(&candidate[..candidate.len() - 1]))
	})
}
