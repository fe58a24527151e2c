//! Best-offer selection
//!
//! Scores server offers against a parsed spec list and picks the single
//! best one. All identifier comparison here is case-insensitive; header
//! tokens are conventionally case-insensitive even though the parser
//! preserves their original spelling.
//!
//! Selection rules, in order:
//!
//! 1. Each offer resolves to the quality of its highest-specificity
//!    matching spec (exact match beats `x/*`, which beats `*` / `*/*`);
//!    among equally specific specs the highest quality wins, then the
//!    earliest parsed.
//! 2. An offer whose resolved quality is `0` is explicitly excluded.
//! 3. The offer with the strictly highest resolved quality wins; a
//!    quality tie goes to the more specific match, and a remaining tie
//!    to the offer listed first by the server.

use crate::header::HeaderSource;
use crate::spec::{AcceptSpec, parse_accept};

/// How precisely a spec identifier matched an offer.
///
/// Variants are ordered from least to most specific so the derived
/// `Ord` ranks `Exact` highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Specificity {
	/// `*` or `*/*`, matches any offer.
	Universal,
	/// A `type/*` pattern matching the offer's type prefix.
	Subtype,
	/// Case-insensitive equality, including a wildcard offer matching a
	/// wildcard spec literally.
	Exact,
}

/// Negotiates the best offer for one header field.
///
/// Reads the field's values from `headers`, parses them, and selects
/// among `offers`. Returns `None` when the header is absent or
/// malformed, when `offers` is empty, or when no offer is acceptable;
/// callers usually answer that with `406 Not Acceptable`.
///
/// # Examples
///
/// ```
/// use http::HeaderMap;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(
///     "accept",
///     "text/html, application/xml;q=0.9, */*;q=0.8".parse().unwrap(),
/// );
///
/// let offers = ["application/json", "text/html"];
/// assert_eq!(conneg::negotiate(&headers, "accept", &offers), Some("text/html"));
///
/// let offers = ["application/json"];
/// assert_eq!(conneg::negotiate(&headers, "accept", &offers), Some("application/json"));
/// ```
pub fn negotiate<'a, H, S>(headers: &H, name: &str, offers: &'a [S]) -> Option<&'a str>
where
	H: HeaderSource + ?Sized,
	S: AsRef<str>,
{
	let specs = parse_accept(headers.header_values(name));
	negotiate_specs(&specs, offers)
}

/// Selects the best offer for an already-parsed spec list.
///
/// Pure and deterministic; identical inputs always produce the
/// identical result. The returned string borrows from `offers`, so the
/// selected identifier keeps the server's spelling.
///
/// # Examples
///
/// ```
/// use conneg::{AcceptSpec, negotiate_specs};
///
/// let specs = [
///     AcceptSpec::new("deflate", 1.0),
///     AcceptSpec::new("gzip", 1.0),
///     AcceptSpec::new("*", 0.5),
/// ];
///
/// assert_eq!(negotiate_specs(&specs, &["zstd", "gzip"]), Some("gzip"));
/// // The wildcard spec matches the literal wildcard offer exactly,
/// // which outranks the merely wildcard-covered `zstd`.
/// assert_eq!(negotiate_specs(&specs, &["zstd", "*"]), Some("*"));
/// // Without the wildcard spec nothing matches.
/// assert_eq!(negotiate_specs(&specs[..2], &["zstd"]), None);
/// ```
pub fn negotiate_specs<'a, S>(specs: &[AcceptSpec], offers: &'a [S]) -> Option<&'a str>
where
	S: AsRef<str>,
{
	let mut best: Option<(&'a str, f32, Specificity)> = None;

	for offer in offers {
		let offer = offer.as_ref();
		let Some((class, quality)) = resolve(specs, offer) else {
			continue;
		};
		if quality <= 0.0 {
			// Explicitly excluded, even when nothing else matches.
			continue;
		}

		let better = match best {
			None => true,
			Some((_, best_quality, best_class)) => {
				quality > best_quality || (quality == best_quality && class > best_class)
			}
		};
		if better {
			best = Some((offer, quality, class));
		}
	}

	best.map(|(offer, _, _)| offer)
}

/// Resolves one offer against all specs: the highest-specificity match
/// wins, ties go to the higher quality, then to the earliest spec.
fn resolve(specs: &[AcceptSpec], offer: &str) -> Option<(Specificity, f32)> {
	let mut best: Option<(Specificity, f32)> = None;

	for spec in specs {
		let Some(class) = specificity(&spec.value, offer) else {
			continue;
		};
		let better = match best {
			None => true,
			Some((best_class, best_quality)) => {
				class > best_class || (class == best_class && spec.quality > best_quality)
			}
		};
		if better {
			best = Some((class, spec.quality));
		}
	}

	best
}

fn specificity(spec: &str, offer: &str) -> Option<Specificity> {
	if spec.eq_ignore_ascii_case(offer) {
		return Some(Specificity::Exact);
	}
	if spec == "*" || spec == "*/*" {
		return Some(Specificity::Universal);
	}
	// `image/*` matches `image/png` on the prefix up to and including
	// the slash.
	if let Some(prefix) = spec.strip_suffix('*')
		&& prefix.ends_with('/')
		&& offer
			.get(..prefix.len())
			.is_some_and(|head| head.eq_ignore_ascii_case(prefix))
	{
		return Some(Specificity::Subtype);
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("text/html", "text/html", Some(Specificity::Exact))]
	#[case("TeXt/HtMl", "text/html", Some(Specificity::Exact))]
	#[case("*/*", "*/*", Some(Specificity::Exact))]
	#[case("*", "*", Some(Specificity::Exact))]
	#[case("*/*", "text/html", Some(Specificity::Universal))]
	#[case("*", "gzip", Some(Specificity::Universal))]
	#[case("image/*", "image/png", Some(Specificity::Subtype))]
	#[case("IMAGE/*", "image/png", Some(Specificity::Subtype))]
	#[case("image/*", "text/html", None)]
	#[case("image/*", "image", None)]
	#[case("text/html", "text/plain", None)]
	fn specificity_classes(
		#[case] spec: &str,
		#[case] offer: &str,
		#[case] expected: Option<Specificity>,
	) {
		assert_eq!(specificity(spec, offer), expected);
	}

	#[rstest]
	fn exact_match_outranks_wildcards() {
		assert!(Specificity::Exact > Specificity::Subtype);
		assert!(Specificity::Subtype > Specificity::Universal);
	}

	#[rstest]
	fn zero_quality_exact_match_excludes_despite_wildcard() {
		// The exact spec is the most specific match, so its q=0 wins
		// the resolution and excludes the offer outright.
		let specs = [
			AcceptSpec::new("text/html", 0.0),
			AcceptSpec::new("*/*", 0.8),
		];
		assert_eq!(negotiate_specs(&specs, &["text/html"]), None);
		assert_eq!(
			negotiate_specs(&specs, &["text/html", "text/plain"]),
			Some("text/plain")
		);
	}

	#[rstest]
	fn quality_tie_prefers_more_specific_match() {
		let specs = [
			AcceptSpec::new("image/*", 0.5),
			AcceptSpec::new("*/*", 0.5),
		];
		assert_eq!(
			negotiate_specs(&specs, &["text/plain", "image/png"]),
			Some("image/png")
		);
	}

	#[rstest]
	fn full_tie_prefers_server_order() {
		let specs = [AcceptSpec::new("*/*", 1.0)];
		assert_eq!(
			negotiate_specs(&specs, &["text/html", "text/plain"]),
			Some("text/html")
		);
	}

	#[rstest]
	fn empty_inputs_select_nothing() {
		let specs = [AcceptSpec::new("text/html", 1.0)];
		assert_eq!(negotiate_specs(&specs, &[] as &[&str]), None);
		assert_eq!(negotiate_specs(&[], &["text/html"]), None);
	}
}
