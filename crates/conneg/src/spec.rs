//! Accept header parsing
//!
//! Parses the quality-weighted list grammar shared by `Accept`,
//! `Accept-Charset`, `Accept-Encoding` and `Accept-Language`:
//!
//! ```text
//! entry     := token *( ";" parameter )
//! parameter := "q" "=" qvalue
//! qvalue    := digit [ "." 0*3digit ]
//! ```
//!
//! Parsing is deliberately lenient where real clients are sloppy: a
//! quality such as `0.1.2` is read as `0.1` and the junk discarded,
//! while a quality that is not numeric at all poisons the rest of that
//! header value. A quality with more than three fractional digits is
//! the one hard error and invalidates the whole parse.

use thiserror::Error;

/// One client preference entry: an identifier and its quality weight.
///
/// The identifier keeps the exact spelling used by the client; it is
/// not lowercased at parse time. Matching against offers happens
/// case-insensitively later, in [`negotiate_specs`](crate::negotiate_specs).
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptSpec {
	/// Raw token as written by the client, e.g. `text/html` or `en-gb`.
	pub value: String,
	/// Preference weight in `[0.0, 1.0]`; `0.0` means explicitly unacceptable.
	pub quality: f32,
}

impl AcceptSpec {
	/// Creates a spec entry.
	///
	/// # Examples
	///
	/// ```
	/// use conneg::AcceptSpec;
	///
	/// let spec = AcceptSpec::new("text/html", 0.9);
	/// assert_eq!(spec.value, "text/html");
	/// assert_eq!(spec.quality, 0.9);
	/// ```
	pub fn new(value: impl Into<String>, quality: f32) -> Self {
		Self {
			value: value.into(),
			quality,
		}
	}
}

/// Hard parse failure for a header value list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcceptParseError {
	/// The quality grammar allows at most three fractional digits.
	#[error("quality value for `{value}` has more than three fractional digits")]
	QualityPrecision {
		/// Identifier of the entry carrying the overlong quality.
		value: String,
	},
}

/// Parses header values into an ordered spec list, swallowing hard errors.
///
/// This is the entry point the negotiator uses: a header that fails the
/// strict quality rule yields an empty list (and a debug log line), which
/// downstream turns into "no selection". Use [`try_parse_accept`] to
/// observe the failure instead.
///
/// # Examples
///
/// ```
/// use conneg::parse_accept;
///
/// let specs = parse_accept(["text/html, application/xml;q=0.9, */*;q=0.8"]);
/// assert_eq!(specs.len(), 3);
/// assert_eq!(specs[0].value, "text/html");
/// assert_eq!(specs[0].quality, 1.0);
/// assert_eq!(specs[1].quality, 0.9);
///
/// // Hard failure collapses to an empty list.
/// assert!(parse_accept(["text/html; q=0.1234"]).is_empty());
/// ```
pub fn parse_accept<I>(values: I) -> Vec<AcceptSpec>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	match try_parse_accept(values) {
		Ok(specs) => specs,
		Err(err) => {
			tracing::debug!("discarding unparseable accept header: {err}");
			Vec::new()
		}
	}
}

/// Parses header values into an ordered spec list.
///
/// `values` are the raw values of one header field, in the order the
/// caller received them; multiple values are treated as if
/// comma-concatenated. Output order matches appearance order, no
/// sorting happens here.
///
/// # Examples
///
/// ```
/// use conneg::{AcceptSpec, try_parse_accept};
///
/// let specs = try_parse_accept(["da, en-gb;q=0.8", "en;q=0.7"]).unwrap();
/// assert_eq!(specs, vec![
///     AcceptSpec::new("da", 1.0),
///     AcceptSpec::new("en-gb", 0.8),
///     AcceptSpec::new("en", 0.7),
/// ]);
///
/// // More than three fractional digits is the one hard error.
/// assert!(try_parse_accept(["text/html; q=0.1234"]).is_err());
/// ```
pub fn try_parse_accept<I>(values: I) -> Result<Vec<AcceptSpec>, AcceptParseError>
where
	I: IntoIterator,
	I::Item: AsRef<str>,
{
	let mut specs = Vec::new();
	for value in values {
		parse_header_value(value.as_ref(), &mut specs)?;
	}
	Ok(specs)
}

/// Parses one header value, appending entries to `specs` in order.
fn parse_header_value(value: &str, specs: &mut Vec<AcceptSpec>) -> Result<(), AcceptParseError> {
	'entries: for entry in value.split(',') {
		let mut segments = entry.split(';');
		let token = segments.next().unwrap_or("").trim();
		if token.is_empty() {
			continue;
		}

		let mut quality = 1.0;
		for segment in segments {
			let Some((name, raw)) = segment.split_once('=') else {
				continue;
			};
			if !name.trim().eq_ignore_ascii_case("q") {
				continue;
			}
			match parse_quality(raw.trim()) {
				QualityToken::Valid(q) => quality = q,
				// A quality that does not even start with a digit
				// poisons the remainder of this header value; entries
				// parsed so far are kept.
				QualityToken::Invalid => break 'entries,
				QualityToken::Overlong => {
					return Err(AcceptParseError::QualityPrecision {
						value: token.to_string(),
					});
				}
			}
		}

		specs.push(AcceptSpec::new(token, quality));
	}
	Ok(())
}

enum QualityToken {
	Valid(f32),
	/// Does not start with `0` or `1`.
	Invalid,
	/// More than three fractional digits.
	Overlong,
}

/// Parses a qvalue: `digit [ "." 0*3digit ]`, leading digit `0` or `1`.
///
/// Anything after the fractional digits is discarded silently, so
/// `0.1.2` reads as `0.1`.
fn parse_quality(raw: &str) -> QualityToken {
	let bytes = raw.as_bytes();
	let whole = match bytes.first() {
		Some(b'0') => 0.0f32,
		Some(b'1') => 1.0f32,
		_ => return QualityToken::Invalid,
	};

	let rest = &bytes[1..];
	if rest.first() != Some(&b'.') {
		return QualityToken::Valid(whole);
	}

	let mut numerator = 0u32;
	let mut denominator = 1u32;
	let mut digits = 0;
	for &byte in &rest[1..] {
		if !byte.is_ascii_digit() {
			break;
		}
		digits += 1;
		if digits > 3 {
			return QualityToken::Overlong;
		}
		numerator = numerator * 10 + u32::from(byte - b'0');
		denominator *= 10;
	}

	let quality = whole + numerator as f32 / denominator as f32;
	QualityToken::Valid(quality.clamp(0.0, 1.0))
}
