//! # Conneg
//!
//! Quality-weighted HTTP content negotiation: pick, from the
//! representations a server can produce, the one that best satisfies
//! the client's preference list in `Accept`, `Accept-Charset`,
//! `Accept-Encoding` or `Accept-Language`.
//!
//! ## Overview
//!
//! Two pieces, parser feeding selector:
//!
//! ```text
//! header values ──▶ parse_accept ──▶ [AcceptSpec] ──▶ negotiate_specs ──▶ best offer
//! ```
//!
//! - [`parse_accept`] / [`try_parse_accept`] turn raw header values
//!   into an ordered list of [`AcceptSpec`] entries.
//! - [`negotiate`] / [`negotiate_specs`] score server offers against
//!   those entries and return the single best offer, or `None` when no
//!   representation is acceptable (callers typically answer `406`).
//! - [`HeaderSource`] adapts any header representation to the one
//!   query negotiation needs: field name in, ordered raw values out.
//! - [`media_type_matches`] is a separate, case-sensitive whole-string
//!   membership test for concrete media types.
//!
//! Everything is a pure, synchronous function over immutable inputs;
//! there is no shared state and calls are freely concurrent.
//!
//! ## Examples
//!
//! ```
//! use http::HeaderMap;
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(
//!     "accept",
//!     "text/html, application/xhtml+xml, application/xml;q=0.9, */*;q=0.8"
//!         .parse()
//!         .unwrap(),
//! );
//!
//! let offers = [
//!     "application/example",
//!     "application/xml",
//!     "text/html",
//!     "application/xhtml+xml",
//! ];
//! assert_eq!(conneg::negotiate(&headers, "accept", &offers), Some("text/html"));
//!
//! // The `*/*;q=0.8` fallback covers types the client did not list…
//! let offers = ["application/msword"];
//! assert_eq!(conneg::negotiate(&headers, "accept", &offers), Some("application/msword"));
//!
//! // …but without it nothing is acceptable: respond 406.
//! let mut strict = HeaderMap::new();
//! strict.insert("accept", "text/html".parse().unwrap());
//! assert_eq!(conneg::negotiate(&strict, "accept", &offers), None);
//! ```

pub mod header;
pub mod media_type;
pub mod negotiate;
pub mod spec;

pub use header::HeaderSource;
pub use media_type::media_type_matches;
pub use negotiate::{negotiate, negotiate_specs};
pub use spec::{AcceptParseError, AcceptSpec, parse_accept, try_parse_accept};
