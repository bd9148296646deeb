//! Typed segment extraction.
//!
//! Small predicates for pulling typed values out of segments inside the
//! caller's own `match` over the sequence shape. Failure to parse is "no
//! match" (`None`), letting the caller fall through to the next case; no
//! extraction ever panics or returns an error.
//!
//! ```
//! use hashpath::{RouteMode, parse_segment, query_params, segment};
//!
//! match segment("#/users/42?tab=posts", RouteMode::Hash).as_slice() {
//!     [users, id, query] if users == "users" => {
//!         let id: i64 = parse_segment(id).unwrap();
//!         let pairs = query_params(query).unwrap();
//!         let _ = (id, pairs);
//!     }
//!     _ => {}
//! }
//! ```

use super::query::decode_query;
use super::segments::is_query_segment;

/// Extracts a typed value from one segment string.
pub trait FromSegment: Sized {
	/// Parses the segment, returning `None` when it does not match.
	fn from_segment(segment: &str) -> Option<Self>;
}

/// Parses a segment as `T`, returning `None` on no match.
pub fn parse_segment<T: FromSegment>(segment: &str) -> Option<T> {
	T::from_segment(segment)
}

/// Decodes a query segment (`?`-prefixed) into its parameter pairs.
///
/// Returns `None` for path segments and for unparseable query strings.
pub fn query_params(segment: &str) -> Option<Vec<(String, String)>> {
	if is_query_segment(segment) {
		decode_query(segment)
	} else {
		None
	}
}

/// Interprets a query parameter value as a boolean flag.
///
/// `"1"` and `"true"` match true, `"0"` and `"false"` match false, and the
/// empty string matches true so that a bare `?pretty` flag reads as set.
pub fn query_flag(value: &str) -> Option<bool> {
	match value {
		"" | "1" | "true" => Some(true),
		"0" | "false" => Some(false),
		_ => None,
	}
}

macro_rules! impl_from_segment_via_from_str {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromSegment for $ty {
				fn from_segment(segment: &str) -> Option<Self> {
					segment.parse::<$ty>().ok()
				}
			}
		)*
	};
}

impl_from_segment_via_from_str! {
	i32, i64, u32, u64, f64,
}

impl FromSegment for String {
	fn from_segment(segment: &str) -> Option<Self> {
		Some(segment.to_string())
	}
}

// Booleans follow the query-flag convention rather than plain FromStr so
// that `?pretty` style bare flags extract as true.
impl FromSegment for bool {
	fn from_segment(segment: &str) -> Option<Self> {
		query_flag(segment)
	}
}

#[cfg(feature = "uuid")]
impl FromSegment for uuid::Uuid {
	fn from_segment(segment: &str) -> Option<Self> {
		segment.parse::<uuid::Uuid>().ok()
	}
}
