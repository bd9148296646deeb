//! URL segmentation.
//!
//! This module turns a raw location string, as produced by the browser, into
//! a canonical list of decoded segments. Query strings survive as a single
//! trailing segment that starts with `?` and stays percent-encoded; decoding
//! them is deferred to [`crate::router::query`] so that callers only pay for
//! it when they pattern-match the query segment.
//!
//! Malformed input never fails: every branch has a defensive fallback that
//! contributes no segments rather than returning an error.

use std::borrow::Cow;

/// Addressing scheme selection: whether routes live in the URL fragment or
/// in the path itself.
///
/// Immutable after router construction; passed by value everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RouteMode {
	/// Routes are carried in `window.location.hash`, e.g. `#/users/42`.
	#[default]
	Hash,
	/// Routes are carried in `window.location.pathname`, e.g. `/users/42`.
	Path,
}

/// Returns whether a segment is a query segment (`?`-prefixed, still
/// percent-encoded) rather than a decoded path segment.
pub fn is_query_segment(segment: &str) -> bool {
	segment.starts_with('?')
}

/// Parses a raw location string into an ordered sequence of decoded
/// segments.
///
/// In [`RouteMode::Hash`] the route lives after the first `#`; everything
/// before it is discarded. This makes a trailing bare hash truncate to
/// nothing: `"/some/path#"` segments to `[]` because the fragment is empty.
/// In [`RouteMode::Path`] the whole string is used and a `#` only acts as a
/// trailing delimiter on the token that carries it.
///
/// Empty and all-whitespace tokens are dropped, which absorbs leading,
/// trailing, and duplicate slashes. Path tokens are percent-decoded; a
/// token of the form `value?query` contributes a decoded path segment
/// followed by the still-encoded `?query` segment. A token with more than
/// one `?` contributes nothing.
///
/// # Example
///
/// ```
/// use hashpath::{RouteMode, segment};
///
/// assert_eq!(segment("#/home/users/1", RouteMode::Hash), vec!["home", "users", "1"]);
/// assert_eq!(segment("#/users?id=1", RouteMode::Hash), vec!["users", "?id=1"]);
/// assert!(segment("#/", RouteMode::Hash).is_empty());
/// ```
pub fn segment(location: &str, mode: RouteMode) -> Vec<String> {
	let route = match mode {
		// The route is the fragment: everything after the first '#'.
		RouteMode::Hash => match location.split_once('#') {
			Some((_, fragment)) => fragment,
			None => location,
		},
		RouteMode::Path => location,
	};

	let mut segments = Vec::new();
	for token in route.split('/') {
		if token.trim().is_empty() {
			continue;
		}
		// Stray hash characters attached to a path token delimit it.
		let token = token.trim_end_matches('#');
		push_token(token, &mut segments);
	}
	segments
}

/// Path-mode segmentation under a base path prefix.
///
/// The base path is the fixed mount path the application is served under;
/// if the location starts with it, the prefix is removed before segmenting.
/// Matching tolerates a missing or extra trailing slash on either side. A
/// location outside the base path is segmented unchanged.
///
/// # Example
///
/// ```
/// use hashpath::segments_under;
///
/// assert_eq!(segments_under("/ace/", "/ace/home/users/1"), vec!["home", "users", "1"]);
/// assert_eq!(segments_under("/", "/ace/some/path"), vec!["ace", "some", "path"]);
/// ```
pub fn segments_under(base_path: &str, location: &str) -> Vec<String> {
	let base = base_path.trim().trim_matches('/');
	if base.is_empty() {
		return segment(location, RouteMode::Path);
	}

	match strip_base(location.trim_start_matches('/'), base) {
		Some(rest) => segment(rest, RouteMode::Path),
		None => segment(location, RouteMode::Path),
	}
}

/// Strips `base` off the front of `location` when the match ends on a
/// segment boundary.
fn strip_base<'a>(location: &'a str, base: &str) -> Option<&'a str> {
	let rest = location.strip_prefix(base)?;
	if rest.is_empty() || rest.starts_with('/') || rest.starts_with('?') || rest.starts_with('#') {
		Some(rest)
	} else {
		None
	}
}

/// Splits one slash-delimited token on `?` and appends the segments it
/// contributes, if any.
fn push_token(token: &str, segments: &mut Vec<String>) {
	let parts: Vec<&str> = token.split('?').collect();
	match parts.as_slice() {
		[] => {}
		[path] => {
			if !path.is_empty() {
				segments.push(decode_token(path));
			}
		}
		[path, query] => {
			if !path.is_empty() {
				segments.push(decode_token(path));
			}
			// An empty query is dropped entirely, not emitted as "?".
			if !query.is_empty() {
				segments.push(format!("?{query}"));
			}
		}
		// More than one '?' in a token: contributes nothing.
		_ => {}
	}
}

/// Percent-decodes a path token, falling back to the raw token when the
/// decoded bytes are not valid UTF-8.
fn decode_token(token: &str) -> String {
	match urlencoding::decode(token) {
		Ok(Cow::Borrowed(s)) => s.to_string(),
		Ok(Cow::Owned(s)) => s,
		Err(_) => token.to_string(),
	}
}
