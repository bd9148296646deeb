//! URL composition.
//!
//! The inverse of [`crate::router::segments`] for the common case: an
//! ordered list of raw segment strings is escaped, joined, and prefixed
//! according to the route mode. Segments that already carry URL syntax
//! (a `?`, a leading `#`, or a leading `/`) pass through unchanged so that
//! pre-built query segments and absolute overrides compose naturally.

use super::segments::RouteMode;

/// Composes raw segments into a canonical location string.
///
/// Each segment is percent-encoded as a single URI component unless it
/// contains a `?` or starts with `#` or `/`, in which case the caller has
/// already formatted it and it passes through as-is. The joined result is
/// then normalized for the mode: hash-mode output always starts with `#/`,
/// path-mode output always starts with `/`.
///
/// # Example
///
/// ```
/// use hashpath::{RouteMode, encode_parts, encode_query};
///
/// assert_eq!(encode_parts(&["users"], RouteMode::Hash), "#/users");
/// assert_eq!(encode_parts(&[] as &[&str], RouteMode::Hash), "#/");
///
/// let query = encode_query(&[("q", "whats up")]);
/// assert_eq!(
///     encode_parts(&[format!("search{query}")], RouteMode::Hash),
///     "#/search?q=whats%20up"
/// );
/// ```
pub fn encode_parts<S: AsRef<str>>(parts: &[S], mode: RouteMode) -> String {
	let joined = join_encoded(parts);
	match mode {
		RouteMode::Hash => match joined.strip_prefix('#') {
			// Already "#/..." -> unchanged; "#..." -> reinsert the slash.
			Some(rest) if rest.starts_with('/') => joined,
			Some(rest) => format!("#/{rest}"),
			None if joined.starts_with('/') => format!("#{joined}"),
			None => format!("#/{joined}"),
		},
		RouteMode::Path => {
			if joined.starts_with('/') {
				joined
			} else {
				format!("/{joined}")
			}
		}
	}
}

/// Path-mode composition under a base path prefix.
///
/// Prepends the base path the application is mounted under, normalizing
/// slash duplication at the join point. An empty segment list yields the
/// base path alone (with a trailing slash).
///
/// # Example
///
/// ```
/// use hashpath::encode_parts_under;
///
/// assert_eq!(encode_parts_under("/ace/", &["users", "42"]), "/ace/users/42");
/// assert_eq!(encode_parts_under("/ace", &[] as &[&str]), "/ace/");
/// assert_eq!(encode_parts_under("/", &["users"]), "/users");
/// ```
pub fn encode_parts_under<S: AsRef<str>>(base_path: &str, parts: &[S]) -> String {
	let base = normalize_base(base_path);
	let joined = join_encoded(parts);
	if joined.is_empty() {
		format!("{base}/")
	} else if joined.starts_with('/') {
		format!("{base}{joined}")
	} else {
		format!("{base}/{joined}")
	}
}

/// Escapes and joins segments with `/`, without any mode prefix.
fn join_encoded<S: AsRef<str>>(parts: &[S]) -> String {
	parts
		.iter()
		.map(|part| encode_part(part.as_ref()))
		.collect::<Vec<_>>()
		.join("/")
}

/// Escapes one segment, passing through pre-formatted segments unchanged.
fn encode_part(part: &str) -> String {
	if part.contains('?') || part.starts_with('#') || part.starts_with('/') {
		part.to_string()
	} else {
		urlencoding::encode(part).into_owned()
	}
}

/// Normalizes a base path to a leading-slash, no-trailing-slash form.
/// The root base normalizes to the empty string.
fn normalize_base(base_path: &str) -> String {
	let base = base_path.trim().trim_matches('/');
	if base.is_empty() {
		String::new()
	} else {
		format!("/{base}")
	}
}
