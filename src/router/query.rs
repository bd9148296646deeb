//! Query-string codec.
//!
//! Encodes and decodes the ordered `(key, value)` pair list carried by a
//! query segment. Keys are not required to be unique; duplicates and order
//! are preserved so that encoding is deterministic and round-trips.

/// Encodes an ordered pair list into a `?`-prefixed query string.
///
/// Key and value are percent-encoded independently (space becomes `%20`,
/// reserved characters like `&`, `=`, and `?` become percent sequences).
/// An empty pair list yields the empty string, not a bare `?`. Integer
/// values are passed as their decimal rendering by the caller.
///
/// # Example
///
/// ```
/// use hashpath::encode_query;
///
/// assert_eq!(encode_query(&[("q", "whats up")]), "?q=whats%20up");
/// assert_eq!(encode_query(&[] as &[(&str, &str)]), "");
/// ```
pub fn encode_query<K: AsRef<str>, V: AsRef<str>>(pairs: &[(K, V)]) -> String {
	if pairs.is_empty() {
		return String::new();
	}
	let encoded = pairs
		.iter()
		.map(|(key, value)| {
			format!(
				"{}={}",
				urlencoding::encode(key.as_ref()),
				urlencoding::encode(value.as_ref())
			)
		})
		.collect::<Vec<_>>()
		.join("&");
	format!("?{encoded}")
}

/// Decodes a query string into its `(key, value)` pairs in appearance
/// order.
///
/// A leading `?` is tolerated. Percent sequences and `+`-as-space are
/// decoded; a value-less key like `pretty` decodes to `("pretty", "")`.
/// Pathological input yields `None` rather than an error.
///
/// # Example
///
/// ```
/// use hashpath::decode_query;
///
/// let pairs = decode_query("?id=1&limit=5").unwrap();
/// assert_eq!(pairs, vec![("id".into(), "1".into()), ("limit".into(), "5".into())]);
/// ```
pub fn decode_query(raw: &str) -> Option<Vec<(String, String)>> {
	let raw = raw.strip_prefix('?').unwrap_or(raw);
	serde_urlencoded::from_str::<Vec<(String, String)>>(raw).ok()
}
