//! # hashpath
//!
//! A client-side URL router for WASM single-page applications.
//!
//! The router turns the browser address bar (hash or path based) into an
//! ordered sequence of decoded string segments, and provides the inverse:
//! composing segments and query parameters back into a URL, plus a
//! [`navigate`] command that mutates browser history and notifies listeners.
//!
//! There is no route table and no handler dispatch. The router produces
//! segments; matching them to application logic is the caller's `match`:
//!
//! ```
//! use hashpath::{RouteMode, segment};
//!
//! match segment("#/users/42", RouteMode::Hash).as_slice() {
//!     [] => { /* root */ }
//!     [users, id] if users == "users" => { let _ = id; }
//!     _ => { /* not found */ }
//! }
//! ```
//!
//! ## Segments
//!
//! Path segments are percent-decoded. A query string is preserved as a
//! distinguishable trailing segment that starts with `?` and stays encoded
//! until the caller decodes it with [`decode_query`]:
//!
//! ```
//! use hashpath::{RouteMode, segment};
//!
//! let segments = segment("#/search?q=whats%20up", RouteMode::Hash);
//! assert_eq!(segments, vec!["search", "?q=whats%20up"]);
//! ```
//!
//! ## Navigation
//!
//! [`navigate`] encodes its segments, pushes or replaces the current browser
//! history entry, and dispatches a synthetic navigation event so that a
//! running [`NavigationNotifier`] fires even though the browser emits no
//! native event for programmatic history mutations.

pub mod logging;
pub mod router;
#[cfg(not(target_arch = "wasm32"))]
pub mod testing;

pub use router::core::{Router, RouterConfig};
pub use router::encode::{encode_parts, encode_parts_under};
pub use router::error::RouterError;
pub use router::history::{
	HistoryMode, HistoryState, NAVIGATION_EVENT, current_hash, current_path, navigate, navigate_to,
};
pub use router::notifier::NavigationNotifier;
pub use router::query::{decode_query, encode_query};
pub use router::segments::{RouteMode, is_query_segment, segment, segments_under};
pub use router::typed::{FromSegment, parse_segment, query_flag, query_params};
