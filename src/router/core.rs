//! Router facade.
//!
//! Ties the pure segmentation/encoding halves to the navigation plumbing
//! behind one configured value. Configuration is a plain struct with named
//! fields and a builder; mode and base path are immutable once the router
//! is constructed.

use super::encode::{encode_parts, encode_parts_under};
use super::error::RouterError;
use super::history::{HistoryMode, location_segments, navigate_to};
use super::notifier::{ChangeCallback, NavigationNotifier};
use super::segments::RouteMode;
use std::sync::Arc;

/// Router configuration.
///
/// # Example
///
/// ```
/// use hashpath::{Router, RouterConfig};
///
/// let router = Router::new(
///     RouterConfig::hash().on_changed(|segments| {
///         let _ = segments;
///     }),
/// );
/// assert_eq!(router.href(&["users", "42"]), "#/users/42");
/// ```
#[derive(Clone, Default)]
pub struct RouterConfig {
	mode: RouteMode,
	base_path: Option<String>,
	on_changed: Option<ChangeCallback>,
}

impl std::fmt::Debug for RouterConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouterConfig")
			.field("mode", &self.mode)
			.field("base_path", &self.base_path)
			.field("has_on_changed", &self.on_changed.is_some())
			.finish()
	}
}

impl RouterConfig {
	/// Configuration for a hash router (`#/...`).
	pub fn hash() -> Self {
		Self {
			mode: RouteMode::Hash,
			..Self::default()
		}
	}

	/// Configuration for a path router (`/...`).
	pub fn path() -> Self {
		Self {
			mode: RouteMode::Path,
			..Self::default()
		}
	}

	/// Sets the base path a path router is mounted under. Ignored in hash
	/// mode.
	pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
		self.base_path = Some(base_path.into());
		self
	}

	/// Sets the callback invoked with the fresh segment sequence on every
	/// location change.
	pub fn on_changed<F>(mut self, on_changed: F) -> Self
	where
		F: Fn(Vec<String>) + 'static,
	{
		self.on_changed = Some(Arc::new(on_changed));
		self
	}
}

/// A configured client-side router.
pub struct Router {
	mode: RouteMode,
	base_path: Option<String>,
	on_changed: Option<ChangeCallback>,
	notifier: Option<NavigationNotifier>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("mode", &self.mode)
			.field("base_path", &self.base_path)
			.field("listening", &self.is_listening())
			.finish()
	}
}

impl Router {
	/// Creates a router from its configuration. No listeners are
	/// registered until [`start`](Self::start).
	pub fn new(config: RouterConfig) -> Self {
		let base_path = match config.mode {
			RouteMode::Path => config.base_path,
			RouteMode::Hash => None,
		};
		Self {
			mode: config.mode,
			base_path,
			on_changed: config.on_changed,
			notifier: None,
		}
	}

	/// Returns the route mode.
	pub fn mode(&self) -> RouteMode {
		self.mode
	}

	/// Returns the base path, if any.
	pub fn base_path(&self) -> Option<&str> {
		self.base_path.as_deref()
	}

	/// Reads the current location and segments it.
	pub fn current_segments(&self) -> Vec<String> {
		location_segments(self.mode, self.base_path.as_deref())
	}

	/// Composes a location string for the given segments, honoring mode
	/// and base path.
	pub fn href<S: AsRef<str>>(&self, parts: &[S]) -> String {
		match &self.base_path {
			Some(base) => encode_parts_under(base, parts),
			None => encode_parts(parts, self.mode),
		}
	}

	/// Navigates to the given segments: encodes them, mutates browser
	/// history per `history_mode`, and dispatches the synthetic navigation
	/// event so listeners fire.
	pub fn navigate<S: AsRef<str>>(
		&self,
		parts: &[S],
		history_mode: HistoryMode,
	) -> Result<(), RouterError> {
		navigate_to(&self.href(parts), history_mode)
	}

	/// Starts forwarding location changes to the configured `on_changed`
	/// callback. Without a callback this is a no-op.
	pub fn start(&mut self) {
		if self.is_listening() {
			return;
		}
		let Some(callback) = self.on_changed.clone() else {
			crate::warn_log!("router: start() called without an on_changed callback");
			return;
		};

		let mut notifier =
			NavigationNotifier::new(self.mode, move |segments| callback(segments));
		if let Some(base) = &self.base_path {
			notifier = notifier.with_base_path(base.clone());
		}
		notifier.start();
		self.notifier = Some(notifier);
	}

	/// Stops forwarding changes and releases every listener added by
	/// [`start`](Self::start).
	pub fn stop(&mut self) {
		if let Some(mut notifier) = self.notifier.take() {
			notifier.stop();
		}
	}

	/// Returns whether change listeners are currently registered.
	pub fn is_listening(&self) -> bool {
		self.notifier.as_ref().is_some_and(NavigationNotifier::is_active)
	}
}

impl Drop for Router {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_hash_config_ignores_base_path() {
		let router = Router::new(RouterConfig::hash().base_path("/ace/"));
		assert_eq!(router.base_path(), None);
		assert_eq!(router.href(&["users"]), "#/users");
	}

	#[test]
	fn test_path_config_href_honors_base_path() {
		let router = Router::new(RouterConfig::path().base_path("/ace/"));
		assert_eq!(router.href(&["users", "42"]), "/ace/users/42");
		assert_eq!(router.href(&[] as &[&str]), "/ace/");
	}

	#[test]
	fn test_start_without_callback_is_noop() {
		let mut router = Router::new(RouterConfig::hash());
		router.start();
		assert!(!router.is_listening());
	}

	#[cfg(not(target_arch = "wasm32"))]
	mod native {
		use std::cell::RefCell;
		use std::rc::Rc;

		use super::super::*;
		use crate::testing;

		#[test]
		fn test_navigate_notifies_with_post_mutation_segments() {
			testing::reset();
			let seen = Rc::new(RefCell::new(Vec::new()));
			let sink = Rc::clone(&seen);

			let mut router = Router::new(RouterConfig::hash().on_changed(move |segments| {
				sink.borrow_mut().push(segments);
			}));
			router.start();
			assert!(router.is_listening());

			router.navigate(&["users", "42"], HistoryMode::Push).unwrap();
			assert_eq!(*seen.borrow(), vec![vec!["users", "42"]]);
			assert_eq!(router.current_segments(), vec!["users", "42"]);
		}

		#[test]
		fn test_each_navigate_fires_exactly_once_in_order() {
			testing::reset();
			let seen = Rc::new(RefCell::new(Vec::new()));
			let sink = Rc::clone(&seen);

			let mut router = Router::new(RouterConfig::hash().on_changed(move |segments| {
				sink.borrow_mut().push(segments);
			}));
			router.start();

			router.navigate(&["a"], HistoryMode::Push).unwrap();
			router.navigate(&["b"], HistoryMode::Push).unwrap();
			assert_eq!(*seen.borrow(), vec![vec!["a"], vec!["b"]]);
		}

		#[test]
		fn test_stop_releases_listeners() {
			testing::reset();
			let mut router =
				Router::new(RouterConfig::hash().on_changed(|_segments| {}));
			router.start();
			assert_eq!(testing::listener_count(), 3);

			router.stop();
			assert!(!router.is_listening());
			assert_eq!(testing::listener_count(), 0);
		}

		#[test]
		fn test_path_router_with_base_end_to_end() {
			testing::reset();
			let seen = Rc::new(RefCell::new(Vec::new()));
			let sink = Rc::clone(&seen);

			let mut router = Router::new(
				RouterConfig::path()
					.base_path("/ace/")
					.on_changed(move |segments| sink.borrow_mut().push(segments)),
			);
			router.start();

			router.navigate(&["home", "users", "1"], HistoryMode::Push).unwrap();
			assert_eq!(testing::path(), "/ace/home/users/1");
			assert_eq!(*seen.borrow(), vec![vec!["home", "users", "1"]]);
		}
	}
}
