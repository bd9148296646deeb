//! Browser history access and the synthetic navigation event.
//!
//! Wraps the environment-owned location state: read-only accessors over the
//! current hash and path, the pushState/replaceState mutations, and the
//! custom change event that makes programmatic navigation observable.
//! Browsers only fire `popstate` on back/forward and `hashchange` on hash
//! deltas, so a history mutation performed from code would otherwise go
//! unnoticed by listeners; [`navigate_to`] therefore dispatches
//! [`NAVIGATION_EVENT`] strictly after the mutation completes.
//!
//! On non-wasm32 targets all of this operates on the in-memory window in
//! [`crate::testing`], so navigation is exercised by plain `cargo test`.

use serde::{Deserialize, Serialize};

use super::encode::encode_parts;
use super::error::RouterError;
use super::segments::{RouteMode, segment, segments_under};

/// Event name for the synthetic programmatic-navigation event.
///
/// Dispatched on the window after every [`navigate_to`] history mutation
/// and subscribed to by [`crate::NavigationNotifier`]. The literal is an
/// opaque protocol constant; listeners match it by name only.
pub const NAVIGATION_EVENT: &str = "CUSTOM_NAVIGATION_EVENT";

/// Which browser history mutation a navigation performs.
///
/// Does not affect segmentation or encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HistoryMode {
	/// Push a new history entry.
	#[default]
	Push,
	/// Replace the current history entry.
	Replace,
}

/// State object stored with each history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
	/// The location string the entry was created with.
	pub location: String,
}

impl HistoryState {
	/// Creates a state object for a location.
	pub fn new(location: impl Into<String>) -> Self {
		Self {
			location: location.into(),
		}
	}
}

/// Composes the target location from `parts`, mutates browser history, and
/// dispatches the synthetic navigation event.
///
/// Each call produces exactly one listener invocation; multiple calls in
/// the same synchronous turn fire in call order, with no coalescing.
///
/// # Errors
///
/// Returns [`RouterError::NavigationFailed`] when the history mutation is
/// rejected and [`RouterError::EventDispatch`] when the event cannot be
/// delivered.
pub fn navigate<S: AsRef<str>>(
	parts: &[S],
	mode: RouteMode,
	history_mode: HistoryMode,
) -> Result<(), RouterError> {
	navigate_to(&encode_parts(parts, mode), history_mode)
}

/// Navigates to an already-encoded location string.
pub fn navigate_to(url: &str, history_mode: HistoryMode) -> Result<(), RouterError> {
	match history_mode {
		HistoryMode::Push => push_state(url)?,
		HistoryMode::Replace => replace_state(url)?,
	}
	crate::info_log!("navigated to {} ({:?})", url, history_mode);
	// The synthetic event fires strictly after the mutation, so listeners
	// reading the location observe the post-mutation value.
	dispatch_navigation_event()
}

/// Re-derives the current segments for a mode and optional base path.
pub(crate) fn location_segments(mode: RouteMode, base_path: Option<&str>) -> Vec<String> {
	match mode {
		RouteMode::Hash => segment(&current_hash(), RouteMode::Hash),
		RouteMode::Path => match base_path {
			Some(base) => segments_under(base, &current_path()),
			None => segment(&current_path(), RouteMode::Path),
		},
	}
}

#[cfg(target_arch = "wasm32")]
mod imp {
	use wasm_bindgen::JsValue;

	use super::{HistoryMode, HistoryState, NAVIGATION_EVENT, RouterError};

	/// Returns the current location fragment, including the leading `#`,
	/// or the empty string when there is none.
	pub fn current_hash() -> String {
		web_sys::window()
			.and_then(|window| window.location().hash().ok())
			.unwrap_or_default()
	}

	/// Returns the current pathname plus search string.
	pub fn current_path() -> String {
		match web_sys::window() {
			Some(window) => {
				let location = window.location();
				let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
				let search = location.search().unwrap_or_default();
				format!("{pathname}{search}")
			}
			None => "/".to_string(),
		}
	}

	/// Pushes a new history entry for `url`.
	pub fn push_state(url: &str) -> Result<(), RouterError> {
		apply_state(url, HistoryMode::Push)
	}

	/// Replaces the current history entry with `url`.
	pub fn replace_state(url: &str) -> Result<(), RouterError> {
		apply_state(url, HistoryMode::Replace)
	}

	fn apply_state(url: &str, mode: HistoryMode) -> Result<(), RouterError> {
		let window = window()?;
		let history = window
			.history()
			.map_err(|e| RouterError::NavigationFailed(js_error(&e)))?;

		let state = serde_json::to_string(&HistoryState::new(url))
			.map(|json| JsValue::from_str(&json))
			.unwrap_or(JsValue::NULL);

		let result = match mode {
			HistoryMode::Push => history.push_state_with_url(&state, "", Some(url)),
			HistoryMode::Replace => history.replace_state_with_url(&state, "", Some(url)),
		};
		result.map_err(|e| RouterError::NavigationFailed(js_error(&e)))
	}

	/// Dispatches the synthetic programmatic-navigation event on the window.
	pub fn dispatch_navigation_event() -> Result<(), RouterError> {
		let window = window().map_err(|e| RouterError::EventDispatch(e.to_string()))?;
		let event = web_sys::CustomEvent::new(NAVIGATION_EVENT)
			.map_err(|e| RouterError::EventDispatch(js_error(&e)))?;
		window
			.dispatch_event(&event)
			.map(|_| ())
			.map_err(|e| RouterError::EventDispatch(js_error(&e)))
	}

	fn window() -> Result<web_sys::Window, RouterError> {
		web_sys::window()
			.ok_or_else(|| RouterError::NavigationFailed("window is not available".to_string()))
	}

	fn js_error(value: &JsValue) -> String {
		value.as_string().unwrap_or_else(|| format!("{value:?}"))
	}
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
	use super::{NAVIGATION_EVENT, RouterError};
	use crate::testing;

	/// Returns the current location fragment from the mock window.
	pub fn current_hash() -> String {
		testing::hash()
	}

	/// Returns the current pathname plus search from the mock window.
	pub fn current_path() -> String {
		testing::path()
	}

	/// Pushes a new history entry for `url` on the mock window.
	pub fn push_state(url: &str) -> Result<(), RouterError> {
		testing::apply_url(url, false);
		Ok(())
	}

	/// Replaces the current history entry on the mock window.
	pub fn replace_state(url: &str) -> Result<(), RouterError> {
		testing::apply_url(url, true);
		Ok(())
	}

	/// Fires the synthetic navigation event on the mock window.
	pub fn dispatch_navigation_event() -> Result<(), RouterError> {
		testing::dispatch(NAVIGATION_EVENT);
		Ok(())
	}
}

pub use imp::{current_hash, current_path, dispatch_navigation_event, push_state, replace_state};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_history_state_serialization() {
		let state = HistoryState::new("#/users/42");
		let json = serde_json::to_string(&state).unwrap();
		let back: HistoryState = serde_json::from_str(&json).unwrap();
		assert_eq!(back, state);
	}

	#[cfg(not(target_arch = "wasm32"))]
	mod native {
		use super::super::*;
		use crate::testing;

		#[test]
		fn test_navigate_pushes_and_updates_location() {
			testing::reset();
			navigate(&["users", "42"], RouteMode::Hash, HistoryMode::Push).unwrap();

			assert_eq!(testing::hash(), "#/users/42");
			assert_eq!(testing::history_entries(), vec!["#/users/42"]);
		}

		#[test]
		fn test_navigate_replace_keeps_entry_count() {
			testing::reset();
			navigate(&["a"], RouteMode::Hash, HistoryMode::Push).unwrap();
			navigate(&["b"], RouteMode::Hash, HistoryMode::Replace).unwrap();

			assert_eq!(testing::hash(), "#/b");
			assert_eq!(testing::history_entries(), vec!["#/b"]);
		}

		#[test]
		fn test_location_segments_hash_mode() {
			testing::reset();
			testing::set_hash("#/home/users/1");
			assert_eq!(
				location_segments(RouteMode::Hash, None),
				vec!["home", "users", "1"]
			);
		}

		#[test]
		fn test_location_segments_path_mode_with_base() {
			testing::reset();
			testing::set_path("/ace/home/users/1");
			assert_eq!(
				location_segments(RouteMode::Path, Some("/ace/")),
				vec!["home", "users", "1"]
			);
		}
	}
}
