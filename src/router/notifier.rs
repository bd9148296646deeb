//! Navigation change notification.
//!
//! [`NavigationNotifier`] subscribes to the three change events a routed
//! application cares about: the native `hashchange` and `popstate` events,
//! and the synthetic [`NAVIGATION_EVENT`] dispatched after programmatic
//! history mutations. On every event it re-reads the current location,
//! re-runs the segmenter, and forwards the segments to a single unified
//! callback.
//!
//! Subscriptions follow a scoped acquisition/release discipline: every
//! listener added by [`NavigationNotifier::start`] is removed by
//! [`NavigationNotifier::stop`] (and on drop), so callbacks never leak
//! across remounts.

use std::sync::Arc;

use super::history::{NAVIGATION_EVENT, location_segments};
use super::segments::RouteMode;

/// The unified change callback: receives the freshly segmented location.
pub type ChangeCallback = Arc<dyn Fn(Vec<String>)>;

/// Forwards location changes to a callback as decoded segment sequences.
pub struct NavigationNotifier {
	mode: RouteMode,
	base_path: Option<String>,
	on_changed: ChangeCallback,
	#[cfg(target_arch = "wasm32")]
	handles: Vec<ListenerHandle>,
	#[cfg(not(target_arch = "wasm32"))]
	handles: Vec<u64>,
}

#[cfg(target_arch = "wasm32")]
struct ListenerHandle {
	event: &'static str,
	closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

impl std::fmt::Debug for NavigationNotifier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("NavigationNotifier")
			.field("mode", &self.mode)
			.field("base_path", &self.base_path)
			.field("active", &self.is_active())
			.finish()
	}
}

impl NavigationNotifier {
	/// Creates a notifier for a mode and callback. No listeners are
	/// registered until [`start`](Self::start).
	pub fn new<F>(mode: RouteMode, on_changed: F) -> Self
	where
		F: Fn(Vec<String>) + 'static,
	{
		Self {
			mode,
			base_path: None,
			on_changed: Arc::new(on_changed),
			handles: Vec::new(),
		}
	}

	/// Sets the base path a path-mode notifier segments under.
	pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
		self.base_path = Some(base_path.into());
		self
	}

	/// Returns whether listeners are currently registered.
	pub fn is_active(&self) -> bool {
		!self.handles.is_empty()
	}

	/// The event kinds to subscribe to. The Trident family does not fire
	/// `popstate` reliably, so it is downgraded to hash changes only
	/// (compatibility shim, not a design principle).
	fn event_kinds() -> &'static [&'static str] {
		if legacy_hash_only() {
			&["hashchange", NAVIGATION_EVENT]
		} else {
			&["hashchange", "popstate", NAVIGATION_EVENT]
		}
	}
}

#[cfg(target_arch = "wasm32")]
impl NavigationNotifier {
	/// Subscribes to change events on the window. A second call while
	/// active is a no-op.
	pub fn start(&mut self) {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		if self.is_active() {
			return;
		}
		let Some(window) = web_sys::window() else {
			crate::warn_log!("navigation notifier: window is not available");
			return;
		};

		for &event in Self::event_kinds() {
			let callback = Arc::clone(&self.on_changed);
			let mode = self.mode;
			let base_path = self.base_path.clone();
			let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
				callback(location_segments(mode, base_path.as_deref()));
			}) as Box<dyn FnMut(web_sys::Event)>);

			match window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
			{
				Ok(()) => self.handles.push(ListenerHandle { event, closure }),
				Err(_) => {
					crate::warn_log!("navigation notifier: failed to subscribe to {}", event);
				}
			}
		}
		crate::info_log!("navigation notifier started ({} listeners)", self.handles.len());
	}

	/// Removes every listener added by [`start`](Self::start).
	pub fn stop(&mut self) {
		use wasm_bindgen::JsCast;

		let Some(window) = web_sys::window() else {
			self.handles.clear();
			return;
		};
		for handle in self.handles.drain(..) {
			let _ = window.remove_event_listener_with_callback(
				handle.event,
				handle.closure.as_ref().unchecked_ref(),
			);
		}
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl NavigationNotifier {
	/// Subscribes to change events on the mock window. A second call while
	/// active is a no-op.
	pub fn start(&mut self) {
		use std::rc::Rc;

		if self.is_active() {
			return;
		}
		for &event in Self::event_kinds() {
			let callback = Arc::clone(&self.on_changed);
			let mode = self.mode;
			let base_path = self.base_path.clone();
			let id = crate::testing::add_listener(
				event,
				Rc::new(move || callback(location_segments(mode, base_path.as_deref()))),
			);
			self.handles.push(id);
		}
		crate::info_log!("navigation notifier started ({} listeners)", self.handles.len());
	}

	/// Removes every listener added by [`start`](Self::start).
	pub fn stop(&mut self) {
		for id in self.handles.drain(..) {
			crate::testing::remove_listener(id);
		}
	}
}

impl Drop for NavigationNotifier {
	fn drop(&mut self) {
		self.stop();
	}
}

#[cfg(target_arch = "wasm32")]
fn legacy_hash_only() -> bool {
	web_sys::window()
		.and_then(|window| window.navigator().user_agent().ok())
		.map(|agent| agent.contains("Trident") || agent.contains("MSIE"))
		.unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn legacy_hash_only() -> bool {
	let agent = crate::testing::user_agent();
	agent.contains("Trident") || agent.contains("MSIE")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use std::cell::RefCell;
	use std::rc::Rc;

	use super::*;
	use crate::testing;

	fn collecting_notifier(mode: RouteMode) -> (NavigationNotifier, Rc<RefCell<Vec<Vec<String>>>>) {
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let notifier = NavigationNotifier::new(mode, move |segments| {
			sink.borrow_mut().push(segments);
		});
		(notifier, seen)
	}

	#[test]
	fn test_start_registers_three_listeners() {
		testing::reset();
		let (mut notifier, _seen) = collecting_notifier(RouteMode::Hash);

		notifier.start();
		assert!(notifier.is_active());
		assert_eq!(testing::listener_count(), 3);

		// Idempotent while active.
		notifier.start();
		assert_eq!(testing::listener_count(), 3);
	}

	#[test]
	fn test_stop_releases_all_listeners() {
		testing::reset();
		let (mut notifier, seen) = collecting_notifier(RouteMode::Hash);

		notifier.start();
		notifier.stop();
		assert!(!notifier.is_active());
		assert_eq!(testing::listener_count(), 0);

		testing::set_hash("#/users");
		testing::dispatch("hashchange");
		assert!(seen.borrow().is_empty());
	}

	#[test]
	fn test_drop_releases_listeners() {
		testing::reset();
		{
			let (mut notifier, _seen) = collecting_notifier(RouteMode::Hash);
			notifier.start();
			assert_eq!(testing::listener_count(), 3);
		}
		assert_eq!(testing::listener_count(), 0);
	}

	#[test]
	fn test_hash_change_forwards_segments() {
		testing::reset();
		let (mut notifier, seen) = collecting_notifier(RouteMode::Hash);

		notifier.start();
		testing::set_hash("#/home/users/1");
		testing::dispatch("hashchange");

		assert_eq!(*seen.borrow(), vec![vec!["home", "users", "1"]]);
	}

	#[test]
	fn test_path_mode_segments_under_base() {
		testing::reset();
		let seen = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&seen);
		let mut notifier = NavigationNotifier::new(RouteMode::Path, move |segments| {
			sink.borrow_mut().push(segments);
		})
		.with_base_path("/ace/");

		notifier.start();
		testing::set_path("/ace/home/users/1");
		testing::dispatch("popstate");

		assert_eq!(*seen.borrow(), vec![vec!["home", "users", "1"]]);
	}

	#[test]
	fn test_legacy_agent_skips_popstate() {
		testing::reset();
		testing::set_user_agent("Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko");
		let (mut notifier, seen) = collecting_notifier(RouteMode::Hash);

		notifier.start();
		assert_eq!(testing::listener_count(), 2);

		testing::set_hash("#/users");
		testing::dispatch("popstate");
		assert!(seen.borrow().is_empty());

		testing::dispatch("hashchange");
		assert_eq!(seen.borrow().len(), 1);
	}
}
