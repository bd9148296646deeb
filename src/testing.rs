//! In-memory browser shim for native targets.
//!
//! Outside of wasm32 there is no `window`, so the location accessors, the
//! history mutations, and the event subscriptions in
//! [`crate::router::history`] and [`crate::router::notifier`] operate on
//! this thread-local mock instead. Tests drive it directly: set a location,
//! dispatch a change event, and observe what a notifier callback received.
//!
//! Each test thread gets its own window; call [`reset`] at the start of a
//! test for a clean slate.
//!
//! # Example
//!
//! ```
//! use hashpath::testing;
//!
//! testing::reset();
//! testing::set_hash("#/users/42");
//! assert_eq!(testing::hash(), "#/users/42");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
	static WINDOW: RefCell<MockWindow> = RefCell::new(MockWindow::new());
}

struct MockWindow {
	/// Raw fragment including the leading `#`, or empty.
	hash: String,
	/// Pathname plus search string.
	path: String,
	/// History entries, most recent last.
	history: Vec<String>,
	listeners: Vec<Listener>,
	next_listener_id: u64,
	user_agent: String,
}

struct Listener {
	id: u64,
	event: String,
	callback: Rc<dyn Fn()>,
}

impl MockWindow {
	fn new() -> Self {
		Self {
			hash: String::new(),
			path: "/".to_string(),
			history: Vec::new(),
			listeners: Vec::new(),
			next_listener_id: 0,
			user_agent: String::new(),
		}
	}
}

/// Resets the current thread's mock window to its initial state.
pub fn reset() {
	WINDOW.with(|w| *w.borrow_mut() = MockWindow::new());
}

/// Sets the location fragment, e.g. `"#/users/42"`.
pub fn set_hash(hash: &str) {
	WINDOW.with(|w| w.borrow_mut().hash = hash.to_string());
}

/// Sets the location pathname plus search, e.g. `"/users/42?tab=posts"`.
pub fn set_path(path: &str) {
	WINDOW.with(|w| w.borrow_mut().path = path.to_string());
}

/// Sets the user agent string reported to the notifier.
pub fn set_user_agent(user_agent: &str) {
	WINDOW.with(|w| w.borrow_mut().user_agent = user_agent.to_string());
}

/// Returns the current location fragment.
pub fn hash() -> String {
	WINDOW.with(|w| w.borrow().hash.clone())
}

/// Returns the current location pathname plus search.
pub fn path() -> String {
	WINDOW.with(|w| w.borrow().path.clone())
}

/// Returns all history entries, most recent last.
pub fn history_entries() -> Vec<String> {
	WINDOW.with(|w| w.borrow().history.clone())
}

/// Returns the number of registered event listeners.
pub fn listener_count() -> usize {
	WINDOW.with(|w| w.borrow().listeners.len())
}

/// Fires all listeners registered for `event`, in registration order.
pub fn dispatch(event: &str) {
	// Clone the callbacks out first so they can re-read the window.
	let callbacks: Vec<Rc<dyn Fn()>> = WINDOW.with(|w| {
		w.borrow()
			.listeners
			.iter()
			.filter(|l| l.event == event)
			.map(|l| Rc::clone(&l.callback))
			.collect()
	});
	for callback in callbacks {
		callback();
	}
}

pub(crate) fn user_agent() -> String {
	WINDOW.with(|w| w.borrow().user_agent.clone())
}

/// Applies a history mutation: updates the location from `url` and pushes
/// or replaces the current history entry.
pub(crate) fn apply_url(url: &str, replace: bool) {
	WINDOW.with(|w| {
		let mut window = w.borrow_mut();
		if url.starts_with('#') {
			window.hash = url.to_string();
		} else {
			window.path = url.to_string();
			window.hash.clear();
		}
		if replace {
			match window.history.last_mut() {
				Some(last) => *last = url.to_string(),
				None => window.history.push(url.to_string()),
			}
		} else {
			window.history.push(url.to_string());
		}
	});
}

pub(crate) fn add_listener(event: &str, callback: Rc<dyn Fn()>) -> u64 {
	WINDOW.with(|w| {
		let mut window = w.borrow_mut();
		let id = window.next_listener_id;
		window.next_listener_id += 1;
		window.listeners.push(Listener {
			id,
			event: event.to_string(),
			callback,
		});
		id
	})
}

pub(crate) fn remove_listener(id: u64) {
	WINDOW.with(|w| w.borrow_mut().listeners.retain(|l| l.id != id));
}
