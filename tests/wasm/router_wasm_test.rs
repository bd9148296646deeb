//! Browser-side navigation tests, run with `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use hashpath::{
	HistoryMode, NavigationNotifier, RouteMode, navigate, navigate_to, segment,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn current_hash() -> String {
	web_sys::window().unwrap().location().hash().unwrap()
}

#[wasm_bindgen_test]
fn test_navigate_updates_location_hash() {
	navigate(&["users", "42"], RouteMode::Hash, HistoryMode::Push).unwrap();
	assert_eq!(current_hash(), "#/users/42");
	assert_eq!(segment(&current_hash(), RouteMode::Hash), vec!["users", "42"]);
}

#[wasm_bindgen_test]
fn test_navigate_dispatches_synthetic_event() {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);

	let mut notifier = NavigationNotifier::new(RouteMode::Hash, move |segments| {
		sink.borrow_mut().push(segments);
	});
	notifier.start();
	assert!(notifier.is_active());

	// CustomEvent dispatch is synchronous, so the callback has already run.
	navigate(&["home", "users", "1"], RouteMode::Hash, HistoryMode::Push).unwrap();
	assert_eq!(
		*seen.borrow(),
		vec![vec![
			"home".to_string(),
			"users".to_string(),
			"1".to_string()
		]]
	);

	notifier.stop();
}

#[wasm_bindgen_test]
fn test_stopped_notifier_is_silent() {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);

	let mut notifier = NavigationNotifier::new(RouteMode::Hash, move |segments| {
		sink.borrow_mut().push(segments);
	});
	notifier.start();
	notifier.stop();
	assert!(!notifier.is_active());

	navigate(&["ignored"], RouteMode::Hash, HistoryMode::Push).unwrap();
	assert!(seen.borrow().is_empty());
}

#[wasm_bindgen_test]
fn test_replace_keeps_history_length() {
	let history = web_sys::window().unwrap().history().unwrap();
	navigate_to("#/a", HistoryMode::Push).unwrap();
	let length = history.length().unwrap();

	navigate_to("#/b", HistoryMode::Replace).unwrap();
	assert_eq!(history.length().unwrap(), length);
	assert_eq!(current_hash(), "#/b");
}

#[wasm_bindgen_test]
fn test_encoded_segment_round_trips_through_location() {
	navigate(&["hello world"], RouteMode::Hash, HistoryMode::Push).unwrap();
	assert_eq!(current_hash(), "#/hello%20world");
	assert_eq!(
		segment(&current_hash(), RouteMode::Hash),
		vec!["hello world"]
	);
}
