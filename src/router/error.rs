//! Error types for navigation.
//!
//! Segmentation, encoding, and the query codec are infallible: malformed
//! input degrades to an empty segment list or `None`, never an error. Only
//! the environment-facing navigation path can fail.

/// Error type for navigation operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// The browser history mutation was rejected.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
	/// The synthetic navigation event could not be dispatched.
	#[error("Event dispatch failed: {0}")]
	EventDispatch(String),
}
