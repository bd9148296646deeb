//! URL segmentation and navigation.
//!
//! The two pure halves of the router live in [`segments`] (location string
//! to decoded segment sequence) and [`encode`] (segment sequence plus query
//! parameters back to a location string). [`history`] wraps the browser
//! History API and the synthetic navigation event, [`notifier`] turns
//! browser change events into segment callbacks, and [`core`] ties the
//! pieces together behind a configured [`core::Router`].

pub mod core;
pub mod encode;
pub mod error;
pub mod history;
pub mod notifier;
pub mod query;
pub mod segments;
pub mod typed;
