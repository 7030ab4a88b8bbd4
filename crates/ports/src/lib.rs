//! Statwatch ports.
//!
//! Outbound interfaces the notification evaluators require. The evaluators
//! depend on these traits, never on concrete infrastructure; adapters live in
//! `statwatch-adapters` and mocks are available behind the `testing` feature.

pub mod outbound;
