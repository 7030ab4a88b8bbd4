//! Statwatch adapters.
//!
//! Concrete implementations of the outbound ports plus the process-level
//! plumbing (env config, tracing setup). The real push transport and the
//! real record store live outside this repository; what ships here is the
//! system clock, an in-memory store with the same merge-update contract,
//! a log-only push transport, and test doubles.

pub mod infrastructure;
