//! Outbound ports - interfaces the evaluators require from collaborators.
//!
//! Three boundaries: push delivery, the subscriber record store, and time.
//! All are opaque to the core; the evaluators only emit requests through
//! them and await completion.

mod clock_port;
mod push_port;
mod subscriber_store_port;

// Clock port - time abstraction for deterministic testing
pub use clock_port::ClockPort;
#[cfg(any(test, feature = "testing"))]
pub use clock_port::MockClockPort;

// Push port - opaque "send notification" capability
pub use push_port::{DeliveryOptions, PushMessage, PushPort, PushPriority};
#[cfg(any(test, feature = "testing"))]
pub use push_port::MockPushPort;

// Subscriber store port - merge-update persistence for subscriber records
pub use subscriber_store_port::{SubscriberPatch, SubscriberStorePort};
#[cfg(any(test, feature = "testing"))]
pub use subscriber_store_port::MockSubscriberStorePort;
