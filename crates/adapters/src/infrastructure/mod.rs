pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod push;
pub mod subscriber_store;
pub mod testing;

pub use clock::SystemClock;
pub use config::AppConfig;
pub use push::TracingPush;
pub use subscriber_store::InMemorySubscriberStore;
