// crates/profile/src/infrastructure/events/mod.rs

mod account_event_consumer;

pub use account_event_consumer::{AccountEventConsumer, ConsumeOutcome};
