//!
//! Module that dispatches deliveries to application code
//! and acknowledges them with RabbitMQ
//!

pub mod callback;
pub mod error;

mod acknowledgment_channel;
mod async_consumer;
mod channel_callback;
mod consumer_callbacks;
mod delivery_dispatcher;
mod dto;

pub use acknowledgment_channel::AcknowledgmentChannel;
pub use channel_callback::DispatcherChannelCallback;
pub use consumer_callbacks::ConsumerCallbacks;
pub use delivery_dispatcher::DeliveryDispatcher;
pub use dto::{AcknowledgmentMode, ConsumeOutcome, Envelope, ShutdownSignal};

#[cfg(test)]
pub use acknowledgment_channel::MockAcknowledgmentChannel;
