pub mod consumer;
pub mod subscription;

pub use consumer::{
    AcknowledgmentChannel, AcknowledgmentMode, ConsumeOutcome, ConsumerCallbacks,
    DeliveryDispatcher, DispatcherChannelCallback, Envelope, ShutdownSignal,
};
pub use subscription::{Subscription, SubscriptionConfig};
