use super::{
    error::{AckError, CancelError},
    Envelope, ShutdownSignal,
};
use amqprs::BasicProperties;
use async_trait::async_trait;

///
/// Notifications sent by the broker client to a single consumer.
///
/// Lifecycle notifications are independent from deliveries. A delivery that
/// is already being handled completes normally even if cancel or shutdown
/// arrives in the meantime.
///
#[async_trait]
pub trait ConsumerCallbacks: Send + Sync {
    /// Subscription confirmed by the broker
    async fn handle_consume_ok(&self, consumer_tag: &str);

    /// Cancellation requested by the client confirmed by the broker
    async fn handle_cancel_ok(&self, consumer_tag: &str);

    /// Subscription cancelled by the broker, e.g. because the queue was deleted
    async fn handle_cancel(&self, consumer_tag: &str) -> Result<(), CancelError>;

    async fn handle_shutdown_signal(&self, consumer_tag: &str, signal: &ShutdownSignal);

    async fn handle_recover_ok(&self, consumer_tag: &str);

    async fn handle_delivery(
        &self,
        consumer_tag: &str,
        envelope: Envelope,
        properties: BasicProperties,
        body: Vec<u8>,
    ) -> Result<(), AckError>;
}
