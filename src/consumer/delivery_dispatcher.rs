use super::{
    callback::EnvelopeConsumer,
    error::{AckError, CancelError},
    AcknowledgmentChannel, AcknowledgmentMode, ConsumeOutcome, ConsumerCallbacks, Envelope,
    ShutdownSignal,
};
use amqprs::BasicProperties;
use async_trait::async_trait;
use std::sync::Arc;

///
/// Passes deliveries to [`EnvelopeConsumer`] and turns its outcome into ack/nack.
///
/// Without acknowledgment channel the broker is expected to acknowledge
/// deliveries itself (`auto_ack`), so the dispatcher never talks back to it.
/// With acknowledgment channel every delivery is answered exactly once:
///
/// | outcome                 | action                        |
/// |-------------------------|-------------------------------|
/// | `Accepted`              | `ack(tag, false)`             |
/// | `RejectedDiscard`       | `nack(tag, false, false)`     |
/// | `RejectedRequeue`/error | `nack(tag, false, true)`      |
///
#[derive(Clone)]
pub struct DeliveryDispatcher {
    consumer: Arc<dyn EnvelopeConsumer>,
    acknowledgment_channel: Option<Arc<dyn AcknowledgmentChannel>>,
}

impl DeliveryDispatcher {
    pub fn unacknowledged(consumer: Arc<dyn EnvelopeConsumer>) -> Self {
        Self {
            consumer,
            acknowledgment_channel: None,
        }
    }

    pub fn acknowledged(
        consumer: Arc<dyn EnvelopeConsumer>,
        acknowledgment_channel: Arc<dyn AcknowledgmentChannel>,
    ) -> Self {
        Self {
            consumer,
            acknowledgment_channel: Some(acknowledgment_channel),
        }
    }

    pub fn acknowledgment_mode(&self) -> AcknowledgmentMode {
        match self.acknowledgment_channel {
            Some(_) => AcknowledgmentMode::Manual,
            None => AcknowledgmentMode::Auto,
        }
    }

    async fn acknowledge(
        channel: &dyn AcknowledgmentChannel,
        delivery_tag: u64,
        outcome: ConsumeOutcome,
    ) -> Result<(), AckError> {
        match outcome {
            ConsumeOutcome::Accepted => {
                tracing::trace!("sending ack");
                channel.ack(delivery_tag, false).await?;
                tracing::trace!("ack sent");
            }
            ConsumeOutcome::RejectedRequeue => {
                tracing::trace!(requeue = true, "sending nack");
                channel.nack(delivery_tag, false, true).await?;
                tracing::trace!(requeue = true, "nack sent");
            }
            ConsumeOutcome::RejectedDiscard => {
                tracing::trace!(requeue = false, "sending nack");
                channel.nack(delivery_tag, false, false).await?;
                tracing::trace!(requeue = false, "nack sent");
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ConsumerCallbacks for DeliveryDispatcher {
    #[tracing::instrument(
        name = "Delivery Dispatcher",
        target = "rabbitmq_dispatcher::consumer",
        skip_all
    )]
    async fn handle_consume_ok(&self, consumer_tag: &str) {
        tracing::info!(consumer_tag, "consume ok");
    }

    #[tracing::instrument(
        name = "Delivery Dispatcher",
        target = "rabbitmq_dispatcher::consumer",
        skip_all
    )]
    async fn handle_cancel_ok(&self, consumer_tag: &str) {
        tracing::info!(consumer_tag, "cancel ok");
    }

    #[tracing::instrument(
        name = "Delivery Dispatcher",
        target = "rabbitmq_dispatcher::consumer",
        skip_all
    )]
    async fn handle_cancel(&self, consumer_tag: &str) -> Result<(), CancelError> {
        tracing::warn!(consumer_tag, "consumer cancelled by broker");

        Ok(())
    }

    #[tracing::instrument(
        name = "Delivery Dispatcher",
        target = "rabbitmq_dispatcher::consumer",
        skip_all
    )]
    async fn handle_shutdown_signal(&self, consumer_tag: &str, signal: &ShutdownSignal) {
        tracing::warn!(
            consumer_tag,
            hard_error = signal.hard_error,
            initiated_by_application = signal.initiated_by_application,
            code = signal.reply_code,
            text = %signal.reply_text,
            cause = ?signal.cause,
            "received shutdown signal",
        );
    }

    #[tracing::instrument(
        name = "Delivery Dispatcher",
        target = "rabbitmq_dispatcher::consumer",
        skip_all
    )]
    async fn handle_recover_ok(&self, consumer_tag: &str) {
        tracing::info!(consumer_tag, "recover ok");
    }

    #[tracing::instrument(
        name = "Delivery Dispatcher",
        target = "rabbitmq_dispatcher::consumer",
        skip_all,
        fields(
            consumer_tag = consumer_tag,
            delivery_tag = envelope.delivery_tag,
        )
    )]
    async fn handle_delivery(
        &self,
        consumer_tag: &str,
        envelope: Envelope,
        properties: BasicProperties,
        body: Vec<u8>,
    ) -> Result<(), AckError> {
        tracing::info!(redelivered = envelope.redelivered, "received delivery");

        let result = self
            .consumer
            .consume(consumer_tag, &envelope, &properties, &body)
            .await;

        let Some(channel) = &self.acknowledgment_channel else {
            // Broker has already acknowledged the delivery, there is nobody to report to
            match result {
                Ok(outcome) => tracing::info!(?outcome, "delivery processed"),
                Err(err) => tracing::warn!(%err, "failed to consume delivery"),
            }
            return Ok(());
        };

        let outcome = match result {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::warn!(%err, "failed to consume delivery");
                ConsumeOutcome::RejectedRequeue
            }
        };

        Self::acknowledge(channel.as_ref(), envelope.delivery_tag, outcome).await?;

        tracing::info!(?outcome, "delivery processed");

        Ok(())
    }
}
