use super::SubscriptionConfig;
use crate::consumer::{
    callback::EnvelopeConsumer, AcknowledgmentMode, ConsumerCallbacks, DeliveryDispatcher,
    DispatcherChannelCallback, ShutdownSignal,
};
use amqprs::channel::{BasicCancelArguments, BasicConsumeArguments, Channel};
use std::sync::Arc;
use tokio::sync::Notify;

///
/// Single consumer of a single queue.
///
/// Broker acknowledges deliveries itself (`auto_ack`) exactly when
/// the dispatcher runs in [`AcknowledgmentMode::Auto`].
///
pub struct Subscription {
    channel: Channel,
    consumer_tag: String,
    dispatcher: DeliveryDispatcher,
    consumer_cancelled: Arc<Notify>,
}

impl Subscription {
    #[tracing::instrument(
        name = "Subscription",
        target = "rabbitmq_dispatcher::subscription",
        skip_all,
        fields(queue = %config.queue)
    )]
    pub async fn start(
        channel: Channel,
        config: SubscriptionConfig,
        consumer: Arc<dyn EnvelopeConsumer>,
    ) -> anyhow::Result<Self> {
        tracing::info!(
            mode = config.acknowledgment_mode.as_ref(),
            "starting subscription"
        );

        let dispatcher = match config.acknowledgment_mode {
            AcknowledgmentMode::Manual => {
                DeliveryDispatcher::acknowledged(consumer, Arc::new(channel.clone()))
            }
            AcknowledgmentMode::Auto => DeliveryDispatcher::unacknowledged(consumer),
        };

        tracing::info!("consuming");
        let basic_consume_args = BasicConsumeArguments::new(&config.queue, &config.consumer_tag)
            .auto_ack(config.acknowledgment_mode == AcknowledgmentMode::Auto)
            .exclusive(config.exclusive)
            .finish();
        let consumer_tag = channel
            .basic_consume(dispatcher.clone(), basic_consume_args)
            .await?;

        tracing::info!(consumer_tag = %consumer_tag, "registering channel callback");
        let consumer_cancelled = Arc::new(Notify::new());
        let channel_callback = DispatcherChannelCallback::new(
            consumer_tag.clone(),
            dispatcher.clone(),
            Arc::clone(&consumer_cancelled),
        );
        channel.register_callback(channel_callback).await?;

        dispatcher.handle_consume_ok(&consumer_tag).await;

        tracing::info!("subscription started");

        Ok(Self {
            channel,
            consumer_tag,
            dispatcher,
            consumer_cancelled,
        })
    }

    pub fn consumer_tag(&self) -> &str {
        &self.consumer_tag
    }

    pub fn acknowledgment_mode(&self) -> AcknowledgmentMode {
        self.dispatcher.acknowledgment_mode()
    }

    ///
    /// Completes when the broker cancels the consumer, e.g. after the queue was deleted
    ///
    pub async fn cancelled(&self) {
        self.consumer_cancelled.notified().await;
    }

    #[tracing::instrument(
        name = "Subscription",
        target = "rabbitmq_dispatcher::subscription",
        skip_all,
        fields(consumer_tag = %self.consumer_tag)
    )]
    pub async fn cancel(&self) -> anyhow::Result<()> {
        tracing::info!("cancelling consumer");

        let args = BasicCancelArguments::new(&self.consumer_tag);
        self.channel.basic_cancel(args).await?;
        self.dispatcher.handle_cancel_ok(&self.consumer_tag).await;

        tracing::info!("consumer cancelled");

        Ok(())
    }

    #[tracing::instrument(
        name = "Subscription",
        target = "rabbitmq_dispatcher::subscription",
        skip_all,
        fields(consumer_tag = %self.consumer_tag)
    )]
    pub async fn close(self) {
        if let Err(err) = self.cancel().await {
            tracing::warn!(%err, "cancelling consumer failed");
        }

        tracing::info!("closing channel");
        match self.channel.close().await {
            Ok(()) => tracing::info!("channel closed"),
            Err(err) => tracing::warn!(%err, "closing channel failed"),
        }

        let signal = ShutdownSignal::application_initiated(false);
        self.dispatcher
            .handle_shutdown_signal(&self.consumer_tag, &signal)
            .await;
    }
}
