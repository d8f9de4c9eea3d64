use super::{error::CancelError, ConsumerCallbacks, ShutdownSignal};
use amqprs::{
    callbacks::ChannelCallback, channel::Channel, Ack, BasicProperties, Cancel, CloseChannel, Nack,
    Return,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Notify;

///
/// Forwards channel notifications of a single subscription to its [`ConsumerCallbacks`]
///
pub struct DispatcherChannelCallback<Callbacks> {
    consumer_tag: String,
    callbacks: Callbacks,
    consumer_cancelled_notify: Arc<Notify>,
}

impl<Callbacks> DispatcherChannelCallback<Callbacks> {
    pub fn new(
        consumer_tag: String,
        callbacks: Callbacks,
        consumer_cancelled_notify: Arc<Notify>,
    ) -> Self {
        Self {
            consumer_tag,
            callbacks,
            consumer_cancelled_notify,
        }
    }
}

#[async_trait]
impl<Callbacks> ChannelCallback for DispatcherChannelCallback<Callbacks>
where
    Callbacks: ConsumerCallbacks + 'static,
{
    #[tracing::instrument(
        name = "Dispatcher Channel Callback",
        target = "rabbitmq_dispatcher::channel_callback",
        skip_all
    )]
    async fn close(
        &mut self,
        _channel: &Channel,
        close: CloseChannel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::error!(
            code = close.reply_code(),
            text = close.reply_text(),
            "received close",
        );

        let signal = ShutdownSignal::from(&close);
        self.callbacks
            .handle_shutdown_signal(&self.consumer_tag, &signal)
            .await;

        Ok(())
    }

    #[tracing::instrument(
        name = "Dispatcher Channel Callback",
        target = "rabbitmq_dispatcher::channel_callback",
        skip_all
    )]
    async fn cancel(
        &mut self,
        _channel: &Channel,
        _cancel: Cancel,
    ) -> Result<(), amqprs::error::Error> {
        tracing::error!("received cancel");

        self.consumer_cancelled_notify.notify_one();

        match self.callbacks.handle_cancel(&self.consumer_tag).await {
            Ok(()) => Ok(()),
            Err(CancelError::Channel(err)) => Err(err),
            Err(CancelError::Io(err)) => Err(amqprs::error::Error::NetworkError(err.to_string())),
        }
    }

    async fn flow(
        &mut self,
        _channel: &Channel,
        active: bool,
    ) -> Result<bool, amqprs::error::Error> {
        // NOP this channel won't be used for publishing
        Ok(active)
    }

    async fn publish_ack(&mut self, _channel: &Channel, _ack: Ack) {
        // NOP this channel won't be used for publishing
    }

    async fn publish_nack(&mut self, _channel: &Channel, _nack: Nack) {
        // NOP this channel won't be used for publishing
    }

    async fn publish_return(
        &mut self,
        _channel: &Channel,
        _ret: Return,
        _basic_properties: BasicProperties,
        _content: Vec<u8>,
    ) {
        // NOP this channel won't be used for publishing
    }
}
