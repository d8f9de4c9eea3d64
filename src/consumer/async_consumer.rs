use super::{ConsumerCallbacks, DeliveryDispatcher, Envelope};
use amqprs::{channel::Channel, consumer::AsyncConsumer, BasicProperties, Deliver};
use async_trait::async_trait;

#[async_trait]
impl AsyncConsumer for DeliveryDispatcher {
    async fn consume(
        &mut self,
        _channel: &Channel,
        deliver: Deliver,
        basic_properties: BasicProperties,
        content: Vec<u8>,
    ) {
        let envelope = Envelope::from(&deliver);
        let delivery_tag = envelope.delivery_tag;

        // Channel is presumed broken, recovering it is up to the connection owner
        if let Err(err) = self
            .handle_delivery(deliver.consumer_tag(), envelope, basic_properties, content)
            .await
        {
            tracing::warn!(delivery_tag, %err, "failed to acknowledge delivery");
        }
    }
}
