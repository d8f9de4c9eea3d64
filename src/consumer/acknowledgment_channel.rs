use super::error::AckError;
use amqprs::{
    channel::{BasicAckArguments, BasicNackArguments, Channel},
    AmqpDeliveryTag,
};
use async_trait::async_trait;

///
/// Handle used to acknowledge deliveries with the broker
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AcknowledgmentChannel: Send + Sync {
    async fn ack(&self, delivery_tag: AmqpDeliveryTag, multiple: bool) -> Result<(), AckError>;

    async fn nack(
        &self,
        delivery_tag: AmqpDeliveryTag,
        multiple: bool,
        requeue: bool,
    ) -> Result<(), AckError>;
}

#[async_trait]
impl AcknowledgmentChannel for Channel {
    async fn ack(&self, delivery_tag: AmqpDeliveryTag, multiple: bool) -> Result<(), AckError> {
        let args = BasicAckArguments::new(delivery_tag, multiple);
        self.basic_ack(args).await?;

        Ok(())
    }

    async fn nack(
        &self,
        delivery_tag: AmqpDeliveryTag,
        multiple: bool,
        requeue: bool,
    ) -> Result<(), AckError> {
        let args = BasicNackArguments::new(delivery_tag, multiple, requeue);
        self.basic_nack(args).await?;

        Ok(())
    }
}
