use crate::consumer::{dto::ConsumeOutcome, error::ConsumeError, Envelope};
use amqprs::BasicProperties;
use async_trait::async_trait;

///
/// Application logic executed for every delivery.
///
/// Deliveries of a single subscription are passed one at a time, so
/// awaiting here holds back the next delivery on the same channel.
/// Returning an error means the delivery should be tried again later.
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnvelopeConsumer: Send + Sync {
    async fn consume(
        &self,
        consumer_tag: &str,
        envelope: &Envelope,
        properties: &BasicProperties,
        body: &[u8],
    ) -> Result<ConsumeOutcome, ConsumeError>;
}
