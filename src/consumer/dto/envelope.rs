use amqprs::{AmqpDeliveryTag, Deliver};

///
/// Routing information of a single delivery
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub delivery_tag: AmqpDeliveryTag,
    pub redelivered: bool,
    pub exchange: String,
    pub routing_key: String,
}

impl Envelope {
    pub fn new(
        delivery_tag: AmqpDeliveryTag,
        redelivered: bool,
        exchange: impl Into<String>,
        routing_key: impl Into<String>,
    ) -> Self {
        Self {
            delivery_tag,
            redelivered,
            exchange: exchange.into(),
            routing_key: routing_key.into(),
        }
    }
}

impl From<&Deliver> for Envelope {
    fn from(deliver: &Deliver) -> Self {
        Self {
            delivery_tag: deliver.delivery_tag(),
            redelivered: deliver.redelivered(),
            exchange: deliver.exchange().clone(),
            routing_key: deliver.routing_key().clone(),
        }
    }
}
