use crate::consumer::AcknowledgmentMode;
use anyhow::anyhow;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionConfig {
    pub queue: String,

    /// Empty tag lets the broker generate one
    pub consumer_tag: String,

    pub acknowledgment_mode: AcknowledgmentMode,
    pub exclusive: bool,
}

impl SubscriptionConfig {
    pub fn new(queue: impl Into<String>, acknowledgment_mode: AcknowledgmentMode) -> Self {
        Self {
            queue: queue.into(),
            consumer_tag: String::new(),
            acknowledgment_mode,
            exclusive: false,
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        let queue = Self::env_var("RABBITMQ_DISPATCHER_QUEUE")?;
        let consumer_tag = std::env::var("RABBITMQ_DISPATCHER_CONSUMER_TAG").unwrap_or_default();
        let acknowledgment_mode = match std::env::var("RABBITMQ_DISPATCHER_ACKNOWLEDGMENT_MODE") {
            Ok(mode) => AcknowledgmentMode::from_str(&mode).map_err(|_| {
                anyhow!("RABBITMQ_DISPATCHER_ACKNOWLEDGMENT_MODE must be 'manual' or 'auto'")
            })?,
            Err(_) => AcknowledgmentMode::Manual,
        };
        let exclusive = match std::env::var("RABBITMQ_DISPATCHER_EXCLUSIVE") {
            Ok(exclusive) => exclusive.parse().map_err(|_| {
                anyhow!("RABBITMQ_DISPATCHER_EXCLUSIVE must be 'true' or 'false'")
            })?,
            Err(_) => false,
        };

        Ok(Self {
            queue,
            consumer_tag,
            acknowledgment_mode,
            exclusive,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "RABBITMQ_DISPATCHER_QUEUE",
        "RABBITMQ_DISPATCHER_CONSUMER_TAG",
        "RABBITMQ_DISPATCHER_ACKNOWLEDGMENT_MODE",
        "RABBITMQ_DISPATCHER_EXCLUSIVE",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn new_defaults() {
        let config = SubscriptionConfig::new("notifications", AcknowledgmentMode::Auto);

        assert_eq!(config.queue, "notifications");
        assert_eq!(config.consumer_tag, "");
        assert_eq!(config.acknowledgment_mode, AcknowledgmentMode::Auto);
        assert!(!config.exclusive);
    }

    #[test]
    #[serial]
    fn from_env_queue_missing() {
        clear_env();

        assert!(SubscriptionConfig::from_env().is_err());
    }

    #[test]
    #[serial]
    fn from_env_defaults() {
        clear_env();
        std::env::set_var("RABBITMQ_DISPATCHER_QUEUE", "confirmations");

        let config = SubscriptionConfig::from_env().unwrap();

        assert_eq!(
            config,
            SubscriptionConfig::new("confirmations", AcknowledgmentMode::Manual)
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_all_set() {
        clear_env();
        std::env::set_var("RABBITMQ_DISPATCHER_QUEUE", "confirmations");
        std::env::set_var("RABBITMQ_DISPATCHER_CONSUMER_TAG", "confirmations-consumer");
        std::env::set_var("RABBITMQ_DISPATCHER_ACKNOWLEDGMENT_MODE", "auto");
        std::env::set_var("RABBITMQ_DISPATCHER_EXCLUSIVE", "true");

        let config = SubscriptionConfig::from_env().unwrap();

        assert_eq!(config.queue, "confirmations");
        assert_eq!(config.consumer_tag, "confirmations-consumer");
        assert_eq!(config.acknowledgment_mode, AcknowledgmentMode::Auto);
        assert!(config.exclusive);
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_invalid_mode() {
        clear_env();
        std::env::set_var("RABBITMQ_DISPATCHER_QUEUE", "confirmations");
        std::env::set_var("RABBITMQ_DISPATCHER_ACKNOWLEDGMENT_MODE", "never");

        assert!(SubscriptionConfig::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_invalid_exclusive() {
        clear_env();
        std::env::set_var("RABBITMQ_DISPATCHER_QUEUE", "confirmations");
        std::env::set_var("RABBITMQ_DISPATCHER_EXCLUSIVE", "yes");

        assert!(SubscriptionConfig::from_env().is_err());
        clear_env();
    }
}
