mod subscription_config;

pub use subscription_config::SubscriptionConfig;
