use amqprs::connection::{Connection, OpenConnectionArguments};
use tracing::level_filters::LevelFilter;

pub fn init_test_environment() {
    // read envs from .env file, CI may provide them directly
    let _ = dotenvy::dotenv();

    // setup tracing
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::TRACE)
        .with_target(false)
        .with_test_writer()
        .init();
}

pub async fn create_connection() -> Result<Connection, amqprs::error::Error> {
    let rabbitmq_connection_uri = std::env::var("TEST_RABBITMQ_CONNECTION_URI").unwrap();
    let args = OpenConnectionArguments::try_from(rabbitmq_connection_uri.as_str()).unwrap();

    Connection::open(&args).await
}
