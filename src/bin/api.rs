use lambda_runtime::{Error, LambdaEvent, service_fn};
use qaboard::AppState;
use qaboard::core::config::AppConfig;
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), Error> {
    qaboard::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let state = AppState::from_config(config).await;
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        qaboard::api::handler(state, event).await
    }))
    .await
}
