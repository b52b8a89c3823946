use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::error;

use minutemind::api::{AppState, handler};
use minutemind::core::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Error> {
    minutemind::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let state = AppState::from_config(&config);
    let state = &state;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        handler(state, event).await
    }))
    .await
}
