use std::sync::Arc;

use eyre::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rheum_bedrock::client::AssessmentClient;
use rheum_bedrock::converse::BedrockInvoker;
use rheum_server::config::{LogFormat, ServerConfig};
use rheum_server::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_env()?;
    init_tracing(config.log_format);

    let info = config.config_info();
    info!(
        bind_addr = %info.bind_addr,
        region = %info.region,
        model_id = %info.model_id,
        credential_type = %info.credential_type,
        profile_name = ?info.profile_name,
        access_key_hint = ?info.access_key_hint,
        request_timeout_secs = ?info.request_timeout_secs,
        "starting rheum-server"
    );

    let sdk_config = rheum_server::aws::build_aws_config(&config.region, &config.credentials).await;
    let invoker = BedrockInvoker::new(&sdk_config, config.model_id.clone());
    let state = AppState::new(
        AssessmentClient::new(Arc::new(invoker)),
        config.request_timeout,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, rheum_server::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Fmt => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
