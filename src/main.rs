use status_service::config::{self, LogConfig, LogFormat};
use status_service::server;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},sqlx=warn,tower=warn", config.level)));

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if config.format == LogFormat::Json {
        builder.json().with_current_span(true).init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log);
    config.print_summary();

    server::run(config).await
}
