use breaktime::commands::Cli;
use breaktime::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    if is_debug_mode() {
        tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "breaktime=debug".into()))
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Cli::menu().await
}
