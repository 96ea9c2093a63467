use harvestlog::commands::Cli;
use harvestlog::libs::messages::macros::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenv::dotenv();
    init_tracing();
    Cli::menu().await
}
