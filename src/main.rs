use anyhow::Result;
use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        error!("Backend exited with error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    beneficiaries_api::run().await
}
