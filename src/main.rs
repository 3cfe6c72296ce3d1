//! Game Server Binary
//!
//! Hosts Rock-Paper-Scissors sessions against an adaptive AI opponent
//! over a JSON-over-HTTP API.

use suitbot::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    hosting::Server::run().await?;
    Ok(())
}
