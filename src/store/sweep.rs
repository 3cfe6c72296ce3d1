use super::Lobby;
use std::sync::Arc;
use std::time::Duration;

/// Spawns the idle-expiry loop for a lobby.
/// The only background activity in the process; everything else is
/// request-triggered.
pub fn spawn_sweeper(lobby: Arc<Lobby>) {
    tokio::spawn(async move {
        let mut clock = tokio::time::interval(period());
        clock.tick().await; // first tick fires immediately
        loop {
            clock.tick().await;
            lobby.sweep(ttl()).await;
        }
    });
}

/// How long a session may sit idle before the sweep reclaims it.
fn ttl() -> Duration {
    std::env::var("IDLE_TTL_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(60 * 60 * 24))
}

fn period() -> Duration {
    std::env::var("SWEEP_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(60 * 10))
}
