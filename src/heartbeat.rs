// Timed liveness loop for a held resource.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::client::Client;
use crate::resource::ResourceState;

/// Default cadence between liveness updates.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(60);

/// Keeps `name` marked busy until `max_beats` updates have been sent, or
/// forever when no bound is given.
///
/// Failed updates are logged and the loop stays on schedule. A missed beat
/// must not end the lease; reclaiming resources is the pool manager's call.
pub async fn run(client: &Client, name: &str, interval: Duration, max_beats: Option<u64>) {
    let mut beats: u64 = 0;
    loop {
        match client.update(name, ResourceState::Busy).await {
            Ok(()) => debug!("heartbeat {} for {} acknowledged", beats + 1, name),
            Err(err) => warn!("heartbeat {} for {} failed: {}", beats + 1, name, err),
        }
        beats += 1;
        if let Some(max) = max_beats {
            if beats >= max {
                info!("stopping heartbeat for {} after {} beats", name, beats);
                return;
            }
        }
        sleep(interval).await;
    }
}
