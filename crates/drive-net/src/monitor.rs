use std::time::Duration;

use drive_core::{LinkTracker, Notice};
use reqwest::Client;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::http::{outcome_of, RobotEndpoint};

/// Heartbeat period. Fixed: no backoff, no jitter, no retry budget.
pub const PROBE_PERIOD: Duration = Duration::from_millis(5000);

/// Probes the robot root path forever and emits a notice on every
/// reachability transition.
///
/// The first probe fires immediately. All probes run inside this single
/// task and each one is awaited before the next tick, so the
/// observe-then-notify step on the tracker is serialized without a lock.
/// The task is never stopped once started.
pub async fn run_monitor(
    client: Client,
    endpoint: RobotEndpoint,
    notices: mpsc::UnboundedSender<Notice>,
) {
    run_monitor_with_period(client, endpoint, notices, PROBE_PERIOD).await
}

pub async fn run_monitor_with_period(
    client: Client,
    endpoint: RobotEndpoint,
    notices: mpsc::UnboundedSender<Notice>,
    period: Duration,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut tracker = LinkTracker::new();

    loop {
        ticker.tick().await;
        let outcome = outcome_of(client.get(endpoint.probe_url())).await;
        if let Some(state) = tracker.observe(outcome.is_success()) {
            info!(endpoint = %endpoint, ?state, "link state changed");
            let _ = notices.send(Notice::LinkChanged(state));
        }
    }
}
