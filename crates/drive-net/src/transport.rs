use drive_core::{CommandSink, DriveCommand, Notice};
use reqwest::Client;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::http::{outcome_of, HttpOutcome, RobotEndpoint};

/// Fire-and-forget command transport.
///
/// Each dispatch spawns its own task, so the caller pays only the spawn
/// cost and in-flight requests never delay one another. There is no
/// coalescing, no retry and no cancellation; commands issued in quick
/// succession may complete out of order, which the robot side tolerates.
pub struct CommandSender {
    client: Client,
    endpoint: RobotEndpoint,
    notices: mpsc::UnboundedSender<Notice>,
}

impl CommandSender {
    pub fn new(
        client: Client,
        endpoint: RobotEndpoint,
        notices: mpsc::UnboundedSender<Notice>,
    ) -> Self {
        Self {
            client,
            endpoint,
            notices,
        }
    }
}

impl CommandSink for CommandSender {
    /// Must be called from within a tokio runtime. Failures are reported
    /// as notices and never reach the caller.
    fn dispatch(&self, command: DriveCommand) {
        let payload = command.wire_json();
        let request = self
            .client
            .get(self.endpoint.command_url())
            .query(&[("json", payload.as_str())]);
        let notices = self.notices.clone();

        tokio::spawn(async move {
            match outcome_of(request).await {
                HttpOutcome::Success(body) => {
                    debug!(command = %payload, "command delivered");
                    let _ = notices.send(Notice::CommandSent { response: body });
                }
                HttpOutcome::Failure(reason) => {
                    warn!(command = %payload, %reason, "command dispatch failed");
                    let _ = notices.send(Notice::CommandFailed {
                        reason: reason.to_string(),
                    });
                }
            }
        });
    }
}
