use drive_core::Notice;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

/// Console stand-in for the UI layer: prints the tilt label whenever it
/// changes and every operator notice as it arrives.
pub async fn run_display(
    mut labels: watch::Receiver<&'static str>,
    mut notices: mpsc::UnboundedReceiver<Notice>,
) {
    loop {
        tokio::select! {
            changed = labels.changed() => {
                if changed.is_err() {
                    // Pilot is gone; drain whatever notices are still in flight.
                    while let Some(notice) = notices.recv().await {
                        show(&notice);
                    }
                    return;
                }
                let label = *labels.borrow_and_update();
                info!(label, "tilt");
            }
            notice = notices.recv() => {
                match notice {
                    Some(notice) => show(&notice),
                    None => return,
                }
            }
        }
    }
}

fn show(notice: &Notice) {
    match notice {
        Notice::CommandFailed { .. } => warn!(%notice, "robot"),
        _ => info!(%notice, "robot"),
    }
}
