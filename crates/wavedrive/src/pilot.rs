use drive_core::{encode, CommandSink, TiltSample};
use tokio::sync::{mpsc, watch};
use tracing::info;

/// Orientation stream handler.
///
/// One sample in, one encode, one label publish, one dispatch — no
/// batching and no throttling, so the request rate tracks the sensor rate.
/// Nothing here waits on I/O; the sink hands each command to its own
/// transport task. Returns when the sample source closes.
pub async fn run_pilot<S: CommandSink>(
    mut samples: mpsc::Receiver<TiltSample>,
    sink: S,
    labels: watch::Sender<&'static str>,
) {
    while let Some(sample) = samples.recv().await {
        let (command, label) = encode(sample.x, sample.y);
        let _ = labels.send(label); // display side may already be gone
        sink.dispatch(command);
    }
    info!("tilt stream closed, pilot stopping");
}
