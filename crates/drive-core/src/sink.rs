use crate::command::DriveCommand;

/// Seam between the control loop and the network layer.
///
/// `dispatch` must return without waiting on I/O; a live sensor stream calls
/// it once per sample and must never stall on network latency. Delivery is
/// best-effort and unacknowledged.
pub trait CommandSink: Send + Sync {
    fn dispatch(&self, command: DriveCommand);
}
