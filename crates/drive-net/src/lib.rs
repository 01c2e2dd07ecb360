pub mod http;
pub mod monitor;
pub mod transport;

pub use http::{build_client, FailureReason, HttpOutcome, RobotEndpoint, HTTP_TIMEOUT};
pub use monitor::{run_monitor, run_monitor_with_period, PROBE_PERIOD};
pub use transport::CommandSender;
