pub mod command;
pub mod encoder;
pub mod link;
pub mod notice;
pub mod sample;
pub mod sink;

pub use command::{DriveCommand, SPEED_LIMIT};
pub use encoder::{encode, TILT_THRESHOLD};
pub use link::{LinkState, LinkTracker};
pub use notice::Notice;
pub use sample::{SampleParseError, TiltSample};
pub use sink::CommandSink;
