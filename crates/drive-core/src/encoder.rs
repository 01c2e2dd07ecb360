use crate::command::DriveCommand;

/// Tilt magnitude, in m/s² of gravity component, beyond which an axis is
/// considered deflected. Fixed by the controller tuning, not configurable.
pub const TILT_THRESHOLD: f32 = 3.0;

/// Maps one accelerometer reading to a drive command and the operator label.
///
/// Pure and total: every (x, y), including NaN, falls through to exactly one
/// bucket. The rules are evaluated in a fixed order and the first match wins;
/// the four diagonal buckets deliberately hold one wheel at 0 rather than a
/// differential value, which the deployed controllers expect bit-for-bit.
pub fn encode(x: f32, y: f32) -> (DriveCommand, &'static str) {
    let t = TILT_THRESHOLD;
    let centered = -t..=t;

    if y < -t && centered.contains(&x) {
        (DriveCommand::new(255, 255), "Moving Forward")
    } else if y > t && centered.contains(&x) {
        (DriveCommand::new(-255, -255), "Moving Backward")
    } else if x < -t && centered.contains(&y) {
        (DriveCommand::new(255, -255), "Rotating Right")
    } else if x > t && centered.contains(&y) {
        (DriveCommand::new(-255, 255), "Rotating Left")
    } else if y < -t && x > t {
        (DriveCommand::new(0, 255), "Forward-Left")
    } else if y < -t && x < -t {
        (DriveCommand::new(255, 0), "Forward-Right")
    } else if y > t && x > t {
        (DriveCommand::new(0, -255), "Backward-Left")
    } else if y > t && x < -t {
        (DriveCommand::new(-255, 0), "Backward-Right")
    } else {
        (DriveCommand::STOP, "Flat - Stopped")
    }
}
