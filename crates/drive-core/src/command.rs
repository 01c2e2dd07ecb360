use serde::Serialize;

/// Maximum wheel speed magnitude accepted by the controller.
pub const SPEED_LIMIT: i16 = 255;

/// Differential-drive speed pair for one command cycle.
///
/// Immutable once constructed; speeds are clamped into
/// `[-SPEED_LIMIT, SPEED_LIMIT]` at construction so a command can never
/// carry an out-of-range value onto the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriveCommand {
    left: i16,
    right: i16,
}

/// Wire shape expected by the controller's `/js` handler. Field order is
/// part of the protocol and is compatibility-tested.
#[derive(Serialize)]
struct WireCommand {
    #[serde(rename = "T")]
    kind: u8,
    #[serde(rename = "L")]
    left: i16,
    #[serde(rename = "R")]
    right: i16,
}

impl DriveCommand {
    pub const STOP: DriveCommand = DriveCommand { left: 0, right: 0 };

    pub fn new(left: i16, right: i16) -> Self {
        Self {
            left: left.clamp(-SPEED_LIMIT, SPEED_LIMIT),
            right: right.clamp(-SPEED_LIMIT, SPEED_LIMIT),
        }
    }

    pub fn left(&self) -> i16 {
        self.left
    }

    pub fn right(&self) -> i16 {
        self.right
    }

    /// JSON payload transmitted as the `json` query parameter,
    /// e.g. `{"T":1,"L":255,"R":255}`.
    pub fn wire_json(&self) -> String {
        let wire = WireCommand {
            kind: 1,
            left: self.left,
            right: self.right,
        };
        serde_json::to_string(&wire).expect("wire command serializes")
    }
}
