use std::str::FromStr;

use thiserror::Error;

/// One accelerometer reading. Only the x and y gravity components matter
/// for tilt control; samples are consumed and discarded per callback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSample {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleParseError {
    #[error("expected two axis values, got {0}")]
    WrongFieldCount(usize),
    #[error("axis value {0:?} is not a number")]
    BadAxis(String),
}

impl TiltSample {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Line format of the stdin sensor source: `"<x> <y>"`, whitespace
/// separated. Malformed lines are dropped by the caller.
impl FromStr for TiltSample {
    type Err = SampleParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(SampleParseError::WrongFieldCount(fields.len()));
        }
        let parse = |field: &str| {
            field
                .parse::<f32>()
                .map_err(|_| SampleParseError::BadAxis(field.to_string()))
        };
        Ok(Self {
            x: parse(fields[0])?,
            y: parse(fields[1])?,
        })
    }
}
