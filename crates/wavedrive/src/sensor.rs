use std::time::Duration;

use drive_core::TiltSample;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;
use tracing::{debug, info};

const SIM_SAMPLE_PERIOD: Duration = Duration::from_millis(50);

/// Attitude routine for the simulated source: (x, y, samples to hold).
/// Sweeps through every encoder bucket at a phone-like 20 Hz.
const SIM_ROUTINE: &[(f32, f32, u32)] = &[
    (0.0, 0.0, 20),
    (0.0, -6.0, 40),  // forward
    (4.5, -4.5, 30),  // forward-left
    (0.0, 0.0, 10),
    (-5.0, 0.0, 30),  // rotate right
    (5.0, 0.0, 30),   // rotate left
    (0.0, 7.0, 40),   // backward
    (-4.5, 4.5, 30),  // backward-right
    (0.0, 0.0, 20),
];

/// Hardware-free tilt source, looping the routine until the receiver goes
/// away.
pub async fn run_sim_source(samples: mpsc::Sender<TiltSample>) {
    info!("simulated tilt source running");
    let mut ticker = tokio::time::interval(SIM_SAMPLE_PERIOD);
    loop {
        for &(x, y, dwell) in SIM_ROUTINE {
            for _ in 0..dwell {
                ticker.tick().await;
                if samples.send(TiltSample::new(x, y)).await.is_err() {
                    return;
                }
            }
        }
    }
}

/// Reads `"<x> <y>"` lines from standard input until EOF. Malformed lines
/// are dropped, same as an unexpected sensor type on the phone.
pub async fn run_stdin_source(samples: mpsc::Sender<TiltSample>) {
    info!("reading tilt samples from stdin");
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match line.parse::<TiltSample>() {
            Ok(sample) => {
                if samples.send(sample).await.is_err() {
                    break;
                }
            }
            Err(e) => debug!(error = %e, "ignoring malformed sample line"),
        }
    }
    info!("tilt input closed");
}
