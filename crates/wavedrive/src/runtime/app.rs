use std::time::Duration;

use drive_net::{build_client, run_monitor, CommandSender, RobotEndpoint};
use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::pilot::run_pilot;
use crate::runtime::config::{RuntimeConfig, SensorSource};
use crate::runtime::display::run_display;
use crate::runtime::logging::init_tracing;
use crate::sensor::{run_sim_source, run_stdin_source};

pub fn run_from_args() {
    let config = RuntimeConfig::from_env();
    if config.show_help {
        RuntimeConfig::print_help();
        return;
    }
    run(config);
}

pub fn run(config: RuntimeConfig) {
    init_tracing(config.json_logs);

    let runtime = tokio::runtime::Runtime::new().expect("failed to create Tokio runtime");
    runtime.block_on(drive(config));
}

async fn drive(config: RuntimeConfig) {
    let endpoint = RobotEndpoint::new(config.robot_addr.clone());
    let client = build_client();

    let (notice_tx, notice_rx) = mpsc::unbounded_channel();
    let (label_tx, label_rx) = watch::channel("Flat");
    let (sample_tx, sample_rx) = mpsc::channel(32);

    info!(endpoint = %endpoint, source = ?config.source, "wavedrive starting");

    // Heartbeat probe; runs for the life of the process and is never
    // stopped, even after the tilt stream ends.
    tokio::spawn(run_monitor(
        client.clone(),
        endpoint.clone(),
        notice_tx.clone(),
    ));

    let display = tokio::spawn(run_display(label_rx, notice_rx));

    match config.source {
        SensorSource::Sim => {
            tokio::spawn(run_sim_source(sample_tx));
        }
        SensorSource::Stdin => {
            tokio::spawn(run_stdin_source(sample_tx));
        }
    }

    let sender = CommandSender::new(client, endpoint, notice_tx);
    let pilot = run_pilot(sample_rx, sender, label_tx);

    if let Some(seconds) = config.run_seconds {
        info!(seconds, "running for limited duration");
        if tokio::time::timeout(Duration::from_secs(seconds), pilot)
            .await
            .is_err()
        {
            info!("run duration elapsed");
        }
    } else {
        pilot.await;
    }

    display.abort();
}
