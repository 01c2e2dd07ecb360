/// Where tilt samples come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorSource {
    /// Built-in attitude sweep, useful without a phone attached.
    Sim,
    /// `"<x> <y>"` lines on standard input.
    Stdin,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub show_help: bool,
    pub robot_addr: String,
    pub source: SensorSource,
    pub run_seconds: Option<u64>,
    pub json_logs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            show_help: false,
            robot_addr: "192.168.4.1".to_string(),
            source: SensorSource::Sim,
            run_seconds: None,
            json_logs: false,
        }
    }
}

impl RuntimeConfig {
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().collect();
        Self::from_args(&args)
    }

    pub fn from_args(args: &[String]) -> Self {
        let mut cfg = RuntimeConfig::default();
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--robot" => {
                    if i + 1 < args.len() {
                        cfg.robot_addr = args[i + 1].clone();
                        i += 1;
                    }
                }
                "--source" => {
                    if i + 1 < args.len() {
                        if let Some(source) = parse_source(&args[i + 1]) {
                            cfg.source = source;
                        }
                        i += 1;
                    }
                }
                "--run-seconds" => {
                    if i + 1 < args.len() {
                        cfg.run_seconds = args[i + 1].parse::<u64>().ok();
                        i += 1;
                    }
                }
                "--json-logs" => {
                    cfg.json_logs = true;
                }
                "--help" | "-h" => {
                    cfg.show_help = true;
                    break;
                }
                _ => {}
            }
            i += 1;
        }
        cfg
    }

    pub fn print_help() {
        println!(
            r#"wavedrive - tilt-controlled remote driving client

USAGE:
    wavedrive [OPTIONS]

OPTIONS:
    --robot <ADDR>          Robot controller address [default: 192.168.4.1]
    --source <sim|stdin>    Tilt sample source [default: sim]
    --run-seconds <SECS>    Run for a fixed duration then exit
    --json-logs             Output logs in JSON format (for log aggregation)
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log filter (e.g., RUST_LOG=debug,wavedrive=trace)

EXAMPLES:
    # Drive the default robot from a simulated attitude sweep
    wavedrive

    # Pipe recorded samples at a bench robot for ten seconds
    cat tilt.log | wavedrive --robot 10.0.0.42 --source stdin --run-seconds 10
"#
        );
    }
}

fn parse_source(name: &str) -> Option<SensorSource> {
    match name {
        "sim" => Some(SensorSource::Sim),
        "stdin" => Some(SensorSource::Stdin),
        _ => None,
    }
}
