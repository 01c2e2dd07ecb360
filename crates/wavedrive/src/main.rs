mod pilot;
mod runtime;
mod sensor;

fn main() {
    runtime::app::run_from_args();
}
