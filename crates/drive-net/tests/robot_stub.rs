use std::net::TcpListener;
use std::sync::mpsc as std_mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use drive_core::{CommandSink, DriveCommand, LinkState, Notice};
use drive_net::{build_client, run_monitor_with_period, CommandSender, RobotEndpoint};
use tokio::sync::mpsc;
use tokio::time::timeout;

/// Minimal stand-in for the robot controller: answers every request with a
/// fixed status and body, and records the URLs it was asked for.
struct StubRobot {
    server: Arc<tiny_http::Server>,
    urls: std_mpsc::Receiver<String>,
    addr: String,
    handle: Option<thread::JoinHandle<()>>,
}

impl StubRobot {
    fn start(status: u16, body: &'static str, delay: Duration) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").expect("bind stub robot"));
        let port = server
            .server_addr()
            .to_ip()
            .expect("stub robot has an IP address")
            .port();
        let (url_tx, url_rx) = std_mpsc::channel();

        let server_thread = Arc::clone(&server);
        let handle = thread::spawn(move || {
            for request in server_thread.incoming_requests() {
                let _ = url_tx.send(request.url().to_string());
                if !delay.is_zero() {
                    thread::sleep(delay);
                }
                let response = tiny_http::Response::from_string(body).with_status_code(status);
                let _ = request.respond(response);
            }
        });

        Self {
            server,
            urls: url_rx,
            addr: format!("127.0.0.1:{}", port),
            handle: Some(handle),
        }
    }

    fn addr(&self) -> &str {
        &self.addr
    }

    fn stop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for StubRobot {
    fn drop(&mut self) {
        self.stop();
    }
}

/// An address nothing is listening on.
fn dead_endpoint() -> RobotEndpoint {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe listener");
    let addr = listener.local_addr().expect("resolve bound address");
    drop(listener);
    RobotEndpoint::new(addr.to_string())
}

fn percent_decode(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = std::str::from_utf8(&bytes[i + 1..i + 3]).expect("hex digits");
                out.push(u8::from_str_radix(hex, 16).expect("valid escape"));
                i += 3;
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).expect("utf-8 query")
}

#[tokio::test]
async fn command_dispatch_hits_js_with_wire_payload() {
    let stub = StubRobot::start(200, "ok", Duration::ZERO);
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    let sender = CommandSender::new(
        build_client(),
        RobotEndpoint::new(stub.addr()),
        notice_tx,
    );

    sender.dispatch(DriveCommand::new(0, 255));

    let notice = timeout(Duration::from_secs(5), notice_rx.recv())
        .await
        .expect("dispatch completes")
        .expect("notice emitted");
    assert_eq!(
        notice,
        Notice::CommandSent {
            response: "ok".to_string()
        }
    );

    let url = stub
        .urls
        .recv_timeout(Duration::from_secs(1))
        .expect("stub saw the request");
    let prefix = "/js?json=";
    assert!(url.starts_with(prefix), "unexpected url: {url}");
    assert_eq!(percent_decode(&url[prefix.len()..]), r#"{"T":1,"L":0,"R":255}"#);
}

#[tokio::test]
async fn non_200_response_reports_failure_notice() {
    let stub = StubRobot::start(500, "boom", Duration::ZERO);
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    let sender = CommandSender::new(
        build_client(),
        RobotEndpoint::new(stub.addr()),
        notice_tx,
    );

    sender.dispatch(DriveCommand::STOP);

    let notice = timeout(Duration::from_secs(5), notice_rx.recv())
        .await
        .expect("dispatch completes")
        .expect("notice emitted");
    match notice {
        Notice::CommandFailed { reason } => assert!(reason.contains("500"), "reason: {reason}"),
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_endpoint_reports_failure_notice() {
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    let sender = CommandSender::new(build_client(), dead_endpoint(), notice_tx);

    sender.dispatch(DriveCommand::new(255, 255));

    let notice = timeout(Duration::from_secs(10), notice_rx.recv())
        .await
        .expect("dispatch completes")
        .expect("notice emitted");
    assert!(matches!(notice, Notice::CommandFailed { .. }));
}

#[tokio::test]
async fn dispatch_returns_before_the_response_arrives() {
    let stub = StubRobot::start(200, "ok", Duration::from_millis(300));
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    let sender = CommandSender::new(
        build_client(),
        RobotEndpoint::new(stub.addr()),
        notice_tx,
    );

    let started = Instant::now();
    sender.dispatch(DriveCommand::new(255, 255));
    let dispatch_cost = started.elapsed();
    assert!(
        dispatch_cost < Duration::from_millis(100),
        "dispatch blocked for {dispatch_cost:?}"
    );

    let notice = timeout(Duration::from_secs(5), notice_rx.recv())
        .await
        .expect("response eventually arrives")
        .expect("notice emitted");
    assert!(matches!(notice, Notice::CommandSent { .. }));
}

#[tokio::test]
async fn monitor_notifies_once_per_transition() {
    let mut stub = StubRobot::start(200, "", Duration::ZERO);
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    let monitor = tokio::spawn(run_monitor_with_period(
        build_client(),
        RobotEndpoint::new(stub.addr()),
        notice_tx,
        Duration::from_millis(25),
    ));

    let first = timeout(Duration::from_secs(5), notice_rx.recv())
        .await
        .expect("first transition observed")
        .expect("notice emitted");
    assert_eq!(first, Notice::LinkChanged(LinkState::Reachable));

    // Several more successful probes elapse without a second notice.
    assert!(
        timeout(Duration::from_millis(200), notice_rx.recv())
            .await
            .is_err(),
        "steady reachable state must stay silent"
    );

    stub.stop();

    let second = timeout(Duration::from_secs(5), notice_rx.recv())
        .await
        .expect("loss observed")
        .expect("notice emitted");
    assert_eq!(second, Notice::LinkChanged(LinkState::Unreachable));

    monitor.abort();
}

#[tokio::test]
async fn monitor_stays_silent_while_never_reachable() {
    let (notice_tx, mut notice_rx) = mpsc::unbounded_channel();
    let monitor = tokio::spawn(run_monitor_with_period(
        build_client(),
        dead_endpoint(),
        notice_tx,
        Duration::from_millis(25),
    ));

    // Initial state is already Unreachable: failing probes are not a change.
    assert!(
        timeout(Duration::from_millis(300), notice_rx.recv())
            .await
            .is_err(),
        "no transition, no notice"
    );

    monitor.abort();
}
