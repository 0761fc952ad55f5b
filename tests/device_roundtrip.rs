//! End-to-end tests: Engine + HttpDeviceClient against a fake device
//!
//! Run with: cargo test --test device_roundtrip

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use esp_remote::headless::runner::{run_one_shot_with_output, EXIT_REQUEST_FAILED, EXIT_SUCCESS};
use esp_remote::{build_engine, load_settings, LaunchOptions, OneShot};
use espremote_app::{Engine, Message};
use espremote_core::{ConnectionStatus, Error, ToggleState};
use espremote_device::HttpDeviceClient;

// ─────────────────────────────────────────────────────────
// Fake device
// ─────────────────────────────────────────────────────────

/// Minimal HTTP/1.1 device that records `METHOD target body` lines
struct FakeDevice {
    addr: String,
    status: Arc<AtomicU16>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeDevice {
    async fn start(status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let status = Arc::new(AtomicU16::new(status));
        let requests = Arc::new(Mutex::new(Vec::new()));

        let (status_ref, recorded) = (status.clone(), requests.clone());
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                tokio::spawn(serve(stream, status_ref.clone(), recorded.clone()));
            }
        });

        Self {
            addr,
            status,
            requests,
        }
    }

    fn set_status(&self, status: u16) {
        self.status.store(status, Ordering::SeqCst);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn options(&self) -> LaunchOptions {
        LaunchOptions {
            device: Some(self.addr.clone()),
            config: None,
            timeout_ms: Some(2_000),
        }
    }
}

async fn serve(
    mut stream: TcpStream,
    status: Arc<AtomicU16>,
    recorded: Arc<Mutex<Vec<String>>>,
) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let Ok(n) = stream.read(&mut chunk).await else {
            return;
        };
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let request_line = head.lines().next().unwrap_or_default().to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let mut body = buf[header_end..].to_vec();
    while body.len() < content_length {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => body.extend_from_slice(&chunk[..n]),
        }
    }

    // "GET /toggle?state=ON HTTP/1.1" -> "GET /toggle?state=ON"
    let mut parts = request_line.split(' ');
    let summary = format!(
        "{} {} {}",
        parts.next().unwrap_or_default(),
        parts.next().unwrap_or_default(),
        String::from_utf8_lossy(&body)
    );
    recorded.lock().unwrap().push(summary.trim_end().to_string());

    let status = status.load(Ordering::SeqCst);
    let response =
        format!("HTTP/1.1 {status} Status\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// Process messages until every dispatched request has resolved
async fn settle(engine: &mut Engine<HttpDeviceClient>) {
    while engine.has_pending_requests() {
        let processed =
            tokio::time::timeout(Duration::from_secs(5), engine.process_next_message())
                .await
                .expect("request outcome never arrived");
        assert!(processed);
    }
}

// ─────────────────────────────────────────────────────────
// TUI path
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_toggle_round_trip() {
    let device = FakeDevice::start(200).await;
    let mut engine = build_engine(&device.options()).unwrap();
    assert_eq!(engine.state.device_address, device.addr);

    engine.process_message(Message::FlipToggle);
    settle(&mut engine).await;

    assert_eq!(device.requests(), vec!["GET /toggle?state=ON"]);
    assert_eq!(engine.state.control.toggle, ToggleState::On);
    assert_eq!(engine.state.control.connection, ConnectionStatus::Connected);
}

#[tokio::test]
async fn test_startup_sync_round_trip() {
    let device = FakeDevice::start(200).await;
    let mut engine = build_engine(&device.options()).unwrap();

    engine.start();
    settle(&mut engine).await;

    assert_eq!(device.requests(), vec!["GET /toggle?state=OFF"]);
    assert_eq!(engine.state.control.connection, ConnectionStatus::Connected);
}

#[tokio::test]
async fn test_text_success_then_server_error() {
    let device = FakeDevice::start(200).await;
    let mut engine = build_engine(&device.options()).unwrap();

    engine.process_message(Message::SetPendingText("hello world".into()));
    engine.process_message(Message::SubmitText);
    assert!(engine.state.control.is_sending);
    settle(&mut engine).await;

    assert_eq!(engine.state.control.pending_text, "");
    assert_eq!(
        engine.state.control.last_sent_text.as_deref(),
        Some("hello world")
    );
    assert_eq!(engine.state.control.connection, ConnectionStatus::Connected);
    assert!(!engine.state.control.is_sending);

    device.set_status(500);
    engine.process_message(Message::SetPendingText("again".into()));
    engine.process_message(Message::SubmitText);
    settle(&mut engine).await;

    assert_eq!(
        engine.state.control.last_sent_text.as_deref(),
        Some("hello world")
    );
    assert_eq!(engine.state.control.pending_text, "again");
    assert_eq!(engine.state.control.connection, ConnectionStatus::Disconnected);
    assert!(!engine.state.control.is_sending);

    assert_eq!(
        device.requests(),
        vec!["POST /text message=hello%20world", "POST /text message=again"]
    );
}

#[tokio::test]
async fn test_unreachable_device_disconnects() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();
    drop(listener);

    let options = LaunchOptions {
        device: Some(addr),
        config: None,
        timeout_ms: Some(2_000),
    };
    let mut engine = build_engine(&options).unwrap();

    engine.process_message(Message::FlipToggle);
    settle(&mut engine).await;

    assert_eq!(engine.state.control.connection, ConnectionStatus::Disconnected);
    assert_eq!(engine.state.control.toggle, ToggleState::On);
}

// ─────────────────────────────────────────────────────────
// One-shot path
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_one_shot_send() {
    let device = FakeDevice::start(204).await;
    let engine = build_engine(&device.options()).unwrap();
    let mut out = Vec::new();

    let code = run_one_shot_with_output(engine, OneShot::Send("a&b".into()), &mut out)
        .await
        .unwrap();

    assert_eq!(code, EXIT_SUCCESS);
    assert_eq!(device.requests(), vec!["POST /text message=a%26b"]);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains(r#""event":"request_succeeded""#));
    assert!(output.contains(r#""status":"connected""#));
}

#[tokio::test]
async fn test_one_shot_toggle_failure() {
    let device = FakeDevice::start(503).await;
    let engine = build_engine(&device.options()).unwrap();
    let mut out = Vec::new();

    let code = run_one_shot_with_output(engine, OneShot::Toggle(ToggleState::On), &mut out)
        .await
        .unwrap();

    assert_eq!(code, EXIT_REQUEST_FAILED);
    let output = String::from_utf8(out).unwrap();
    assert!(output.contains("HTTP 503"));
}

// ─────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────

#[test]
fn test_explicit_missing_config_is_rejected() {
    let options = LaunchOptions {
        config: Some("/nonexistent/espremote.toml".into()),
        ..Default::default()
    };

    let err = load_settings(&options).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { .. }));
}

#[test]
fn test_timeout_override_applies() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[device]\ntimeout_ms = 100\n").unwrap();

    let options = LaunchOptions {
        config: Some(path),
        timeout_ms: Some(0),
        ..Default::default()
    };

    let settings = load_settings(&options).unwrap();
    assert_eq!(settings.device.timeout_ms, 0);
    assert_eq!(settings.device.timeout(), None);
}

#[tokio::test]
async fn test_cli_device_beats_config_file() {
    let device = FakeDevice::start(200).await;
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[device]\naddress = \"10.255.255.1\"\n").unwrap();

    let options = LaunchOptions {
        device: Some(device.addr.clone()),
        config: Some(path),
        timeout_ms: None,
    };

    let engine = build_engine(&options).unwrap();
    assert_eq!(engine.state.device_address, device.addr);
}

#[test]
fn test_invalid_address_rejected_before_start() {
    let options = LaunchOptions {
        device: Some("http://192.168.4.1".into()),
        ..Default::default()
    };

    // No runtime needed: validation fails before the engine is created
    let err = build_engine(&options).err().unwrap();
    assert!(matches!(err, Error::InvalidAddress { .. }));
}
