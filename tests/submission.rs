//! End-to-end contact submission: form state, submission worker, and delivery
//! collaborators, without a terminal.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use ratatui::{Terminal, backend::TestBackend};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use folio::app::spawn_submission_worker;
use folio::delivery::{
    ConfigurationError, DeliveryConfig, DeliveryError, DeliveryRequest, EmailDelivery,
    EmailJsClient,
};
use folio::i18n::Language;
use folio::logic::{SubmitAttempt, finish_submission, set_active_section, submit};
use folio::state::{AppState, FormFields, NotificationKind, Section, SubmissionOutcome};

/// Fake collaborator counting calls and answering with a fixed result.
struct Fake {
    /// Number of `send` calls so far.
    calls: Arc<AtomicUsize>,
    /// Whether to accept the message.
    accept: bool,
}

impl EmailDelivery for Fake {
    fn send(&self, _request: DeliveryRequest) -> BoxFuture<'static, Result<(), DeliveryError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let accept = self.accept;
        async move {
            if accept {
                Ok(())
            } else {
                Err(DeliveryError::rejected(400, "template not found"))
            }
        }
        .boxed()
    }
}

/// Running worker plus the ends the form side holds.
struct Harness {
    submit_tx: mpsc::UnboundedSender<DeliveryRequest>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    calls: Arc<AtomicUsize>,
}

fn harness(accept: bool) -> Harness {
    let calls = Arc::new(AtomicUsize::new(0));
    let (submit_tx, submit_rx) = mpsc::unbounded_channel();
    let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
    spawn_submission_worker(
        Arc::new(Fake {
            calls: Arc::clone(&calls),
            accept,
        }),
        Duration::from_secs(2),
        submit_rx,
        outcome_tx,
    );
    Harness {
        submit_tx,
        outcome_rx,
        calls,
    }
}

fn config() -> DeliveryConfig {
    DeliveryConfig {
        service_id: "service_x".into(),
        template_id: "template_y".into(),
        public_key: "public_z".into(),
    }
}

/// English Contact section with a valid form.
fn filled_app() -> AppState {
    let mut app = AppState::new(true, Language::En);
    set_active_section(&mut app, Section::Contact);
    app.form = FormFields {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        message: "Hi".into(),
    };
    app
}

/// Wait for the worker's answer and apply it.
async fn settle(app: &mut AppState, h: &mut Harness) {
    let outcome = tokio::time::timeout(Duration::from_secs(5), h.outcome_rx.recv())
        .await
        .expect("outcome within deadline")
        .expect("worker alive");
    finish_submission(app, outcome);
}

fn rendered_text(app: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(160, 60)).expect("test terminal");
    terminal.draw(|f| folio::ui::ui(f, app)).expect("draw frame");
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

#[tokio::test]
/// What: A successful send clears the form and reports success in English.
///
/// Inputs:
/// - Name "Ada", email "ada@example.com", message "Hi"; accepting collaborator
///
/// Output:
/// - Exactly one call, empty form, `is_submitting` false, "Message sent!" on screen
async fn successful_submission_resets_form() {
    let mut h = harness(true);
    let mut app = filled_app();
    let cfg = config();

    assert_eq!(submit(&mut app, Ok(&cfg), &h.submit_tx), SubmitAttempt::Dispatched);
    assert!(app.is_submitting);
    settle(&mut app, &mut h).await;

    assert_eq!(h.calls.load(Ordering::SeqCst), 1);
    assert!(!app.is_submitting);
    assert_eq!(app.form, FormFields::default());
    assert_eq!(app.notification.map(|n| n.kind), Some(NotificationKind::Sent));
    let text = rendered_text(&app);
    assert!(text.contains("Message sent!"));
}

#[tokio::test]
async fn rejected_submission_keeps_form() {
    let mut h = harness(false);
    let mut app = filled_app();
    let cfg = config();
    let before = app.form.clone();

    submit(&mut app, Ok(&cfg), &h.submit_tx);
    settle(&mut app, &mut h).await;

    assert!(!app.is_submitting);
    assert_eq!(app.form, before);
    assert_eq!(
        app.notification.map(|n| n.kind),
        Some(NotificationKind::SendFailed)
    );
}

#[tokio::test]
/// What: A second submit while the first is in flight never reaches the collaborator.
///
/// Output:
/// - `Busy` for the second attempt and exactly one call in total
async fn second_submit_while_in_flight_is_inert() {
    let mut h = harness(true);
    let mut app = filled_app();
    let cfg = config();

    assert_eq!(submit(&mut app, Ok(&cfg), &h.submit_tx), SubmitAttempt::Dispatched);
    assert_eq!(submit(&mut app, Ok(&cfg), &h.submit_tx), SubmitAttempt::Busy);
    settle(&mut app, &mut h).await;
    assert_eq!(h.calls.load(Ordering::SeqCst), 1);
    assert!(h.outcome_rx.try_recv().is_err());
}

#[tokio::test]
async fn missing_configuration_never_calls_collaborator() {
    let h = harness(true);
    let mut app = filled_app();
    let err = ConfigurationError {
        missing: vec!["EMAILJS_PUBLIC_KEY"],
    };

    assert_eq!(submit(&mut app, Err(&err), &h.submit_tx), SubmitAttempt::NotConfigured);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(h.calls.load(Ordering::SeqCst), 0);
    assert!(!app.is_submitting);
    assert_eq!(app.form.name, "Ada");
    assert_eq!(
        app.notification.map(|n| n.kind),
        Some(NotificationKind::ConfigMissing)
    );
}

/// What: Serve one HTTP request on a local port.
///
/// Inputs:
/// - `status_line`: e.g. `200 OK`
/// - `reply`: Response body
///
/// Output:
/// - Endpoint URL and a handle resolving to the raw request text
async fn one_shot_server(
    status_line: &'static str,
    reply: &'static str,
) -> (String, tokio::task::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut raw = Vec::new();
        let mut buf = [0u8; 4096];
        loop {
            let n = socket.read(&mut buf).await.expect("read request");
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw);
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|l| {
                        let (k, v) = l.split_once(':')?;
                        k.eq_ignore_ascii_case("content-length")
                            .then(|| v.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if raw.len() >= end + 4 + length {
                    break;
                }
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{reply}",
            reply.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
        String::from_utf8_lossy(&raw).into_owned()
    });
    (format!("http://{addr}/api/v1.0/email/send"), handle)
}

fn request() -> DeliveryRequest {
    DeliveryRequest {
        config: config(),
        params: folio::delivery::TemplateParams {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hi".into(),
        },
    }
}

#[tokio::test]
/// What: The EmailJS client posts the expected JSON and treats 200 as accepted.
///
/// Inputs:
/// - Local server answering `200 OK`
///
/// Output:
/// - `Ok(())`; the request is a JSON POST carrying identifiers and template values
async fn emailjs_client_posts_json_and_accepts_200() {
    let (url, server) = one_shot_server("200 OK", "OK").await;
    let client = EmailJsClient::new(url, Duration::from_secs(5)).expect("client builds");
    client.send(request()).await.expect("accepted");

    let raw = server.await.expect("server finished");
    assert!(raw.starts_with("POST /api/v1.0/email/send"));
    assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
    for needle in [
        r#""service_id":"service_x""#,
        r#""template_id":"template_y""#,
        r#""user_id":"public_z""#,
        r#""name":"Ada""#,
        r#""message":"Hi""#,
    ] {
        assert!(raw.contains(needle), "missing {needle} in {raw}");
    }
}

#[tokio::test]
async fn emailjs_client_reports_rejection() {
    let (url, server) = one_shot_server("400 Bad Request", "The template ID is invalid").await;
    let client = EmailJsClient::new(url, Duration::from_secs(5)).expect("client builds");
    let err = client.send(request()).await.expect_err("rejected");
    match err {
        DeliveryError::Rejected { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("template ID"));
        }
        other => panic!("expected rejection, got {other}"),
    }
    server.await.expect("server finished");
}
