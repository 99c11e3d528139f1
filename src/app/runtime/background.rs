use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::delivery::{self, DeliveryRequest, EmailDelivery};
use crate::state::SubmissionOutcome;

/// Period of the housekeeping tick (notification expiry, redraw).
const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events flow in from the reader thread, ticks from the tick task,
///   and submission outcomes from the submission worker
/// - Holding `submit_tx` here keeps the worker, and with it `outcome_rx`, alive
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    pub submit_tx: mpsc::UnboundedSender<DeliveryRequest>,
    pub outcome_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
}

impl Channels {
    /// What: Create all channels and start the submission worker.
    ///
    /// Inputs:
    /// - `delivery`: Collaborator the worker sends through
    /// - `deadline`: Upper bound for one delivery attempt
    ///
    /// Output:
    /// - Ready-to-use channel set
    pub fn new(delivery: Arc<dyn EmailDelivery>, deadline: Duration) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let (submit_tx, submit_rx) = mpsc::unbounded_channel::<DeliveryRequest>();
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel::<SubmissionOutcome>();
        spawn_submission_worker(delivery, deadline, submit_rx, outcome_tx);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            tick_tx,
            tick_rx,
            submit_tx,
            outcome_rx,
        }
    }
}

/// What: Spawn the worker that performs dispatched submissions one at a time.
///
/// Inputs:
/// - `delivery`: Collaborator to send through
/// - `deadline`: Upper bound for one attempt
/// - `submit_rx`: Queue fed by the contact form
/// - `outcome_tx`: Where exactly one outcome per request is reported
///
/// Output:
/// - Handle of the worker task; it ends when either channel closes
///
/// Details:
/// - Requests are handled strictly in order; the form never queues a second
///   one while the first is in flight
pub fn spawn_submission_worker(
    delivery: Arc<dyn EmailDelivery>,
    deadline: Duration,
    mut submit_rx: mpsc::UnboundedReceiver<DeliveryRequest>,
    outcome_tx: mpsc::UnboundedSender<SubmissionOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(request) = submit_rx.recv().await {
            let outcome = delivery::deliver(Arc::clone(&delivery), request, deadline).await;
            if outcome_tx.send(outcome).is_err() {
                tracing::debug!("[Runtime] outcome receiver dropped, stopping submission worker");
                break;
            }
        }
    })
}

/// Spawn the housekeeping tick; it stops once the receiver is gone.
pub fn spawn_tick(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(TICK_INTERVAL);
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn event reading thread for terminal input.
///
/// Inputs:
/// - `headless`: When `true`, skip spawning the thread
/// - `event_tx`: Channel sender for terminal events
/// - `cancelled`: Atomic flag to signal thread cancellation
///
/// Details:
/// - Polls with a 50ms timeout so the cancellation flag is checked regularly
/// - Exits when the flag is set or the receiver is dropped
pub fn spawn_event_thread(
    headless: bool,
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    if headless {
        return;
    }
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // Transient read errors are ignored.
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::{DeliveryConfig, DeliveryError, TemplateParams};
    use futures::FutureExt;
    use futures::future::BoxFuture;

    /// Accepts every message.
    struct Accepting;

    impl EmailDelivery for Accepting {
        fn send(&self, _request: DeliveryRequest) -> BoxFuture<'static, Result<(), DeliveryError>> {
            async { Ok(()) }.boxed()
        }
    }

    fn request() -> DeliveryRequest {
        DeliveryRequest {
            config: DeliveryConfig {
                service_id: "svc".into(),
                template_id: "tpl".into(),
                public_key: "key".into(),
            },
            params: TemplateParams {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                message: "Hi".into(),
            },
        }
    }

    #[tokio::test]
    /// What: The worker answers every queued request once, in order, then stops.
    ///
    /// Inputs:
    /// - Two requests, then the request sender dropped
    ///
    /// Output:
    /// - Two `Success` outcomes and a finished worker task
    async fn submission_worker_reports_each_request() {
        let (submit_tx, submit_rx) = mpsc::unbounded_channel();
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel();
        let handle = spawn_submission_worker(
            Arc::new(Accepting),
            Duration::from_secs(1),
            submit_rx,
            outcome_tx,
        );
        submit_tx.send(request()).expect("worker alive");
        submit_tx.send(request()).expect("worker alive");
        drop(submit_tx);
        assert_eq!(outcome_rx.recv().await, Some(SubmissionOutcome::Success));
        assert_eq!(outcome_rx.recv().await, Some(SubmissionOutcome::Success));
        handle.await.expect("worker finished cleanly");
        assert_eq!(outcome_rx.recv().await, None);
    }

    #[tokio::test]
    async fn tick_task_emits_ticks() {
        let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
        spawn_tick(tick_tx);
        let first = tokio::time::timeout(Duration::from_secs(2), tick_rx.recv()).await;
        assert_eq!(first.expect("tick within deadline"), Some(()));
    }
}
