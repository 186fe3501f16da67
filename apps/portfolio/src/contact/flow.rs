//! Contact submission flow: `Idle → Sending → (Succeeded | Failed) → Idle`.
//!
//! Each submit starts two racing tasks: the delivery call and a 15s timeout
//! guard. Both report back through `resolve` with the attempt token they were
//! started under; only the first report for the current attempt commits a
//! terminal state, every later one is a no-op.
//!
//! The form fields and status are written only by the transitions in this
//! module. Observers read snapshots through `snapshot()` or `subscribe()`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, error, info, warn};

use crate::contact::emailjs::{DeliveryClient, DeliveryError};
use crate::models::contact::{Field, FormFields, OutboundMessage, SubmissionStatus, Toast};

pub const SEND_TIMEOUT: Duration = Duration::from_secs(15);
pub const SUCCESS_TOAST_TTL: Duration = Duration::from_secs(3);
pub const FAILURE_TOAST_TTL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started { attempt: u64 },
    Incomplete,
    AlreadySending,
}

/// Observable state of the flow.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlowSnapshot {
    pub status: SubmissionStatus,
    pub fields: FormFields,
    pub toast: Option<Toast>,
    pub attempt: u64,
    /// Whether `attempt` has reached a terminal outcome.
    pub resolved: bool,
    /// Time from submit to resolution for the latest resolved attempt.
    #[serde(skip)]
    pub elapsed: Option<Duration>,
}

impl FlowSnapshot {
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Sending && self.fields.is_complete()
    }
}

struct Inner {
    status: SubmissionStatus,
    fields: FormFields,
    toast: Option<Toast>,
    attempt: u64,
    resolved: bool,
    started_at: Option<Instant>,
    elapsed: Option<Duration>,
    guard: Option<JoinHandle<()>>,
    dismiss: Option<JoinHandle<()>>,
}

impl Inner {
    fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            status: self.status,
            fields: self.fields.clone(),
            toast: self.toast,
            attempt: self.attempt,
            resolved: self.resolved,
            elapsed: self.elapsed,
        }
    }
}

struct Shared {
    inner: Mutex<Inner>,
    tx: watch::Sender<FlowSnapshot>,
}

#[derive(Clone)]
pub struct SubmissionFlow {
    shared: Arc<Shared>,
    delivery: Arc<dyn DeliveryClient>,
}

impl SubmissionFlow {
    pub fn new(delivery: Arc<dyn DeliveryClient>) -> Self {
        let inner = Inner {
            status: SubmissionStatus::Idle,
            fields: FormFields::default(),
            toast: None,
            attempt: 0,
            resolved: true,
            started_at: None,
            elapsed: None,
            guard: None,
            dismiss: None,
        };
        let (tx, _) = watch::channel(inner.snapshot());
        Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(inner),
                tx,
            }),
            delivery,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.shared
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, inner: &Inner) {
        self.shared.tx.send_replace(inner.snapshot());
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        self.lock().snapshot()
    }

    pub fn subscribe(&self) -> watch::Receiver<FlowSnapshot> {
        self.shared.tx.subscribe()
    }

    pub fn can_submit(&self) -> bool {
        self.snapshot().can_submit()
    }

    pub fn set_field(&self, field: Field, value: impl Into<String>) {
        let mut inner = self.lock();
        inner.fields.set(field, value);
        self.publish(&inner);
    }

    /// `Idle → Sending`. Must be called from within a tokio runtime.
    ///
    /// Rejected while an attempt is in flight or while any field is empty.
    pub fn submit(&self) -> SubmitOutcome {
        let mut inner = self.lock();

        if inner.status == SubmissionStatus::Sending {
            debug!("Submit ignored: attempt {} still in flight", inner.attempt);
            return SubmitOutcome::AlreadySending;
        }
        if !inner.fields.is_complete() {
            debug!("Submit ignored: form incomplete");
            return SubmitOutcome::Incomplete;
        }

        if let Some(dismiss) = inner.dismiss.take() {
            dismiss.abort();
        }

        inner.attempt += 1;
        inner.resolved = false;
        inner.status = SubmissionStatus::Sending;
        inner.toast = None;
        inner.started_at = Some(Instant::now());

        let attempt = inner.attempt;
        let message = OutboundMessage::from(inner.fields.clone());

        info!(
            "Sending contact message (attempt {attempt}, subject '{}')",
            message.subject
        );

        let flow = self.clone();
        inner.guard = Some(tokio::spawn(async move {
            sleep(SEND_TIMEOUT).await;
            flow.resolve(attempt, Err(DeliveryError::TimedOut(SEND_TIMEOUT)));
        }));

        let flow = self.clone();
        tokio::spawn(async move {
            let result = flow.delivery.deliver(&message).await;
            flow.resolve(attempt, result);
        });

        self.publish(&inner);
        SubmitOutcome::Started { attempt }
    }

    /// Commits the terminal state for `attempt`. First caller wins.
    fn resolve(&self, attempt: u64, result: Result<(), DeliveryError>) {
        let mut inner = self.lock();

        if inner.attempt != attempt || inner.resolved {
            debug!(
                "Late outcome for attempt {attempt} dropped (current attempt {}, resolved={})",
                inner.attempt, inner.resolved
            );
            return;
        }

        inner.resolved = true;
        let elapsed = inner.started_at.map(|t| t.elapsed());
        inner.elapsed = elapsed;

        if let Some(guard) = inner.guard.take() {
            guard.abort();
        }

        let ttl = match result {
            Ok(()) => {
                info!("Contact message delivered (attempt {attempt}, after {elapsed:?})");
                inner.status = SubmissionStatus::Succeeded;
                inner.toast = Some(Toast::Success);
                inner.fields.clear();
                SUCCESS_TOAST_TTL
            }
            Err(DeliveryError::TimedOut(window)) => {
                warn!("Contact message timed out (attempt {attempt}, no response within {window:?})");
                inner.status = SubmissionStatus::Failed;
                inner.toast = Some(Toast::Failure);
                FAILURE_TOAST_TTL
            }
            Err(e) => {
                error!("Contact message failed (attempt {attempt}, after {elapsed:?}): {e}");
                inner.status = SubmissionStatus::Failed;
                inner.toast = Some(Toast::Failure);
                FAILURE_TOAST_TTL
            }
        };

        let flow = self.clone();
        inner.dismiss = Some(tokio::spawn(async move {
            sleep(ttl).await;
            flow.dismiss(attempt);
        }));

        self.publish(&inner);
    }

    /// Toast auto-dismiss: back to `Idle` unless a newer attempt has started.
    fn dismiss(&self, attempt: u64) {
        let mut inner = self.lock();
        if inner.attempt != attempt || inner.status == SubmissionStatus::Sending {
            return;
        }
        inner.status = SubmissionStatus::Idle;
        inner.toast = None;
        inner.dismiss = None;
        self.publish(&inner);
    }

    /// Waits until `attempt` has a terminal outcome and returns that snapshot.
    pub async fn settled(&self, attempt: u64) -> FlowSnapshot {
        let mut rx = self.subscribe();
        let result = rx
            .wait_for(|s| s.attempt > attempt || (s.attempt == attempt && s.resolved))
            .await
            .map(|s| FlowSnapshot::clone(&s));
        match result {
            Ok(snapshot) => snapshot,
            Err(_) => self.snapshot(),
        }
    }
}
