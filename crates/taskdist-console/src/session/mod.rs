/*
[INPUT]:  TaskForm edits, submit/fetch triggers, a TaskQueue implementation
[OUTPUT]: Spawned queue requests and state updated as they settle
[POS]:    Client core - submission controller and result synchronizer
[UPDATE]: When request lifecycle or status reporting changes
*/

//! Session state for the task queue client.
//!
//! Requests run as independent tokio tasks. Each one reports back through
//! an unbounded channel and the owner applies the [`Settlement`], so the
//! form, status line and result list are only ever touched from one place.
//! In-flight requests are neither serialized nor cancelled: whichever
//! settlement is applied last decides the status line.

mod settlement;
mod state;

use std::sync::Arc;

use taskdist_adapter::{TaskPayload, TaskQueue};
use tokio::sync::mpsc;
use tracing::{Instrument, debug, info, info_span, warn};

use crate::form::TaskForm;

pub use settlement::{Applied, AttemptId, Outcome, Settlement};
pub use state::{
    ResultList, STATUS_FETCHING, STATUS_NO_NEW_RESULTS, STATUS_SUBMITTING, StatusMessage,
};

pub struct Session {
    queue: Arc<dyn TaskQueue>,
    form: TaskForm,
    results: ResultList,
    status: StatusMessage,
    settlement_tx: mpsc::UnboundedSender<Settlement>,
    settlement_rx: mpsc::UnboundedReceiver<Settlement>,
    in_flight: usize,
}

impl Session {
    pub fn new(queue: Arc<dyn TaskQueue>) -> Self {
        let (settlement_tx, settlement_rx) = mpsc::unbounded_channel();
        Self {
            queue,
            form: TaskForm::new(),
            results: ResultList::default(),
            status: StatusMessage::default(),
            settlement_tx,
            settlement_rx,
            in_flight: 0,
        }
    }

    pub fn form(&self) -> &TaskForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut TaskForm {
        &mut self.form
    }

    pub fn results(&self) -> &ResultList {
        &self.results
    }

    pub fn status(&self) -> &str {
        self.status.as_str()
    }

    /// Requests issued but not yet applied
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Submit the current form.
    ///
    /// Returns `None` without touching any state when the active field is
    /// blank. The form is left as-is after submission.
    /// Must be called from within a tokio runtime.
    pub fn submit(&mut self) -> Option<AttemptId> {
        let payload = self.form.build_payload()?;
        Some(self.dispatch_submit(payload))
    }

    /// Submit each payload as its own request
    pub fn submit_batch(&mut self, payloads: Vec<TaskPayload>) -> Vec<AttemptId> {
        payloads
            .into_iter()
            .map(|payload| self.dispatch_submit(payload))
            .collect()
    }

    /// Ask the service for every pending result.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fetch_results(&mut self) -> AttemptId {
        let attempt = AttemptId::new();
        self.status.set(STATUS_FETCHING);
        self.in_flight += 1;

        let queue = Arc::clone(&self.queue);
        let tx = self.settlement_tx.clone();
        let span = info_span!("fetch", attempt = %attempt);
        tokio::spawn(
            async move {
                debug!(endpoint = "/results", "request issued");
                let result = queue.fetch_results().await;
                let _ = tx.send(Settlement {
                    attempt,
                    outcome: Outcome::Fetched { result },
                });
            }
            .instrument(span),
        );
        attempt
    }

    fn dispatch_submit(&mut self, payload: TaskPayload) -> AttemptId {
        let attempt = AttemptId::new();
        self.status.set(STATUS_SUBMITTING);
        self.in_flight += 1;

        let queue = Arc::clone(&self.queue);
        let tx = self.settlement_tx.clone();
        let span = info_span!("submit", attempt = %attempt, task_type = payload.task_type().as_str());
        tokio::spawn(
            async move {
                debug!(endpoint = "/task", "request issued");
                let result = queue.submit_task(&payload).await;
                let _ = tx.send(Settlement {
                    attempt,
                    outcome: Outcome::Submitted { payload, result },
                });
            }
            .instrument(span),
        );
        attempt
    }

    /// Apply a settled request to the status line and result list
    pub fn apply(&mut self, settlement: Settlement) -> Applied {
        self.in_flight = self.in_flight.saturating_sub(1);
        let attempt = settlement.attempt;

        match settlement.outcome {
            Outcome::Submitted { payload, result } => match result {
                Ok(_) => {
                    let json = payload.to_json();
                    info!(%attempt, payload = %json, "task queued");
                    self.status.set(state::queued_status(&json));
                    Applied {
                        attempt,
                        success: true,
                        merged: 0,
                    }
                }
                Err(err) => {
                    warn!(%attempt, error = %err, "task submission failed");
                    self.status.set(err.status_line());
                    Applied {
                        attempt,
                        success: false,
                        merged: 0,
                    }
                }
            },
            Outcome::Fetched { result } => match result {
                Ok(batch) if batch.is_empty() => {
                    info!(%attempt, "no new results");
                    self.status.set(STATUS_NO_NEW_RESULTS);
                    Applied {
                        attempt,
                        success: true,
                        merged: 0,
                    }
                }
                Ok(batch) => {
                    let merged = self.results.prepend_batch(batch);
                    info!(%attempt, count = merged, total = self.results.len(), "results merged");
                    self.status.set(state::fetched_status(merged));
                    Applied {
                        attempt,
                        success: true,
                        merged,
                    }
                }
                Err(err) => {
                    warn!(%attempt, error = %err, "fetching results failed");
                    self.status.set(err.status_line());
                    Applied {
                        attempt,
                        success: false,
                        merged: 0,
                    }
                }
            },
        }
    }

    /// Wait for the next request to settle, without applying it
    pub async fn recv_settlement(&mut self) -> Option<Settlement> {
        if self.in_flight == 0 {
            return None;
        }
        self.settlement_rx.recv().await
    }

    /// Wait for the next request to settle and apply it.
    /// Returns `None` when nothing is in flight.
    pub async fn settle_next(&mut self) -> Option<Applied> {
        let settlement = self.recv_settlement().await?;
        Some(self.apply(settlement))
    }

    /// Apply every settlement that has already arrived
    pub fn drain_settlements(&mut self) -> Vec<Applied> {
        let mut applied = Vec::new();
        while let Ok(settlement) = self.settlement_rx.try_recv() {
            applied.push(self.apply(settlement));
        }
        applied
    }

    /// Settle everything currently in flight
    pub async fn wait_idle(&mut self) -> Vec<Applied> {
        let mut applied = Vec::new();
        while let Some(outcome) = self.settle_next().await {
            applied.push(outcome);
        }
        applied
    }
}
