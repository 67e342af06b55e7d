//! Debounced search input
//!
//! Keystrokes are fed in as they happen; a query runs only after the input
//! has been quiet for the configured period, and never twice in a row.

use crate::service::{HierarchyService, SearchOutcome};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Handle onto a background debouncing task
///
/// Must be created inside a tokio runtime. Dropping the handle stops the
/// task; a query still waiting out its quiet period is discarded.
#[derive(Debug)]
pub struct SearchDebouncer {
    input: mpsc::UnboundedSender<String>,
    outcomes: watch::Receiver<Option<SearchOutcome>>,
    task: JoinHandle<()>,
}

impl SearchDebouncer {
    /// Spawn a debouncer using the service's configured quiet period
    #[must_use]
    pub fn spawn(service: HierarchyService) -> Self {
        let quiet = service.config().search_debounce();
        let (input, rx) = mpsc::unbounded_channel();
        let (tx, outcomes) = watch::channel(None);
        let task = tokio::spawn(run(service, rx, tx, quiet));
        Self {
            input,
            outcomes,
            task,
        }
    }

    /// Feed the latest text of the search box
    pub fn submit(&self, query: impl Into<String>) {
        // Only fails once the task is gone, at which point nothing listens
        let _ = self.input.send(query.into());
    }

    /// Subscribe to executed searches; `None` until the first one runs
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<SearchOutcome>> {
        self.outcomes.clone()
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    service: HierarchyService,
    mut input: mpsc::UnboundedReceiver<String>,
    outcomes: watch::Sender<Option<SearchOutcome>>,
    quiet: Duration,
) {
    let mut last: Option<String> = None;

    while let Some(mut query) = input.recv().await {
        // Restart the quiet period on every newer query
        loop {
            match tokio::time::timeout(quiet, input.recv()).await {
                Ok(Some(newer)) => query = newer,
                Ok(None) => return,
                Err(_) => break,
            }
        }

        if last.as_deref() == Some(query.as_str()) {
            tracing::debug!(query = %query, "skipping repeated query");
            continue;
        }

        tracing::debug!(query = %query, "debounced search firing");
        let outcome = service.search_and_expand(&query);
        last = Some(query);
        outcomes.send_replace(Some(outcome));
    }
}
