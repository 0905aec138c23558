//! Owns the converter state and runs its rate fetches.

use crate::core::rate::{RateOutcome, RateProvider, resolve_rate};
use crate::core::screen::{ConverterState, Event, FetchRequest, reduce};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Result of a finished fetch, tagged with the generation that requested it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateUpdate {
    pub generation: u64,
    pub outcome: RateOutcome,
}

pub struct ScreenController {
    state: ConverterState,
    provider: Arc<dyn RateProvider>,
    in_flight: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<RateUpdate>,
    rx: mpsc::UnboundedReceiver<RateUpdate>,
}

impl ScreenController {
    pub fn new(state: ConverterState, provider: Arc<dyn RateProvider>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            provider,
            in_flight: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ConverterState {
        &self.state
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// True while a fetch is running or its result is waiting to be applied.
    pub fn has_pending(&self) -> bool {
        self.in_flight.is_some() || !self.rx.is_empty()
    }

    /// Applies an edit. Currency changes start a fetch for the new pair.
    pub fn dispatch(&mut self, event: Event) {
        let transition = reduce(self.state.clone(), event);
        self.state = transition.state;
        if let Some(request) = transition.fetch {
            self.spawn_fetch(request);
        }
    }

    /// Fetches the rate for the current pair without changing anything else.
    pub fn refresh(&mut self) {
        let to = self.state.to_currency.clone();
        self.dispatch(Event::ToCurrencyChanged(to));
    }

    /// Waits for the next finished fetch and applies it.
    ///
    /// Returns `None` if no fetch has been started. Results from superseded
    /// generations are received but leave the state unchanged.
    pub async fn next_rate_update(&mut self) -> Option<RateUpdate> {
        if !self.has_pending() {
            return None;
        }
        let update = self.rx.recv().await?;
        if update.generation == self.state.generation {
            self.in_flight = None;
        } else {
            debug!(
                generation = update.generation,
                latest = self.state.generation,
                "Discarding stale rate"
            );
        }
        self.dispatch(Event::RateResolved {
            generation: update.generation,
            outcome: update.outcome,
        });
        Some(update)
    }

    /// Waits until the latest requested fetch has been applied.
    pub async fn settle(&mut self) {
        while self.in_flight.is_some() {
            if self.next_rate_update().await.is_none() {
                break;
            }
        }
    }

    fn spawn_fetch(&mut self, request: FetchRequest) {
        if let Some(previous) = self.in_flight.take() {
            debug!("Aborting superseded rate fetch");
            previous.abort();
        }

        let provider = Arc::clone(&self.provider);
        let tx = self.tx.clone();
        debug!(
            generation = request.generation,
            from = %request.from,
            to = %request.to,
            "Starting rate fetch"
        );
        self.in_flight = Some(tokio::spawn(async move {
            let outcome =
                resolve_rate(provider.as_ref(), &request.from, &request.to, request.amount).await;
            // The receiver only goes away with the controller.
            let _ = tx.send(RateUpdate {
                generation: request.generation,
                outcome,
            });
        }));
    }
}

impl Drop for ScreenController {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
