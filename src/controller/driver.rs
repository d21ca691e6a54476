//! Tokio host for [`QuickSearchController`].
//!
//! One task owns the controller. It receives input events over a channel,
//! sleeps until the debounce deadline, polls in-flight cycles and publishes a
//! fresh [`PanelView`] after every step. Superseded cycles run to completion
//! and their results are dropped by the controller.

use std::sync::Arc;

use futures::StreamExt;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep_until};

use crate::controller::cycle::CycleId;
use crate::controller::{Effect, InputEvent, PanelView, QuickSearchController};
use crate::domain::navigation::NavigationRequest;
use crate::domain::suggestion::Suggestion;
use crate::services::ServiceResult;
use crate::services::quick_search::{SearchSources, search_suggestions};

type CycleFuture = BoxFuture<'static, (CycleId, ServiceResult<Vec<Suggestion>>)>;

/// Requests the driver forwards to the surrounding application.
#[derive(Clone, Debug, PartialEq)]
pub enum Outbound {
    Navigate(NavigationRequest),
    FocusInput,
}

/// Application-side end of a running driver.
#[derive(Clone, Debug)]
pub struct QuickSearchHandle {
    events: mpsc::UnboundedSender<InputEvent>,
    view: watch::Receiver<PanelView>,
}

impl QuickSearchHandle {
    /// Queues an input event. Returns `false` once the driver has stopped.
    pub fn send(&self, event: InputEvent) -> bool {
        self.events.send(event).is_ok()
    }

    pub fn view(&self) -> PanelView {
        self.view.borrow().clone()
    }

    /// Receiver notified whenever the view changes.
    pub fn subscribe(&self) -> watch::Receiver<PanelView> {
        self.view.clone()
    }
}

pub struct QuickSearchDriver<R: ?Sized> {
    repo: Arc<R>,
    controller: QuickSearchController,
    events: mpsc::UnboundedReceiver<InputEvent>,
    outbound: mpsc::UnboundedSender<Outbound>,
    view: watch::Sender<PanelView>,
    in_flight: FuturesUnordered<CycleFuture>,
}

impl<R> QuickSearchDriver<R>
where
    R: SearchSources + ?Sized + 'static,
{
    /// Creates a driver with its handle and the receiver of outbound requests.
    pub fn new(
        repo: Arc<R>,
        controller: QuickSearchController,
    ) -> (Self, QuickSearchHandle, mpsc::UnboundedReceiver<Outbound>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(controller.view());

        let driver = Self {
            repo,
            controller,
            events: events_rx,
            outbound: outbound_tx,
            view: view_tx,
            in_flight: FuturesUnordered::new(),
        };
        let handle = QuickSearchHandle {
            events: events_tx,
            view: view_rx,
        };

        (driver, handle, outbound_rx)
    }

    /// Processes events until every [`QuickSearchHandle`] is dropped.
    pub async fn run(mut self) {
        loop {
            let deadline = self.controller.next_deadline().map(Instant::from_std);

            tokio::select! {
                event = self.events.recv() => {
                    let Some(event) = event else {
                        break;
                    };
                    let effects = self.controller.handle(event, now());
                    self.apply(effects);
                }
                _ = sleep_until(deadline.unwrap_or_else(Instant::now)), if deadline.is_some() => {
                    let effects = self.controller.tick(now());
                    self.apply(effects);
                }
                Some((cycle, outcome)) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.controller.complete(cycle, outcome);
                }
            }

            self.view.send_if_modified(|view| {
                let next = self.controller.view();
                if *view == next {
                    false
                } else {
                    *view = next;
                    true
                }
            });
        }

        log::debug!("Quick search driver stopped");
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Dispatch {
                    cycle,
                    term,
                    filter,
                } => {
                    let repo = Arc::clone(&self.repo);
                    self.in_flight.push(Box::pin(async move {
                        let outcome = search_suggestions(&*repo, &term, filter).await;
                        (cycle, outcome)
                    }));
                }
                Effect::Navigate(request) => self.forward(Outbound::Navigate(request)),
                Effect::FocusInput => self.forward(Outbound::FocusInput),
            }
        }
    }

    fn forward(&self, request: Outbound) {
        if self.outbound.send(request).is_err() {
            log::warn!("Quick search request dropped: no outbound receiver");
        }
    }
}

fn now() -> std::time::Instant {
    Instant::now().into_std()
}
