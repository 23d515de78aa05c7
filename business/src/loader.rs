//! One-shot loading of the similarity matches into view state.
//!
//! `ehttp::fetch` completes on a background thread (native) or the JS event
//! loop (web). Results travel back to the UI thread as [`FetchEvent`]s over
//! a `flume` channel which the view drains once per frame.

use log::{error, info};

use crate::api::{FetchError, decode_response, similarity_request};
use crate::config::SimilarityConfig;
use crate::matches::MatchRow;
use crate::view_state::SimilarityViewState;

/// Messages published by an in-flight fetch, in this order.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    /// The fetch succeeded; these rows replace the current ones.
    Loaded(Vec<MatchRow>),
    /// The fetch is over, whatever its outcome.
    Settled,
}

pub type FetchEventSender = flume::Sender<FetchEvent>;
pub type FetchEventReceiver = flume::Receiver<FetchEvent>;

/// Create the channel fetches report through.
pub fn create_fetch_channel() -> (FetchEventSender, FetchEventReceiver) {
    flume::unbounded()
}

type Notify = Box<dyn FnOnce() + Send>;

/// Publishes [`FetchEvent::Settled`] when dropped.
///
/// The guard travels with the request callback, so a completed request, a
/// failed one, a panic while decoding, or a callback that never runs all end
/// with the settle event.
pub struct SettleGuard {
    sender: FetchEventSender,
    notify: Option<Notify>,
}

impl SettleGuard {
    pub fn new(sender: FetchEventSender, notify: impl FnOnce() + Send + 'static) -> Self {
        Self {
            sender,
            notify: Some(Box::new(notify)),
        }
    }

    fn publish(&self, event: FetchEvent) {
        // A dropped receiver means the view is gone; nobody is left to tell.
        let _ = self.sender.send(event);
    }
}

impl Drop for SettleGuard {
    fn drop(&mut self) {
        self.publish(FetchEvent::Settled);
        if let Some(notify) = self.notify.take() {
            notify();
        }
    }
}

/// Issues `GET /similarity` and reports the outcome on `sender`.
///
/// `notify` runs once after the settle event is sent; the UI passes a repaint
/// request so the next frame picks the rows up. Failures are logged and never
/// reach the caller.
pub fn load_matches(
    config: &SimilarityConfig,
    sender: FetchEventSender,
    notify: impl FnOnce() + Send + 'static,
) {
    let url = config.similarity_url();
    info!("Fetching similarity matches from {url}");

    let guard = SettleGuard::new(sender, notify);

    ehttp::fetch(similarity_request(config), move |result| {
        let outcome = result
            .map_err(FetchError::Transport)
            .and_then(|response| decode_response(&response));

        match outcome {
            Ok(rows) => {
                info!("Loaded {} similarity matches", rows.len());
                guard.publish(FetchEvent::Loaded(rows));
            }
            Err(err) => {
                error!("Failed to load product similarity data: {err}");
            }
        }
        drop(guard);
    });
}

/// Owns the view state together with the channel that feeds it.
///
/// Each loader fetches exactly once, on its first [`MatchesLoader::mount`].
#[derive(Debug)]
pub struct MatchesLoader {
    sender: FetchEventSender,
    receiver: FetchEventReceiver,
    mounted: bool,
    view: SimilarityViewState,
}

impl Default for MatchesLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchesLoader {
    pub fn new() -> Self {
        let (sender, receiver) = create_fetch_channel();
        Self {
            sender,
            receiver,
            mounted: false,
            view: SimilarityViewState::default(),
        }
    }

    /// Starts the fetch the first time it is called; later calls do nothing.
    ///
    /// Returns whether a fetch was started.
    pub fn mount(
        &mut self,
        config: &SimilarityConfig,
        notify: impl FnOnce() + Send + 'static,
    ) -> bool {
        if self.mounted {
            return false;
        }
        self.mounted = true;
        load_matches(config, self.sender.clone(), notify);
        true
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Applies every event published since the last poll.
    ///
    /// Returns whether anything changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        for event in self.receiver.try_iter() {
            self.view.apply(event);
            changed = true;
        }
        changed
    }

    pub fn view(&self) -> &SimilarityViewState {
        &self.view
    }

    /// Sender for events produced outside [`MatchesLoader::mount`].
    pub fn sender(&self) -> FetchEventSender {
        self.sender.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn row(serial_number: usize, code: &str) -> MatchRow {
        MatchRow {
            serial_number,
            source_code: code.to_owned(),
            source_description: String::new(),
            target_code: String::new(),
            target_description: String::new(),
            similarity_score: None,
        }
    }

    #[test]
    fn guard_settles_on_drop_and_notifies_once() {
        let (sender, receiver) = create_fetch_channel();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let guard = SettleGuard::new(sender, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert!(receiver.is_empty(), "nothing is published before drop");

        drop(guard);

        assert_eq!(receiver.try_iter().collect::<Vec<_>>(), vec![FetchEvent::Settled]);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn guard_settles_even_when_callback_panics() {
        let (sender, receiver) = create_fetch_channel();
        let guard = SettleGuard::new(sender, || {});

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _guard = guard;
            panic!("decoder blew up");
        }));

        assert!(result.is_err());
        assert_eq!(receiver.try_iter().collect::<Vec<_>>(), vec![FetchEvent::Settled]);
    }

    #[test]
    fn loaded_is_published_before_settled() {
        let (sender, receiver) = create_fetch_channel();
        let guard = SettleGuard::new(sender, || {});
        guard.publish(FetchEvent::Loaded(vec![row(1, "OR-1")]));
        drop(guard);

        let events: Vec<_> = receiver.try_iter().collect();
        assert_eq!(
            events,
            vec![FetchEvent::Loaded(vec![row(1, "OR-1")]), FetchEvent::Settled]
        );
    }

    #[test]
    fn poll_applies_pending_events() {
        let mut loader = MatchesLoader::new();
        assert!(!loader.poll(), "no events yet");
        assert!(loader.view().is_loading());

        let sender = loader.sender();
        sender
            .send(FetchEvent::Loaded(vec![row(1, "A"), row(2, "B")]))
            .unwrap();
        sender.send(FetchEvent::Settled).unwrap();

        assert!(loader.poll());
        assert!(!loader.view().is_loading());
        assert_eq!(loader.view().rows().len(), 2);
    }

    #[test]
    fn overlapping_fetches_last_response_wins() {
        let mut loader = MatchesLoader::new();
        let sender = loader.sender();

        sender.send(FetchEvent::Loaded(vec![row(1, "first")])).unwrap();
        sender.send(FetchEvent::Settled).unwrap();
        sender
            .send(FetchEvent::Loaded(vec![row(1, "second"), row(2, "second")]))
            .unwrap();
        sender.send(FetchEvent::Settled).unwrap();

        loader.poll();
        assert_eq!(loader.view().rows().len(), 2);
        assert_eq!(loader.view().rows()[0].source_code, "second");
    }
}
