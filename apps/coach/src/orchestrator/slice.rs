//! Generic async-submission container shared by every feature slice.
//!
//! A `Slice<V>` owns a busy flag and the slice's view state `V`. Each submit is
//! described by an [`Action`]: how to build the request from the view, which
//! endpoint to call, and how the outcome lands back in the view.
//!
//! State machine: `Idle → Submitting → {Succeeded, Failed} → Idle`. The lock is
//! never held across the network call, so slices never block each other.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::backend::CoachBackend;
use crate::errors::ClientError;
use crate::orchestrator::events::{CoachEvent, Feature, SubmitStatus, Trigger};

/// One submit operation against a slice with view state `Self::View`.
pub trait Action: Send {
    type View: Send;
    type Request: Serialize + Send;
    type Response: DeserializeOwned;

    const PATH: &'static str;

    /// Which of the slice's triggers this action belongs to.
    const TRIGGER: Trigger = Trigger::Primary;

    /// Builds the request from the current view. `None` means required input is
    /// blank and the submit is a no-op.
    fn prepare(&self, view: &Self::View) -> Option<Self::Request>;

    /// Runs once the slice is marked busy, before the request leaves.
    fn on_start(&self, _view: &mut Self::View, _request: &Self::Request) {}

    /// Extracts the named field into the view. An `Err` routes to `on_failure`.
    fn on_success(&self, view: &mut Self::View, response: Self::Response)
        -> Result<(), ClientError>;

    /// Replaces the result with the feature's fallback text.
    fn on_failure(&self, view: &mut Self::View);
}

struct SliceState<V> {
    busy: bool,
    view: V,
}

pub struct Slice<V> {
    feature: Feature,
    state: Mutex<SliceState<V>>,
}

/// Clears the busy flag however the submit ends, including when the submitting
/// future is dropped mid-flight.
struct BusyGuard<'a, V> {
    slice: &'a Slice<V>,
}

impl<V> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.slice.lock().busy = false;
    }
}

impl<V> Slice<V> {
    pub fn new(feature: Feature, view: V) -> Self {
        Self {
            feature,
            state: Mutex::new(SliceState { busy: false, view }),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.lock().busy
    }

    /// Reads the view state.
    pub fn read<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.lock().view)
    }

    /// Edits the view state (draft inputs). Allowed while busy.
    pub fn edit<R>(&self, f: impl FnOnce(&mut V) -> R) -> R {
        f(&mut self.lock().view)
    }

    fn lock(&self) -> MutexGuard<'_, SliceState<V>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Send> Slice<V> {
    /// Runs `action` through the submit contract. Never returns an error: failures
    /// are written into the view as fallback text.
    pub async fn submit<A>(
        &self,
        backend: &dyn CoachBackend,
        events: &broadcast::Sender<CoachEvent>,
        action: A,
    ) -> SubmitStatus
    where
        A: Action<View = V>,
    {
        let request = {
            let mut state = self.lock();
            let Some(request) = action.prepare(&state.view) else {
                debug!(feature = %self.feature, "Submit skipped: required input is blank");
                return SubmitStatus::Skipped;
            };
            if state.busy {
                debug!(feature = %self.feature, "Submit ignored: request already in flight");
                return SubmitStatus::Busy;
            }
            state.busy = true;
            action.on_start(&mut state.view, &request);
            request
        };
        let guard = BusyGuard { slice: self };
        let _ = events.send(CoachEvent::Started(self.feature, A::TRIGGER));

        let outcome = match serde_json::to_value(&request) {
            Ok(body) => backend
                .post_json(A::PATH, body)
                .await
                .and_then(|value| {
                    serde_json::from_value::<A::Response>(value).map_err(ClientError::from)
                }),
            Err(e) => Err(ClientError::Malformed(e)),
        };

        let status = {
            let mut state = self.lock();
            let applied = outcome.and_then(|response| action.on_success(&mut state.view, response));
            match applied {
                Ok(()) => SubmitStatus::Succeeded,
                Err(e) => {
                    warn!(feature = %self.feature, kind = e.kind(), "Request failed: {e}");
                    action.on_failure(&mut state.view);
                    SubmitStatus::Failed
                }
            }
        };
        drop(guard);

        let _ = events.send(CoachEvent::Finished(self.feature, status));
        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::FakeBackend;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Arc;

    #[derive(Default)]
    struct EchoView {
        input: String,
        output: Option<String>,
        starts: u32,
    }

    #[derive(Serialize)]
    struct EchoRequest {
        text: String,
    }

    #[derive(Deserialize)]
    struct EchoResponse {
        echo: String,
    }

    struct Echo;

    impl Action for Echo {
        type View = EchoView;
        type Request = EchoRequest;
        type Response = EchoResponse;

        const PATH: &'static str = "/echo";

        fn prepare(&self, view: &EchoView) -> Option<EchoRequest> {
            (!view.input.trim().is_empty()).then(|| EchoRequest {
                text: view.input.clone(),
            })
        }

        fn on_start(&self, view: &mut EchoView, _request: &EchoRequest) {
            view.output = None;
            view.starts += 1;
        }

        fn on_success(&self, view: &mut EchoView, response: EchoResponse) -> Result<(), ClientError> {
            view.output = Some(response.echo);
            Ok(())
        }

        fn on_failure(&self, view: &mut EchoView) {
            view.output = Some("Echo failed".into());
        }
    }

    fn echo_slice(input: &str) -> Slice<EchoView> {
        Slice::new(
            Feature::Chat,
            EchoView {
                input: input.into(),
                ..Default::default()
            },
        )
    }

    #[tokio::test]
    async fn test_blank_input_is_noop() {
        let backend = FakeBackend::replying(vec![]);
        let (tx, mut rx) = broadcast::channel(8);
        let slice = echo_slice("   ");

        let status = slice.submit(&backend, &tx, Echo).await;

        assert_eq!(status, SubmitStatus::Skipped);
        assert_eq!(backend.call_count(), 0);
        assert!(!slice.is_busy());
        assert_eq!(slice.read(|v| v.starts), 0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_success_writes_result_and_clears_busy() {
        let backend = FakeBackend::replying(vec![Ok(json!({ "echo": "hi" }))]);
        let (tx, mut rx) = broadcast::channel(8);
        let slice = echo_slice("hi");

        let status = slice.submit(&backend, &tx, Echo).await;

        assert_eq!(status, SubmitStatus::Succeeded);
        assert_eq!(backend.last_call(), Some(("/echo".into(), json!({ "text": "hi" }))));
        assert_eq!(slice.read(|v| v.output.clone()).as_deref(), Some("hi"));
        assert!(!slice.is_busy());
        assert_eq!(
            rx.try_recv().unwrap(),
            CoachEvent::Started(Feature::Chat, Trigger::Primary)
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            CoachEvent::Finished(Feature::Chat, SubmitStatus::Succeeded)
        );
    }

    #[tokio::test]
    async fn test_transport_failure_shows_fallback() {
        let backend = FakeBackend::replying(vec![Err(ClientError::Status {
            status: 502,
            body: String::new(),
        })]);
        let (tx, _rx) = broadcast::channel(8);
        let slice = echo_slice("hi");

        assert_eq!(slice.submit(&backend, &tx, Echo).await, SubmitStatus::Failed);
        assert_eq!(slice.read(|v| v.output.clone()).as_deref(), Some("Echo failed"));
        assert!(!slice.is_busy());
    }

    #[tokio::test]
    async fn test_malformed_response_shows_fallback() {
        let backend = FakeBackend::replying(vec![Ok(json!({ "echo": 42 }))]);
        let (tx, _rx) = broadcast::channel(8);
        let slice = echo_slice("hi");

        assert_eq!(slice.submit(&backend, &tx, Echo).await, SubmitStatus::Failed);
        assert_eq!(slice.read(|v| v.output.clone()).as_deref(), Some("Echo failed"));
    }

    #[tokio::test]
    async fn test_second_submit_while_busy_is_rejected() {
        let backend = Arc::new(FakeBackend::gated(vec![Ok(json!({ "echo": "first" }))]));
        let (tx, _rx) = broadcast::channel(8);
        let slice = Arc::new(echo_slice("hi"));

        let first = {
            let (backend, slice, tx) = (backend.clone(), slice.clone(), tx.clone());
            tokio::spawn(async move { slice.submit(backend.as_ref(), &tx, Echo).await })
        };
        while backend.call_count() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(slice.is_busy());

        assert_eq!(slice.submit(backend.as_ref(), &tx, Echo).await, SubmitStatus::Busy);
        assert_eq!(backend.call_count(), 1);
        assert_eq!(slice.read(|v| v.starts), 1);

        backend.gate.as_ref().unwrap().notify_one();
        assert_eq!(first.await.unwrap(), SubmitStatus::Succeeded);
        assert!(!slice.is_busy());
    }

    #[tokio::test]
    async fn test_dropped_submit_releases_busy() {
        let backend = FakeBackend::gated(vec![]);
        let (tx, _rx) = broadcast::channel(8);
        let slice = echo_slice("hi");

        {
            let fut = slice.submit(&backend, &tx, Echo);
            tokio::pin!(fut);
            assert!(futures_poll_once(fut.as_mut()).await.is_none());
            assert!(slice.is_busy());
        }
        assert!(!slice.is_busy());
    }

    async fn futures_poll_once<F: std::future::Future + Unpin>(fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            out = fut => Some(out),
            _ = tokio::task::yield_now() => None,
        }
    }
}
