//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`], but the requests it receives are
//! answered from a queue of expectations instead of a store. Use it to test one real actor
//! whose `on_create` consults other actors, without spawning those other actors.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real ordered store |
//! | **Determinism** | Full | Full per actor, scheduler across actors |
//! | **Error injection** | `return_err(..)` | Requires building the failing state |
//!
//! ## Pattern: Actor with Mocked Dependencies
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Ward { id: u32, beds: u32 }
//! #[derive(Debug)] struct WardCreate;
//! #[derive(Debug)] struct WardUpdate;
//! #[derive(Debug)] enum WardAction {}
//! #[derive(Debug, thiserror::Error)] #[error("ward error")] struct WardError;
//!
//! #[async_trait]
//! impl ActorEntity for Ward {
//!     type Id = u32; type Create = WardCreate; type Update = WardUpdate;
//!     type Action = WardAction; type ActionResult = (); type Context = (); type Error = WardError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: WardCreate) -> Result<Self, WardError> { Ok(Self { id, beds: 0 }) }
//!     async fn on_update(&mut self, _: WardUpdate, _: &()) -> Result<(), WardError> { Ok(()) }
//!     async fn handle_action(&mut self, _: WardAction, _: &()) -> Result<(), WardError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Ward>::new();
//!     mock.expect_get(1).return_ok(Some(Ward { id: 1, beds: 12 }));
//!     mock.expect_get(2).return_err(FrameworkError::ActorClosed);
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().beds, 12);
//!     assert!(matches!(client.get(2).await, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! Expectations are consumed in the order they were registered. A request that does not
//! match the next expectation panics the mock task, and the caller sees
//! `FrameworkError::ActorDropped`.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// One scripted answer, matched against the next request received by the mock.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<usize, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime: the answering task is spawned here.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().expect("mock queue poisoned").pop_front();
                answer(request, expectation);
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, usize> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().expect("mock queue poisoned").len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }
}

/// Completes an expectation with the answer the mock should give.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        let expectation = (self.make)(response);
        self.expectations
            .lock()
            .expect("mock queue poisoned")
            .push_back(expectation);
    }
}

fn answer<T: ActorEntity>(request: ResourceRequest<T>, expectation: Option<Expectation<T>>) {
    match (request, expectation) {
        (
            ResourceRequest::Get { id, respond_to },
            Some(Expectation::Get { id: want, response }),
        ) => {
            assert_eq!(id, want, "get called with unexpected id");
            let _ = respond_to.send(response);
        }
        (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            assert_eq!(id, want, "update called with unexpected id");
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => {
            assert_eq!(id, want, "delete called with unexpected id");
            let _ = respond_to.send(response);
        }
        (
            ResourceRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => {
            assert_eq!(id, want, "action called with unexpected id");
            let _ = respond_to.send(response);
        }
        (request, _) => panic!("Unexpected request or expectation mismatch: {:?}", request),
    }
}

/// Creates a client and the raw receiver behind it.
///
/// For tests that want to inspect each request themselves rather than script answers.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Bed {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct BedCreate {
        label: String,
    }

    #[derive(Debug)]
    struct BedUpdate;

    #[derive(Debug)]
    enum BedAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Bed error")]
    struct BedError;

    #[async_trait]
    impl ActorEntity for Bed {
        type Id = u32;
        type Create = BedCreate;
        type Update = BedUpdate;
        type Action = BedAction;
        type ActionResult = ();
        type Context = ();
        type Error = BedError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn from_create_params(id: u32, params: BedCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }

        async fn on_update(&mut self, _update: BedUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(
            &mut self,
            _action: BedAction,
            _ctx: &(),
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn bed(id: u32, label: &str) -> Bed {
        Bed {
            id,
            label: label.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_receiver() {
        let (client, mut receiver) = create_mock_client::<Bed>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(BedCreate {
                    label: "A1".to_string(),
                })
                .await
        });

        match receiver.recv().await {
            Some(ResourceRequest::Create { params, respond_to }) => {
                assert_eq!(params.label, "A1");
                respond_to.send(Ok(7)).unwrap();
            }
            other => panic!("expected Create, got {:?}", other),
        }

        let result = create_task.await.unwrap();
        assert!(matches!(result, Ok(7)));
    }

    #[tokio::test]
    async fn test_scripted_answers_in_order() {
        let mut mock = MockClient::<Bed>::new();
        mock.expect_create().return_ok(1);
        mock.expect_get(1).return_ok(Some(bed(1, "A1")));
        mock.expect_list().return_ok(vec![bed(1, "A1"), bed(2, "A2")]);
        mock.expect_delete(2).return_ok(1);

        let client = mock.client();
        let id = client
            .create(BedCreate {
                label: "A1".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.get(1).await.unwrap(), Some(bed(1, "A1")));
        assert_eq!(client.list().await.unwrap().len(), 2);
        assert_eq!(client.delete(2).await.unwrap(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_scripted_errors() {
        let mut mock = MockClient::<Bed>::new();
        mock.expect_update(3).return_err(FrameworkError::NotFound {
            entity_type: "Bed",
            id: "3".to_string(),
        });

        let result = mock.client().update(3, BedUpdate).await;
        assert!(matches!(result, Err(FrameworkError::NotFound { .. })));
        mock.verify();
    }

    #[tokio::test]
    #[should_panic(expected = "Not all expectations were met")]
    async fn test_verify_reports_leftovers() {
        let mut mock = MockClient::<Bed>::new();
        mock.expect_get(1).return_ok(None);
        mock.verify();
    }
}
