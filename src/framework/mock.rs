//! # Mock Framework
//!
//! Utilities for testing clients and views without spawning a real actor.
//!
//! | | MockClient | Real Actor |
//! |---|---|---|
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **State** | None (expectations only) | Real store and version |
//! | **Error Injection** | `return_err` | Requires specific state |
//!
//! Two styles are available:
//!
//! - [`create_mock_client`] with the `expect_*` receiver helpers: the test
//!   plays the actor by hand and inspects each request.
//! - [`MockClient`]: queue responses up front, run the code under test, then
//!   call [`MockClient::verify`].
//!
//! ```rust
//! use storefront_inventory::framework::mock::MockClient;
//! use storefront_inventory::framework::Snapshot;
//! use storefront_inventory::model::InventoryRecord;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<InventoryRecord>::new();
//!     mock.expect_version().return_ok(7);
//!     mock.expect_snapshot().return_ok(Snapshot { version: 7, items: vec![] });
//!
//!     let client = mock.client();
//!     assert_eq!(client.version().await.unwrap(), 7);
//!     assert!(client.snapshot().await.unwrap().items.is_empty());
//!     mock.verify();
//! }
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Snapshot};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to send back.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Update {
        response: Result<T, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
    Snapshot {
        response: Result<Snapshot<T>, FrameworkError>,
    },
    Version {
        response: Result<u64, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: ActorEntity>(queue: &Queue<T>, expectation: Expectation<T>) {
    if let Ok(mut exps) = queue.lock() {
        exps.push_back(expectation);
    }
}

/// A mock client with expectation tracking for fluent testing.
///
/// Requests are matched against expectations strictly in order; a request that
/// does not match the next expectation panics the mock task, which surfaces in
/// the test as `ActorDropped`.
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
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().ok().and_then(|mut exps| exps.pop_front());

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { respond_to, .. },
                        Some(Expectation::Update { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { respond_to, .. },
                        Some(Expectation::Action { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Version { respond_to },
                        Some(Expectation::Version { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
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
    pub fn expect_get(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Get { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Create { response })
    }

    /// Expects an `update` operation.
    pub fn expect_update(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Update { response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self) -> ExpectationBuilder<T, T::ActionResult> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Action { response })
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> ExpectationBuilder<T, Snapshot<T>> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Snapshot { response })
    }

    /// Expects a `version` operation.
    pub fn expect_version(&mut self) -> ExpectationBuilder<T, u64> {
        ExpectationBuilder::new(&self.expectations, |response| Expectation::Version { response })
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.lock().map(|exps| exps.len()).unwrap_or(0)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with `return_ok` or `return_err`.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    expectations: Queue<T>,
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    fn new(expectations: &Queue<T>, wrap: fn(Result<R, FrameworkError>) -> Expectation<T>) -> Self {
        Self {
            expectations: expectations.clone(),
            wrap,
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        push(&self.expectations, (self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, (self.wrap)(Err(error)));
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test then plays the actor: pull the next request with one of the
/// `expect_*` helpers, assert on its payload and answer through the responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Update, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update {
            id,
            update,
            respond_to,
        }) => Some((id, update, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
