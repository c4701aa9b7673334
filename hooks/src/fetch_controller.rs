use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::pin;
use std::rc::Rc;

use futures::future::{select, Either};
use leptos::logging;
use serde::de::DeserializeOwned;
use slotmap::{new_key_type, SlotMap};

use crate::cancellation::{abort_pair, AbortHandle};
use crate::timeout::sleep;
use crate::{
    AbortSignal, FetchError, FetchState, RequestIdentity, Transport, TransportError,
    TransportResponse,
};

new_key_type! {
    /// Identifies a listener registered with [`FetchController::subscribe`].
    pub struct ListenerKey;
}

type Listener<T> = Rc<dyn Fn(&FetchState<T>)>;

/// Owns the lifecycle of one outstanding request at a time.
///
/// Every call to [`FetchController::start`] supersedes the previous attempt. A superseded
/// attempt is aborted and can no longer change the state, even if its transport keeps
/// running.
pub struct FetchController<T, Tr> {
    transport: Rc<Tr>,
    state: Rc<RefCell<FetchState<T>>>,
    listeners: Rc<RefCell<SlotMap<ListenerKey, Listener<T>>>>,
    in_flight: Rc<RefCell<Option<AbortHandle>>>,
    torn_down: Rc<Cell<bool>>,
}

impl<T, Tr> Clone for FetchController<T, Tr> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            state: self.state.clone(),
            listeners: self.listeners.clone(),
            in_flight: self.in_flight.clone(),
            torn_down: self.torn_down.clone(),
        }
    }
}

impl<T, Tr> std::fmt::Debug for FetchController<T, Tr>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchController")
            .field("state", &self.state.borrow())
            .field("in_flight", &self.in_flight.borrow().is_some())
            .field("torn_down", &self.torn_down.get())
            .field("listeners", &"...")
            .finish()
    }
}

enum Outcome<T> {
    Settled(Result<T, Failure>),
    Aborted,
    TimedOut,
}

enum Failure {
    Aborted,
    Error(FetchError),
}

impl From<FetchError> for Failure {
    fn from(error: FetchError) -> Self {
        Failure::Error(error)
    }
}

impl From<TransportError> for Failure {
    fn from(error: TransportError) -> Self {
        match Option::<FetchError>::from(error) {
            Some(error) => Failure::Error(error),
            None => Failure::Aborted,
        }
    }
}

impl<T, Tr> FetchController<T, Tr>
where
    T: DeserializeOwned + Clone + 'static,
    Tr: Transport + 'static,
{
    /// Creates an idle controller.
    pub fn new(transport: Tr) -> Self {
        Self {
            transport: Rc::new(transport),
            state: Rc::new(RefCell::new(FetchState::Idle)),
            listeners: Rc::new(RefCell::new(SlotMap::with_key())),
            in_flight: Rc::new(RefCell::new(None)),
            torn_down: Rc::new(Cell::new(false)),
        }
    }

    /// Current state.
    pub fn state(&self) -> FetchState<T> {
        self.state.borrow().clone()
    }

    /// Whether an attempt is currently owned by this controller.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.borrow().is_some()
    }

    /// Registers a listener that receives every state transition.
    pub fn subscribe(&self, listener: impl Fn(&FetchState<T>) + 'static) -> ListenerKey {
        self.listeners.borrow_mut().insert(Rc::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, key: ListenerKey) -> bool {
        self.listeners.borrow_mut().remove(key).is_some()
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Supersedes the current attempt and begins a new one for `identity`.
    ///
    /// Returns the attempt future, which must be spawned by the caller. Returns `None` when
    /// there is nothing to fetch: the identity is empty, or the controller was torn down.
    pub fn start(&self, identity: RequestIdentity) -> Option<impl Future<Output = ()> + 'static> {
        if self.torn_down.get() {
            logging::debug_warn!("FetchController::start: controller was torn down");
            return None;
        }

        self.cancel();

        if identity.is_empty() {
            if !self.state.borrow().is_idle() {
                self.transition(FetchState::Idle);
            }
            return None;
        }

        let (handle, signal) = abort_pair();
        *self.in_flight.borrow_mut() = Some(handle.clone());
        self.transition(FetchState::Loading);

        let controller = self.clone();
        Some(async move { controller.run(identity, handle, signal).await })
    }

    /// Aborts the in-flight attempt, if any. Its result will never be observed.
    pub fn cancel(&self) {
        let handle = self.in_flight.borrow_mut().take();
        if let Some(handle) = handle {
            handle.abort();
        }
    }

    /// Cancels the in-flight attempt and stops all further transitions.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        self.cancel();
        self.listeners.borrow_mut().clear();
    }

    async fn run(self, identity: RequestIdentity, handle: AbortHandle, signal: AbortSignal) {
        let outcome = {
            let fetch = pin!(self.fetch_data(&identity, &signal));
            let aborted = pin!(signal.aborted());
            let settled = async move {
                match select(fetch, aborted).await {
                    Either::Left((result, _)) => Outcome::Settled(result),
                    Either::Right(_) => Outcome::Aborted,
                }
            };

            match identity.timeout {
                Some(timeout) => {
                    let settled = pin!(settled);
                    let timer = pin!(sleep(timeout));
                    // Dropping the loser disarms it.
                    match select(settled, timer).await {
                        Either::Left((outcome, _)) => outcome,
                        Either::Right(_) => Outcome::TimedOut,
                    }
                }
                None => settled.await,
            }
        };

        match outcome {
            Outcome::Settled(Ok(data)) => self.settle(&signal, FetchState::Success(data)),
            Outcome::Settled(Err(Failure::Error(error))) => {
                self.settle(&signal, FetchState::Failed(error))
            }
            // Superseded or torn down.
            Outcome::Settled(Err(Failure::Aborted)) | Outcome::Aborted => {}
            Outcome::TimedOut => {
                // Only the first abort wins, a superseded attempt stays silent.
                if handle.abort() {
                    self.transition(FetchState::Failed(FetchError::Timeout));
                }
            }
        }

        self.release(&handle);
    }

    async fn fetch_data(&self, identity: &RequestIdentity, signal: &AbortSignal) -> Result<T, Failure> {
        let response = self
            .transport
            .fetch(&identity.url, &identity.options, signal.clone())
            .await?;

        if !response.ok() {
            return Err(FetchError::http(response.status(), response.status_text()).into());
        }
        if signal.is_aborted() {
            return Err(Failure::Aborted);
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|error| FetchError::Decode(error.to_string()).into())
    }

    fn settle(&self, signal: &AbortSignal, state: FetchState<T>) {
        if signal.is_aborted() {
            return;
        }
        self.transition(state);
    }

    fn release(&self, handle: &AbortHandle) {
        let mut in_flight = self.in_flight.borrow_mut();
        if in_flight.as_ref().is_some_and(|current| current.is(handle)) {
            *in_flight = None;
        }
    }

    fn transition(&self, state: FetchState<T>) {
        *self.state.borrow_mut() = state.clone();
        // Collect first, a listener may unsubscribe while being notified.
        let listeners: Vec<Listener<T>> = self.listeners.borrow().values().cloned().collect();
        for listener in listeners {
            listener(&state);
        }
    }
}
