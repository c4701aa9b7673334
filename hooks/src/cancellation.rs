use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures_channel::oneshot;
use leptos::logging;

struct AbortState {
    aborted: Cell<bool>,
    listeners: RefCell<Vec<Box<dyn FnOnce()>>>,
}

/// Receiving side of an attempt's cancellation.
///
/// Handed to a [`Transport`](crate::Transport) so it can stop the underlying request, and
/// checked by the controller before every state transition.
#[derive(Clone)]
pub struct AbortSignal(Rc<AbortState>);

/// Owning side of an attempt's cancellation.
#[derive(Clone)]
pub(crate) struct AbortHandle(Rc<AbortState>);

pub(crate) fn abort_pair() -> (AbortHandle, AbortSignal) {
    let state = Rc::new(AbortState {
        aborted: Cell::new(false),
        listeners: RefCell::new(Vec::new()),
    });
    (AbortHandle(state.clone()), AbortSignal(state))
}

impl AbortHandle {
    /// Aborts the attempt. Returns `false` if it was already aborted.
    pub(crate) fn abort(&self) -> bool {
        if self.0.aborted.replace(true) {
            return false;
        }
        // Release the borrow before running, listeners may register more.
        let listeners = std::mem::take(&mut *self.0.listeners.borrow_mut());
        for listener in listeners {
            listener();
        }
        true
    }

    pub(crate) fn is(&self, other: &AbortHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl AbortSignal {
    /// Whether the attempt has been aborted or superseded.
    pub fn is_aborted(&self) -> bool {
        self.0.aborted.get()
    }

    /// Runs `listener` once when the attempt is aborted.
    /// Runs immediately if it already was.
    pub fn on_abort(&self, listener: impl FnOnce() + 'static) {
        if self.is_aborted() {
            listener();
        } else {
            self.0.listeners.borrow_mut().push(Box::new(listener));
        }
    }

    /// Resolves once the attempt is aborted.
    pub async fn aborted(&self) {
        if self.is_aborted() {
            return;
        }
        let (sender, receiver) = oneshot::channel();
        self.on_abort(move || {
            let _ = sender.send(());
        });
        if receiver.await.is_err() {
            logging::debug_warn!("Abort listener was dropped before firing.");
            futures::future::pending::<()>().await;
        }
    }
}

impl std::fmt::Debug for AbortSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AbortSignal")
            .field("aborted", &self.is_aborted())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::FutureExt;

    #[test]
    fn abort_is_idempotent() {
        let (handle, signal) = abort_pair();
        let fired = Rc::new(Cell::new(0));

        signal.on_abort({
            let fired = fired.clone();
            move || fired.set(fired.get() + 1)
        });

        assert!(!signal.is_aborted());
        assert!(handle.abort());
        assert!(!handle.abort());
        assert!(signal.is_aborted());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn late_listener_runs_immediately() {
        let (handle, signal) = abort_pair();
        handle.abort();

        let fired = Rc::new(Cell::new(false));
        signal.on_abort({
            let fired = fired.clone();
            move || fired.set(true)
        });

        assert!(fired.get());
    }

    #[test]
    fn aborted_future_resolves_after_abort() {
        let (handle, signal) = abort_pair();

        let waiting = signal.aborted();
        futures::pin_mut!(waiting);
        assert!(waiting.as_mut().now_or_never().is_none());

        handle.abort();
        assert!(waiting.now_or_never().is_some());
    }

    #[test]
    fn handles_compare_by_attempt() {
        let (handle, _) = abort_pair();
        let (other, _) = abort_pair();

        assert!(handle.is(&handle.clone()));
        assert!(!handle.is(&other));
    }
}
