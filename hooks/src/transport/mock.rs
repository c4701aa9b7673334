use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;

use crate::{AbortSignal, RequestOptions, Transport, TransportError, TransportResponse};

/// Scripted transport. Each url resolves after its route's delay, ignoring aborts.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    routes: Rc<RefCell<HashMap<String, MockRoute>>>,
    calls: Rc<RefCell<Vec<(String, RequestOptions)>>>,
    aborts: Rc<Cell<usize>>,
}

#[derive(Clone, Debug)]
pub(crate) struct MockRoute {
    delay: Duration,
    result: Result<MockResponse, TransportError>,
}

#[derive(Clone, Debug)]
pub(crate) struct MockResponse {
    status: u16,
    status_text: String,
    body: String,
}

impl MockRoute {
    pub(crate) fn ok(body: &str, delay_ms: u64) -> Self {
        Self::status(200, "OK", body, delay_ms)
    }

    pub(crate) fn status(status: u16, status_text: &str, body: &str, delay_ms: u64) -> Self {
        MockRoute {
            delay: Duration::from_millis(delay_ms),
            result: Ok(MockResponse {
                status,
                status_text: status_text.to_string(),
                body: body.to_string(),
            }),
        }
    }

    pub(crate) fn fail(error: TransportError, delay_ms: u64) -> Self {
        MockRoute {
            delay: Duration::from_millis(delay_ms),
            result: Err(error),
        }
    }
}

impl MockTransport {
    pub(crate) fn route(self, url: &str, route: MockRoute) -> Self {
        self.routes.borrow_mut().insert(url.to_string(), route);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub(crate) fn last_options(&self) -> Option<RequestOptions> {
        self.calls.borrow().last().map(|(_, options)| options.clone())
    }

    pub(crate) fn aborts(&self) -> usize {
        self.aborts.get()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    type Response = MockResponse;

    async fn fetch(
        &self,
        url: &str,
        options: &RequestOptions,
        signal: AbortSignal,
    ) -> Result<Self::Response, TransportError> {
        self.calls
            .borrow_mut()
            .push((url.to_string(), options.clone()));

        let aborts = self.aborts.clone();
        signal.on_abort(move || aborts.set(aborts.get() + 1));

        let route = self.routes.borrow().get(url).cloned().unwrap_or_else(|| {
            MockRoute::status(404, "Not Found", "", 0)
        });
        crate::timeout::sleep(route.delay).await;
        route.result
    }
}

#[async_trait(?Send)]
impl TransportResponse for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn status_text(&self) -> String {
        self.status_text.clone()
    }

    async fn text(self) -> Result<String, TransportError> {
        Ok(self.body)
    }
}
