use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::{AbortSignal, RequestOptions, Transport, TransportError, TransportResponse};

/// [`Transport`] backed by `window.fetch`, cancelled through an `AbortController`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

/// Response returned by [`BrowserTransport`].
#[derive(Debug, Clone)]
pub struct BrowserResponse(web_sys::Response);

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    type Response = BrowserResponse;

    async fn fetch(
        &self,
        url: &str,
        options: &RequestOptions,
        signal: AbortSignal,
    ) -> Result<Self::Response, TransportError> {
        let controller = web_sys::AbortController::new().map_err(js_error)?;

        let headers = web_sys::Headers::new().map_err(js_error)?;
        for (name, value) in &options.headers {
            headers.set(name, value).map_err(js_error)?;
        }

        let init = web_sys::RequestInit::new();
        init.set_method(options.method.as_str());
        init.set_headers(&headers);
        init.set_signal(Some(&controller.signal()));
        if let Some(ref body) = options.body {
            init.set_body(&JsValue::from_str(body));
        }

        let request = web_sys::Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("No window available".to_string()))?;

        signal.on_abort(move || controller.abort());

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: web_sys::Response = response.dyn_into().map_err(js_error)?;
        Ok(BrowserResponse(response))
    }
}

#[async_trait(?Send)]
impl TransportResponse for BrowserResponse {
    fn status(&self) -> u16 {
        self.0.status()
    }

    fn status_text(&self) -> String {
        self.0.status_text()
    }

    fn ok(&self) -> bool {
        self.0.ok()
    }

    async fn text(self) -> Result<String, TransportError> {
        let text = JsFuture::from(self.0.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        text.as_string()
            .ok_or_else(|| TransportError::Network("Response body is not text".to_string()))
    }
}

fn js_error(value: JsValue) -> TransportError {
    if let Some(exception) = value.dyn_ref::<web_sys::DomException>() {
        if exception.name() == "AbortError" {
            return TransportError::Aborted;
        }
        return TransportError::Network(exception.message());
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return TransportError::Network(String::from(error.message()));
    }
    TransportError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}
