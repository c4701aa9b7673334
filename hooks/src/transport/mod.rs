use async_trait::async_trait;

use crate::{AbortSignal, RequestOptions, TransportError};

mod browser;
#[cfg(test)]
pub(crate) mod mock;

pub use browser::*;

/// Performs the network call behind a query.
#[async_trait(?Send)]
pub trait Transport {
    /// The response type produced by this transport.
    type Response: TransportResponse;

    /// Fetch `url` with `options`. Implementations should stop the request once `signal` is
    /// aborted and report [`TransportError::Aborted`].
    async fn fetch(
        &self,
        url: &str,
        options: &RequestOptions,
        signal: AbortSignal,
    ) -> Result<Self::Response, TransportError>;
}

/// A response received by a [`Transport`].
#[async_trait(?Send)]
pub trait TransportResponse {
    /// The HTTP status code.
    fn status(&self) -> u16;

    /// The status text. May be empty.
    fn status_text(&self) -> String;

    /// Whether the status is in the success range.
    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    /// Read the whole body as text.
    async fn text(self) -> Result<String, TransportError>;
}
