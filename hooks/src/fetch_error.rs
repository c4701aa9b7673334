/// A failed fetch attempt, as surfaced in [`FetchState::Failed`](crate::FetchState::Failed).
///
/// Cancellation is not an error and never appears here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// A response arrived, but its status is outside the success range.
    #[error("{}", http_message(.status, .status_text))]
    Http {
        /// The HTTP status code.
        status: u16,
        /// The status text reported alongside the code. May be empty.
        status_text: String,
    },

    /// No response arrived before the configured timeout.
    #[error("Request exceeded timeout limit")]
    Timeout,

    /// The request could not be performed, e.g. the network is unreachable.
    #[error("{0}")]
    Transport(String),

    /// The response body could not be decoded into the requested type.
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// Error for a response with a non-success status.
    pub fn http(status: u16, status_text: impl Into<String>) -> Self {
        FetchError::Http {
            status,
            status_text: status_text.into(),
        }
    }
}

// HTTP/2 responses carry no reason phrase.
fn http_message(status: &u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("HTTP error {status}")
    } else {
        status_text.to_string()
    }
}

/// Failure reported by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request was aborted through its [`AbortSignal`](crate::AbortSignal).
    #[error("request was aborted")]
    Aborted,

    /// The request failed before a usable response was produced.
    #[error("{0}")]
    Network(String),
}

impl From<TransportError> for Option<FetchError> {
    fn from(error: TransportError) -> Self {
        match error {
            TransportError::Aborted => None,
            TransportError::Network(message) => Some(FetchError::Transport(message)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_uses_status_text() {
        let error = FetchError::http(404, "Not Found");
        assert_eq!(error.to_string(), "Not Found");
    }

    #[test]
    fn http_error_without_status_text_names_the_code() {
        let error = FetchError::http(502, "");
        assert_eq!(error.to_string(), "HTTP error 502");
    }

    #[test]
    fn timeout_message() {
        assert_eq!(
            FetchError::Timeout.to_string(),
            "Request exceeded timeout limit"
        );
    }

    #[test]
    fn aborts_are_not_fetch_errors() {
        let aborted: Option<FetchError> = TransportError::Aborted.into();
        assert_eq!(aborted, None);

        let network: Option<FetchError> = TransportError::Network("offline".into()).into();
        assert_eq!(network, Some(FetchError::Transport("offline".into())));
    }
}
