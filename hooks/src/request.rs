use std::time::Duration;

/// HTTP request method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// `GET`
    #[default]
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
}

impl Method {
    /// The method as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request configuration passed through to the [`Transport`](crate::Transport) verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// The request method.
    pub method: Method,
    /// Request headers, in insertion order.
    pub headers: Vec<(String, String)>,
    /// The request body.
    pub body: Option<String>,
}

impl RequestOptions {
    /// Set the method.
    pub fn set_method(self, method: Method) -> Self {
        RequestOptions { method, ..self }
    }

    /// Append a header.
    pub fn set_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the body.
    pub fn set_body(self, body: impl Into<String>) -> Self {
        RequestOptions {
            body: Some(body.into()),
            ..self
        }
    }

    /// Serialize `value` as the JSON body and set the matching content type.
    pub fn set_json<S: serde::Serialize>(self, value: &S) -> Result<Self, serde_json::Error> {
        let body = serde_json::to_string(value)?;
        Ok(self
            .set_header("Content-Type", "application/json; charset=UTF-8")
            .set_body(body))
    }

    /// Returns the value of the first header named `name`, ignoring case.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Defaults for every [`FetchOptions`] created under this context.
/// Provide with [`provide_fetch_options`].
#[derive(Debug, Clone, Default)]
pub struct DefaultFetchOptions {
    /// Timeout applied when a query does not set its own.
    pub timeout: Option<Duration>,
    /// Headers added to every request.
    pub headers: Vec<(String, String)>,
}

/// Provides [`DefaultFetchOptions`] to the current component tree.
pub fn provide_fetch_options(options: DefaultFetchOptions) {
    leptos::provide_context(options)
}

/**
 * Options for a query [`use_query()`](crate::use_query())
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    /// Request configuration.
    pub request: RequestOptions,
    /// How long an attempt may take before it fails with [`FetchError::Timeout`](crate::FetchError::Timeout).
    /// If no timeout, the attempt waits indefinitely.
    pub timeout: Option<Duration>,
}

impl FetchOptions {
    /// Set the request options.
    ///
    /// Headers already set, such as the defaults from [`provide_fetch_options`], are kept
    /// unless `request` sets a header with the same name.
    pub fn set_request(self, mut request: RequestOptions) -> Self {
        let mut headers = self
            .request
            .headers
            .into_iter()
            .filter(|(name, _)| request.header(name).is_none())
            .collect::<Vec<_>>();
        headers.append(&mut request.headers);
        request.headers = headers;
        FetchOptions { request, ..self }
    }

    /// Set the timeout.
    pub fn set_timeout(self, timeout: Option<Duration>) -> Self {
        FetchOptions { timeout, ..self }
    }

    /// Treats a zero timeout as no timeout.
    pub fn validate(self) -> Self {
        let timeout = self.timeout.filter(|timeout| !timeout.is_zero());
        FetchOptions { timeout, ..self }
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        // Use context defaults if they exist.
        let defaults = leptos::use_context::<DefaultFetchOptions>().unwrap_or_default();
        Self {
            request: RequestOptions {
                headers: defaults.headers,
                ..RequestOptions::default()
            },
            timeout: defaults.timeout,
        }
        .validate()
    }
}

/// Everything that describes a single fetch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestIdentity {
    /// The resource locator. Empty means "nothing to fetch".
    pub url: String,
    /// Request configuration.
    pub options: RequestOptions,
    /// Attempt timeout.
    pub timeout: Option<Duration>,
}

impl RequestIdentity {
    /// Identity for `url` with the given options.
    pub fn new(url: impl Into<String>, options: FetchOptions) -> Self {
        let FetchOptions { request, timeout } = options.validate();
        Self {
            url: url.into(),
            options: request,
            timeout,
        }
    }

    /// Whether there is anything to fetch.
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

#[cfg(all(test, not(any(feature = "csr", feature = "hydrate"))))]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_is_no_timeout() {
        let options = FetchOptions {
            request: RequestOptions::default(),
            timeout: Some(Duration::ZERO),
        }
        .validate();

        assert_eq!(options.timeout, None, "Zero timeout should be dropped");
    }

    #[test]
    fn positive_timeout_is_kept() {
        let options = FetchOptions {
            request: RequestOptions::default(),
            timeout: Some(Duration::from_millis(10)),
        }
        .validate();

        assert_eq!(options.timeout, Some(Duration::from_millis(10)));
    }

    #[test]
    fn json_body_sets_content_type() {
        #[derive(serde::Serialize)]
        struct Post {
            title: &'static str,
        }

        let options = RequestOptions::default()
            .set_method(Method::Post)
            .set_json(&Post { title: "foo" })
            .expect("serializable body");

        assert_eq!(options.method, Method::Post);
        assert_eq!(options.body.as_deref(), Some(r#"{"title":"foo"}"#));
        assert_eq!(
            options.header("content-type"),
            Some("application/json; charset=UTF-8")
        );
    }

    #[test]
    fn defaults_without_context() {
        let _ = leptos::create_runtime();

        let options = FetchOptions::default();

        assert_eq!(options.timeout, None);
        assert_eq!(options.request, RequestOptions::default());
    }

    #[test]
    fn defaults_come_from_context() {
        let _ = leptos::create_runtime();

        provide_fetch_options(DefaultFetchOptions {
            timeout: Some(Duration::from_secs(3)),
            headers: vec![("Accept".into(), "application/json".into())],
        });

        let options = FetchOptions::default();

        assert_eq!(
            options.timeout,
            Some(Duration::from_secs(3)),
            "Default timeout should match the provided context"
        );
        assert_eq!(options.request.header("accept"), Some("application/json"));
        assert_eq!(options.request.method, Method::Get);
    }

    #[test]
    fn set_request_keeps_default_headers() {
        let _ = leptos::create_runtime();

        provide_fetch_options(DefaultFetchOptions {
            timeout: None,
            headers: vec![
                ("Accept".into(), "application/json".into()),
                ("X-Client".into(), "hooks".into()),
            ],
        });

        let options = FetchOptions::default().set_request(
            RequestOptions::default()
                .set_method(Method::Post)
                .set_header("x-client", "demo"),
        );

        assert_eq!(options.request.method, Method::Post);
        assert_eq!(options.request.header("accept"), Some("application/json"));
        assert_eq!(
            options.request.header("X-Client"),
            Some("demo"),
            "Request header should override the default"
        );
        assert_eq!(options.request.headers.len(), 2);
    }

    #[test]
    fn identity_validates_timeout() {
        let identity = RequestIdentity::new(
            "/posts/1",
            FetchOptions {
                request: RequestOptions::default(),
                timeout: Some(Duration::ZERO),
            },
        );

        assert_eq!(identity.timeout, None);
        assert!(!identity.is_empty());
        assert!(RequestIdentity::new("", identity_options()).is_empty());
    }

    fn identity_options() -> FetchOptions {
        FetchOptions {
            request: RequestOptions::default(),
            timeout: None,
        }
    }
}
