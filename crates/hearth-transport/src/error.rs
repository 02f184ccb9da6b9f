/// Errors that can occur while setting up a transport.
///
/// Per-request failures are reported as
/// [`AuthError`](hearth_session::AuthError) instead, since those feed
/// straight into the session manager.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The configured base URL isn't an `http(s)://` URL.
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),

    /// The HTTP client couldn't be constructed (e.g. TLS backend init).
    #[cfg(feature = "http")]
    #[error("failed to build http client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}
