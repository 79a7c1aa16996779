/// Failure surfaced to the UI's error line.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Local form check failed; nothing was sent.
    #[error("{0}")]
    Invalid(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never completed or the body could not be decoded.
    /// Displays only `context`, which is what the error line shows.
    #[error("{context}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
}
