// Error taxonomy shared by every demo routine.
//
// Expected failures (bad input, nothing found) carry the exact text the
// operator should see. Remote faults (schema drift, bad payloads, network)
// are recoverable too, but get a generic prefix from the error boundary in
// `ui`. Only console failures end the program.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    /// Operator input was rejected by a validator. The message is printed as-is.
    #[error("{0}")]
    InvalidInput(String),

    /// The remote service had nothing for the query. The message is printed as-is.
    #[error("{0}")]
    NotFound(String),

    /// A successful response lacked a field we render.
    #[error("missing field `{0}` in response")]
    MissingField(String),

    /// The response body was not the JSON shape we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// A request URL could not be assembled from the configured base URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a response (DNS, refused, timeout).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The operator closed the input stream while a routine was waiting.
    #[error("input closed")]
    InputClosed,

    #[error("console I/O failed: {0}")]
    Console(#[from] io::Error),
}

impl DemoError {
    /// Whether the menu loop can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, DemoError::InputClosed | DemoError::Console(_))
    }

    /// Whether this is an anticipated outcome with an operator-facing message,
    /// as opposed to a fault worth logging.
    pub fn is_expected(&self) -> bool {
        matches!(self, DemoError::InvalidInput(_) | DemoError::NotFound(_))
    }

    pub(crate) fn decode(err: serde_json::Error) -> Self {
        DemoError::Decode(err.to_string())
    }
}
