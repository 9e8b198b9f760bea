//! Error types for fetch negotiation.

use bstr::BString;

/// A boxed error as produced by external collaborators like transports or object stores.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for fetch negotiation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Stable high-level error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A refspec or configuration value could not be understood.
    Configuration,
    /// The object database could not be obtained.
    Store,
    /// Connecting, listing, negotiating or downloading failed.
    Transport,
    /// The caller interrupted the operation.
    Cancelled,
}

/// The transport operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportOperation {
    /// Opening the connection.
    Connect,
    /// Receiving the reference advertisement.
    List,
    /// The want/have round-trip.
    Negotiate,
    /// Streaming the pack.
    Download,
}

impl std::fmt::Display for TransportOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TransportOperation::Connect => "connect",
            TransportOperation::List => "list references",
            TransportOperation::Negotiate => "negotiate",
            TransportOperation::Download => "download pack",
        })
    }
}

/// The error returned by all operations of this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A refspec could not be parsed.
    #[error("invalid refspec '{spec}'")]
    InvalidRefspec {
        spec: BString,
        #[source]
        source: gix_refspec::parse::Error,
    },
    /// A refspec was syntactically fine but cannot be used for fetching.
    #[error("unsupported refspec '{spec}': {message}")]
    UnsupportedRefspec { spec: BString, message: String },
    /// A configuration value was invalid.
    #[error("invalid value for '{key}': {message}")]
    Config { key: String, message: String },
    /// The object database of the repository is unavailable.
    #[error("could not obtain the object database")]
    StoreUnavailable(#[source] BoxError),
    /// A transport operation failed.
    #[error("transport failed to {operation}")]
    Transport {
        operation: TransportOperation,
        #[source]
        source: BoxError,
    },
    /// Building the want list failed while preparing a negotiation.
    #[error("failed to filter the reference list for wants")]
    FilterWants(#[source] Box<Error>),
    /// The operation was interrupted.
    #[error("operation was cancelled")]
    Cancelled,
}

impl Error {
    pub(crate) fn transport(operation: TransportOperation) -> impl FnOnce(BoxError) -> Self {
        move |source| Error::Transport { operation, source }
    }

    /// Fast classification helper returning a stable error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRefspec { .. } | Error::UnsupportedRefspec { .. } | Error::Config { .. } => ErrorKind::Configuration,
            Error::StoreUnavailable(_) => ErrorKind::Store,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::FilterWants(inner) => inner.kind(),
            Error::Cancelled => ErrorKind::Cancelled,
        }
    }

    /// The failing transport operation, if this is a transport error.
    pub fn transport_operation(&self) -> Option<TransportOperation> {
        match self {
            Error::Transport { operation, .. } => Some(*operation),
            Error::FilterWants(inner) => inner.transport_operation(),
            _ => None,
        }
    }

    /// Whether the embedding application may retry the call.
    ///
    /// Nothing is retried internally.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }
}
