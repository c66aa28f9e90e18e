use std::fmt;

pub type AttemptId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The server answered with a success status; the body follows.
    Accepted { attempt: AttemptId, status: u16 },
    /// Decoded text in arrival order. Never empty.
    Chunk { attempt: AttemptId, text: String },
    Finished {
        attempt: AttemptId,
        result: Result<StreamSummary, UploadError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamSummary {
    /// Body chunks received from the network.
    pub chunks: usize,
    pub bytes: u64,
    /// Unicode scalar values emitted across all `Chunk` events.
    pub chars: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct UploadError {
    pub kind: FailureKind,
    pub message: String,
}

impl UploadError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    FileRead,
    Network,
    Rejected { status: u16 },
    Stream,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::FileRead => write!(f, "file read error"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Rejected { status } => write!(f, "rejected with http status {status}"),
            FailureKind::Stream => write!(f, "stream read error"),
        }
    }
}
