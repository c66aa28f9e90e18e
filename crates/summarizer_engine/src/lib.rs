//! Summarizer engine: multipart upload and streamed summary consumption.
mod decode;
mod engine;
mod rejection;
mod types;
mod upload;

pub use decode::StreamDecoder;
pub use engine::EngineHandle;
pub use rejection::{rejection_message, FALLBACK_REJECTION_MESSAGE};
pub use types::{AttemptId, EngineEvent, FailureKind, StreamSummary, UploadError};
pub use upload::{
    ChannelEventSink, EventSink, ReqwestUploader, UploadSettings, Uploader, DEFAULT_ENDPOINT,
    DEFAULT_FIELD_NAME,
};
