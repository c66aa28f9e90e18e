use std::path::Path;

use engine_logging::{engine_debug, engine_info, engine_warn};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tokio_util::io::ReaderStream;

use crate::{
    rejection_message, AttemptId, EngineEvent, FailureKind, StreamDecoder, StreamSummary,
    UploadError,
};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/summarize";
pub const DEFAULT_FIELD_NAME: &str = "file";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSettings {
    pub endpoint: String,
    /// Multipart field carrying the file bytes.
    pub field_name: String,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
        }
    }
}

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: std::sync::mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: std::sync::mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[async_trait::async_trait]
pub trait Uploader: Send + Sync {
    /// Uploads `path` and streams the decoded response into `sink`.
    ///
    /// Emits `Accepted` once, then `Chunk` events in arrival order. The final
    /// outcome is the return value.
    async fn upload(
        &self,
        attempt: AttemptId,
        path: &Path,
        sink: &dyn EventSink,
    ) -> Result<StreamSummary, UploadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestUploader {
    settings: UploadSettings,
}

impl ReqwestUploader {
    pub fn new(settings: UploadSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, UploadError> {
        reqwest::Client::builder()
            .build()
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Uploader for ReqwestUploader {
    async fn upload(
        &self,
        attempt: AttemptId,
        path: &Path,
        sink: &dyn EventSink,
    ) -> Result<StreamSummary, UploadError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| UploadError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let part = file_part(path).await?;
        let form = Form::new().part(self.settings.field_name.clone(), part);
        let client = self.build_client()?;

        let response = client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|err| UploadError::new(FailureKind::Network, err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = rejection_message(&body);
            engine_warn!(
                "Attempt {} rejected: status={} body_len={}",
                attempt,
                status,
                body.len()
            );
            return Err(UploadError::new(
                FailureKind::Rejected {
                    status: status.as_u16(),
                },
                message,
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let mut decoder = StreamDecoder::for_content_type(content_type.as_deref());
        engine_info!(
            "Attempt {} accepted: status={} encoding={}",
            attempt,
            status,
            decoder.encoding_name()
        );
        sink.emit(EngineEvent::Accepted {
            attempt,
            status: status.as_u16(),
        });

        let mut summary = StreamSummary::default();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk =
                chunk.map_err(|err| UploadError::new(FailureKind::Stream, err.to_string()))?;
            summary.chunks += 1;
            summary.bytes += chunk.len() as u64;
            let text = decoder.decode_chunk(&chunk);
            engine_debug!(
                "Attempt {} chunk {}: bytes={} chars={}",
                attempt,
                summary.chunks,
                chunk.len(),
                text.chars().count()
            );
            emit_text(attempt, text, &mut summary, sink);
        }

        if decoder.had_errors() {
            engine_warn!("Attempt {} body contained malformed sequences", attempt);
        }
        let tail = decoder.finish();
        emit_text(attempt, tail, &mut summary, sink);

        Ok(summary)
    }
}

fn emit_text(attempt: AttemptId, text: String, summary: &mut StreamSummary, sink: &dyn EventSink) {
    if text.is_empty() {
        return;
    }
    summary.chars += text.chars().count();
    sink.emit(EngineEvent::Chunk { attempt, text });
}

/// Multipart part streaming the file from disk under its base name.
async fn file_part(path: &Path) -> Result<Part, UploadError> {
    let file_error = |err: std::io::Error| {
        UploadError::new(FailureKind::FileRead, format!("{}: {err}", path.display()))
    };

    let file = tokio::fs::File::open(path).await.map_err(file_error)?;
    let len = file.metadata().await.map_err(file_error)?.len();
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    engine_info!("Uploading {} ({} bytes)", file_name, len);
    let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
    Ok(Part::stream_with_length(body, len).file_name(file_name))
}
