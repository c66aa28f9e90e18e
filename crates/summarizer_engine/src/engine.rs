use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_error, engine_info};

use crate::upload::{ChannelEventSink, ReqwestUploader, UploadSettings, Uploader};
use crate::{AttemptId, EngineEvent};

enum EngineCommand {
    Upload { attempt: AttemptId, path: PathBuf },
}

/// Runs uploads on a background tokio runtime and reports `EngineEvent`s.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: UploadSettings) -> io::Result<Self> {
        Self::with_uploader(Arc::new(ReqwestUploader::new(settings)))
    }

    pub fn with_uploader(uploader: Arc<dyn Uploader>) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("summarizer-io")
            .build()?;

        thread::Builder::new()
            .name("summarizer-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let uploader = uploader.clone();
                    let event_tx = event_tx.clone();
                    runtime.spawn(async move {
                        handle_command(uploader.as_ref(), command, event_tx).await;
                    });
                }
            })?;

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn upload(&self, attempt: AttemptId, path: impl Into<PathBuf>) {
        let _ = self.cmd_tx.send(EngineCommand::Upload {
            attempt,
            path: path.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    uploader: &dyn Uploader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Upload { attempt, path } => {
            engine_info!("Attempt {} starting for {:?}", attempt, path);
            let sink = ChannelEventSink::new(event_tx.clone());
            let result = uploader.upload(attempt, &path, &sink).await;
            match &result {
                Ok(summary) => engine_info!(
                    "Attempt {} complete: chunks={} bytes={} chars={}",
                    attempt,
                    summary.chunks,
                    summary.bytes,
                    summary.chars
                ),
                Err(err) => engine_error!("Attempt {} failed ({}): {}", attempt, err.kind, err),
            }
            let _ = event_tx.send(EngineEvent::Finished { attempt, result });
        }
    }
}
