use std::io;
use std::time::Instant;

use eframe::egui;
use engine_logging::{engine_debug, engine_info, engine_warn};
use summarizer_core::{Effect, Msg};
use summarizer_engine::{EngineEvent, EngineHandle, UploadSettings};

pub struct EffectRunner {
    engine: EngineHandle,
    copy_resets: CopyResetTimers,
}

impl EffectRunner {
    pub fn new(settings: UploadSettings) -> io::Result<Self> {
        engine_info!(
            "Upload endpoint {} (field {:?})",
            settings.endpoint,
            settings.field_name
        );
        Ok(Self {
            engine: EngineHandle::new(settings)?,
            copy_resets: CopyResetTimers::default(),
        })
    }

    /// Executes effects; returns messages produced synchronously (picker result).
    pub fn run(&mut self, ctx: &egui::Context, effects: Vec<Effect>) -> Vec<Msg> {
        let mut follow_ups = Vec::new();
        for effect in effects {
            match effect {
                Effect::OpenFilePicker => {
                    let picked = rfd::FileDialog::new()
                        .set_title("Choose a document to summarize")
                        .pick_files()
                        .unwrap_or_default();
                    engine_debug!("File picker returned {} path(s)", picked.len());
                    follow_ups.push(Msg::FilesPicked(picked));
                }
                Effect::StartUpload { attempt, path } => {
                    engine_info!("StartUpload attempt={} path={:?}", attempt, path);
                    self.engine.upload(attempt, path);
                }
                Effect::CopyToClipboard { text } => {
                    engine_debug!("Copying {} chars to clipboard", text.chars().count());
                    ctx.copy_text(text);
                }
                Effect::ScheduleCopyLabelReset { after } => {
                    self.copy_resets.schedule(Instant::now() + after);
                }
            }
        }
        follow_ups
    }

    /// Drains engine events and expired timers, in that order.
    pub fn poll(&mut self, now: Instant) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event));
        }
        msgs.extend((0..self.copy_resets.expire(now)).map(|_| Msg::CopyLabelExpired));
        msgs
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.copy_resets.next_deadline()
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Accepted { attempt, .. } => Msg::UploadAccepted { attempt },
        EngineEvent::Chunk { attempt, text } => Msg::ChunkReceived { attempt, text },
        EngineEvent::Finished {
            attempt,
            result: Ok(_),
        } => Msg::StreamCompleted { attempt },
        EngineEvent::Finished {
            attempt,
            result: Err(err),
        } => {
            engine_warn!("Attempt {} surfaced to user: {}", attempt, err);
            Msg::UploadFailed {
                attempt,
                message: err.message,
            }
        }
    }
}

/// Pending copy-label resets, one per click.
#[derive(Debug, Default)]
struct CopyResetTimers {
    deadlines: Vec<Instant>,
}

impl CopyResetTimers {
    fn schedule(&mut self, deadline: Instant) {
        self.deadlines.push(deadline);
    }

    /// Removes deadlines at or before `now`, returning how many fired.
    fn expire(&mut self, now: Instant) -> usize {
        let before = self.deadlines.len();
        self.deadlines.retain(|deadline| *deadline > now);
        before - self.deadlines.len()
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.iter().min().copied()
    }
}
