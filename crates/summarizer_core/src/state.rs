use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::view_model::AppViewModel;

pub type AttemptId = u64;

pub const COPY_LABEL: &str = "Copy Text";
pub const COPY_ACK_LABEL: &str = "Copied!";
pub const COPY_LABEL_RESET_AFTER: Duration = Duration::from_secs(2);

/// Which region of the window is visible. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Upload,
    Loading,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamStatus {
    Streaming,
    Complete,
    /// The transfer failed after text had started arriving.
    Interrupted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StreamState {
    text: String,
    /// Length in UTF-16 code units.
    char_count: usize,
    status: StreamStatus,
}

impl StreamState {
    fn new() -> Self {
        Self {
            text: String::new(),
            char_count: 0,
            status: StreamStatus::Streaming,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    panel: Panel,
    drag_active: bool,
    last_attempt: AttemptId,
    active_attempt: Option<AttemptId>,
    file_name: Option<String>,
    stream: Option<StreamState>,
    copy_acknowledged: bool,
    picker_value: Option<PathBuf>,
    notification: Option<String>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let (summary_text, char_count, status) = match &self.stream {
            Some(stream) => (stream.text.clone(), stream.char_count, Some(stream.status)),
            None => (String::new(), 0, None),
        };
        let complete = status == Some(StreamStatus::Complete);

        AppViewModel {
            panel: self.panel,
            drag_active: self.drag_active,
            upload_enabled: self.accepts_files(),
            file_name: self.file_name.clone(),
            summary_text,
            char_count,
            stream_status: status,
            summary_chars_label: complete.then(|| format!("Summary Chars: {char_count}")),
            stream_status_label: complete.then_some("Stream Complete"),
            copy_label: if self.copy_acknowledged {
                COPY_ACK_LABEL
            } else {
                COPY_LABEL
            },
            reset_enabled: self.active_attempt.is_none(),
            notification: self.notification.clone(),
            dirty: self.dirty,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn active_attempt(&self) -> Option<AttemptId> {
        self.active_attempt
    }

    pub fn summary_text(&self) -> &str {
        self.stream.as_ref().map_or("", |stream| stream.text.as_str())
    }

    pub fn picker_value(&self) -> Option<&Path> {
        self.picker_value.as_deref()
    }

    /// Returns whether the state changed since the last call, clearing the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// A new file is only taken while the upload surface is showing and idle.
    pub(crate) fn accepts_files(&self) -> bool {
        self.panel == Panel::Upload && self.active_attempt.is_none()
    }

    pub(crate) fn is_active(&self, attempt: AttemptId) -> bool {
        self.active_attempt == Some(attempt)
    }

    pub(crate) fn set_drag_active(&mut self, active: bool) {
        if self.drag_active != active {
            self.drag_active = active;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_picker_value(&mut self, path: PathBuf) {
        self.picker_value = Some(path);
    }

    pub(crate) fn begin_attempt(&mut self, path: &Path) -> AttemptId {
        self.last_attempt += 1;
        let attempt = self.last_attempt;
        self.active_attempt = Some(attempt);
        self.panel = Panel::Loading;
        self.drag_active = false;
        self.file_name = Some(
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        );
        self.stream = None;
        self.mark_dirty();
        attempt
    }

    pub(crate) fn accept(&mut self) {
        self.panel = Panel::Result;
        self.stream = Some(StreamState::new());
        self.mark_dirty();
    }

    pub(crate) fn append_chunk(&mut self, text: &str) {
        let Some(stream) = self.stream.as_mut() else {
            return;
        };
        if text.is_empty() {
            return;
        }
        stream.text.push_str(text);
        stream.char_count += text.encode_utf16().count();
        self.mark_dirty();
    }

    pub(crate) fn complete(&mut self) {
        if let Some(stream) = self.stream.as_mut() {
            stream.status = StreamStatus::Complete;
        }
        self.active_attempt = None;
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, message: &str) {
        if let Some(stream) = self.stream.as_mut() {
            stream.status = StreamStatus::Interrupted;
        }
        self.active_attempt = None;
        self.panel = Panel::Upload;
        self.picker_value = None;
        self.notification = Some(format!("Error: {message}"));
        self.mark_dirty();
    }

    pub(crate) fn reset(&mut self) {
        self.panel = Panel::Upload;
        self.picker_value = None;
        self.drag_active = false;
        self.mark_dirty();
    }

    pub(crate) fn has_summary(&self) -> bool {
        self.stream.is_some()
    }

    pub(crate) fn set_copy_acknowledged(&mut self, acknowledged: bool) {
        if self.copy_acknowledged != acknowledged {
            self.copy_acknowledged = acknowledged;
            self.mark_dirty();
        }
    }

    pub(crate) fn dismiss_notification(&mut self) {
        if self.notification.take().is_some() {
            self.mark_dirty();
        }
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
