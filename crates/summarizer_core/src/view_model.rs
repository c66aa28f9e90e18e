use crate::{Panel, StreamStatus};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub panel: Panel,
    pub drag_active: bool,
    /// False while an attempt is in flight; drops and clicks are ignored then.
    pub upload_enabled: bool,
    pub file_name: Option<String>,
    pub summary_text: String,
    pub char_count: usize,
    pub stream_status: Option<StreamStatus>,
    pub summary_chars_label: Option<String>,
    pub stream_status_label: Option<&'static str>,
    pub copy_label: &'static str,
    pub reset_enabled: bool,
    pub notification: Option<String>,
    pub dirty: bool,
}
