use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show the native file picker; the result comes back as `Msg::FilesPicked`.
    OpenFilePicker,
    StartUpload {
        attempt: crate::AttemptId,
        path: PathBuf,
    },
    CopyToClipboard { text: String },
    /// Deliver `Msg::CopyLabelExpired` once `after` has elapsed.
    ScheduleCopyLabelReset { after: Duration },
}
