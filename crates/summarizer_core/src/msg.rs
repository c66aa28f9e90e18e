use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Files are being dragged over the upload surface.
    DragHovered,
    /// The drag left the surface without dropping.
    DragLeft,
    /// Files were dropped on the upload surface, in drop order.
    FilesDropped(Vec<PathBuf>),
    /// User clicked the upload surface.
    UploadAreaClicked,
    /// The file picker closed; empty when the dialog was cancelled.
    FilesPicked(Vec<PathBuf>),
    /// Engine: the server answered with a success status, body not yet read.
    UploadAccepted { attempt: crate::AttemptId },
    /// Engine: decoded text of one or more body chunks.
    ChunkReceived {
        attempt: crate::AttemptId,
        text: String,
    },
    /// Engine: the body ended normally.
    StreamCompleted { attempt: crate::AttemptId },
    /// Engine: the attempt failed at any stage.
    UploadFailed {
        attempt: crate::AttemptId,
        message: String,
    },
    /// User clicked Copy Text.
    CopyClicked,
    /// A scheduled copy label reset fired.
    CopyLabelExpired,
    /// User clicked Upload Another.
    ResetClicked,
    /// User closed the error notification.
    NotificationDismissed,
}
