use std::path::PathBuf;

use crate::{AppState, Effect, Msg, COPY_LABEL_RESET_AFTER};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::DragHovered => {
            if state.accepts_files() {
                state.set_drag_active(true);
            }
            Vec::new()
        }
        Msg::DragLeft => {
            state.set_drag_active(false);
            Vec::new()
        }
        Msg::FilesDropped(paths) => {
            state.set_drag_active(false);
            choose_file(&mut state, paths.into_iter().next())
        }
        Msg::UploadAreaClicked => {
            if state.accepts_files() {
                vec![Effect::OpenFilePicker]
            } else {
                Vec::new()
            }
        }
        Msg::FilesPicked(paths) => match paths.into_iter().next() {
            Some(first) if state.accepts_files() => {
                state.set_picker_value(first.clone());
                choose_file(&mut state, Some(first))
            }
            _ => Vec::new(),
        },
        Msg::UploadAccepted { attempt } => {
            if state.is_active(attempt) {
                state.accept();
            }
            Vec::new()
        }
        Msg::ChunkReceived { attempt, text } => {
            if state.is_active(attempt) {
                state.append_chunk(&text);
            }
            Vec::new()
        }
        Msg::StreamCompleted { attempt } => {
            if state.is_active(attempt) {
                state.complete();
            }
            Vec::new()
        }
        Msg::UploadFailed { attempt, message } => {
            if state.is_active(attempt) {
                state.fail(&message);
            }
            Vec::new()
        }
        Msg::CopyClicked => {
            if state.has_summary() {
                state.set_copy_acknowledged(true);
                vec![
                    Effect::CopyToClipboard {
                        text: state.summary_text().to_owned(),
                    },
                    Effect::ScheduleCopyLabelReset {
                        after: COPY_LABEL_RESET_AFTER,
                    },
                ]
            } else {
                Vec::new()
            }
        }
        Msg::CopyLabelExpired => {
            state.set_copy_acknowledged(false);
            Vec::new()
        }
        Msg::ResetClicked => {
            if state.active_attempt().is_none() {
                state.reset();
            }
            Vec::new()
        }
        Msg::NotificationDismissed => {
            state.dismiss_notification();
            Vec::new()
        }
    };

    (state, effects)
}

fn choose_file(state: &mut AppState, file: Option<PathBuf>) -> Vec<Effect> {
    let Some(path) = file else {
        return Vec::new();
    };
    if !state.accepts_files() {
        return Vec::new();
    }
    let attempt = state.begin_attempt(&path);
    vec![Effect::StartUpload { attempt, path }]
}
