use std::path::{Path, PathBuf};
use std::sync::Once;

use pretty_assertions::assert_eq;
use summarizer_core::{
    update, AppState, Effect, Msg, Panel, COPY_ACK_LABEL, COPY_LABEL, COPY_LABEL_RESET_AFTER,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn completed_with(path: &str, summary: &str) -> AppState {
    let state = AppState::new();
    let (state, _) = update(state, Msg::FilesPicked(vec![PathBuf::from(path)]));
    let (state, _) = update(state, Msg::UploadAccepted { attempt: 1 });
    let (state, _) = update(
        state,
        Msg::ChunkReceived {
            attempt: 1,
            text: summary.to_string(),
        },
    );
    update(state, Msg::StreamCompleted { attempt: 1 }).0
}

#[test]
fn copy_puts_rendered_text_on_clipboard() {
    init_logging();
    let state = completed_with("doc.pdf", "Short summary.\nSecond line.");

    let (state, effects) = update(state, Msg::CopyClicked);

    assert_eq!(
        effects,
        vec![
            Effect::CopyToClipboard {
                text: "Short summary.\nSecond line.".to_string(),
            },
            Effect::ScheduleCopyLabelReset {
                after: COPY_LABEL_RESET_AFTER,
            },
        ]
    );
    assert_eq!(state.view().copy_label, COPY_ACK_LABEL);

    let (state, _) = update(state, Msg::CopyLabelExpired);
    assert_eq!(state.view().copy_label, COPY_LABEL);
}

#[test]
fn copy_label_reset_waits_two_seconds() {
    assert_eq!(COPY_LABEL_RESET_AFTER.as_secs(), 2);
}

#[test]
fn copy_label_reverts_even_after_second_click() {
    init_logging();
    let state = completed_with("doc.pdf", "text");

    let (state, _) = update(state, Msg::CopyClicked);
    let (state, effects) = update(state, Msg::CopyClicked);
    assert_eq!(effects.len(), 2);

    // The first timer fires and reverts regardless of the second click.
    let (state, _) = update(state, Msg::CopyLabelExpired);
    assert_eq!(state.view().copy_label, COPY_LABEL);
}

#[test]
fn copy_without_summary_does_nothing() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::CopyClicked);

    assert!(effects.is_empty());
    assert_eq!(next, state);
}

#[test]
fn reset_shows_upload_and_clears_picker_value() {
    init_logging();
    let state = completed_with("/docs/report.pdf", "summary");
    assert!(state.picker_value().is_some());

    let (state, effects) = update(state, Msg::ResetClicked);

    assert!(effects.is_empty());
    assert_eq!(state.view().panel, Panel::Upload);
    assert_eq!(state.picker_value(), None);
}

#[test]
fn same_file_picked_again_after_reset_starts_new_attempt() {
    init_logging();
    let state = completed_with("/docs/report.pdf", "summary");

    // The result panel is up: the upload surface takes nothing.
    let (state, effects) = update(
        state,
        Msg::FilesPicked(vec![PathBuf::from("/docs/report.pdf")]),
    );
    assert!(effects.is_empty());

    let (state, _) = update(state, Msg::ResetClicked);
    let (state, effects) = update(
        state,
        Msg::FilesPicked(vec![PathBuf::from("/docs/report.pdf")]),
    );
    assert_eq!(
        effects,
        vec![Effect::StartUpload {
            attempt: 2,
            path: PathBuf::from("/docs/report.pdf"),
        }]
    );
    assert_eq!(state.picker_value(), Some(Path::new("/docs/report.pdf")));
}

#[test]
fn failure_lets_picker_retry_same_file() {
    init_logging();
    let state = AppState::new();
    let same = vec![PathBuf::from("/docs/report.pdf")];
    let (state, _) = update(state, Msg::FilesPicked(same.clone()));
    let (state, _) = update(
        state,
        Msg::UploadFailed {
            attempt: 1,
            message: "Failed to summarize".to_string(),
        },
    );
    assert_eq!(state.picker_value(), None);

    let (state, effects) = update(state, Msg::FilesPicked(same));
    assert_eq!(
        effects,
        vec![Effect::StartUpload {
            attempt: 2,
            path: PathBuf::from("/docs/report.pdf"),
        }]
    );
    assert_eq!(state.view().panel, Panel::Loading);
}

#[test]
fn reset_ignored_while_streaming() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::FilesDropped(vec![PathBuf::from("doc.pdf")]));
    let (state, _) = update(state, Msg::UploadAccepted { attempt: 1 });

    let (state, _) = update(state, Msg::ResetClicked);

    assert_eq!(state.view().panel, Panel::Result);
}

#[test]
fn notification_dismissed() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::FilesDropped(vec![PathBuf::from("doc.pdf")]));
    let (state, _) = update(
        state,
        Msg::UploadFailed {
            attempt: 1,
            message: "offline".to_string(),
        },
    );
    assert!(state.view().notification.is_some());

    let (state, _) = update(state, Msg::NotificationDismissed);
    assert_eq!(state.view().notification, None);
}
