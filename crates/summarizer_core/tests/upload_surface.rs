use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use summarizer_core::{update, AppState, Effect, Msg, Panel};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn paths(names: &[&str]) -> Vec<PathBuf> {
    names.iter().map(PathBuf::from).collect()
}

#[test]
fn drop_uses_only_first_file() {
    init_logging();
    let state = AppState::new();

    let (mut next, effects) = update(state, Msg::FilesDropped(paths(&["a.pdf", "b.pdf"])));

    assert_eq!(
        effects,
        vec![Effect::StartUpload {
            attempt: 1,
            path: PathBuf::from("a.pdf"),
        }]
    );
    let view = next.view();
    assert_eq!(view.panel, Panel::Loading);
    assert_eq!(view.file_name.as_deref(), Some("a.pdf"));
    assert!(!view.upload_enabled);
    assert!(next.consume_dirty());
}

#[test]
fn picker_uses_only_first_file() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(
        state,
        Msg::FilesPicked(paths(&["/docs/report.docx", "/docs/other.docx"])),
    );

    assert_eq!(
        effects,
        vec![Effect::StartUpload {
            attempt: 1,
            path: PathBuf::from("/docs/report.docx"),
        }]
    );
    assert_eq!(next.view().file_name.as_deref(), Some("report.docx"));
    assert_eq!(
        next.picker_value(),
        Some(PathBuf::from("/docs/report.docx").as_path())
    );
}

#[test]
fn empty_selection_changes_nothing() {
    init_logging();
    let state = AppState::new();

    let (next, effects) = update(state.clone(), Msg::FilesDropped(Vec::new()));
    assert_eq!(next, state);
    assert!(effects.is_empty());

    let (next, effects) = update(state.clone(), Msg::FilesPicked(Vec::new()));
    assert_eq!(next, state);
    assert!(effects.is_empty());
}

#[test]
fn drag_affordance_follows_hover_and_leave() {
    init_logging();
    let state = AppState::new();

    let (state, _) = update(state, Msg::DragHovered);
    assert!(state.view().drag_active);

    let (state, _) = update(state, Msg::DragLeft);
    assert!(!state.view().drag_active);

    let (state, _) = update(state, Msg::DragHovered);
    let (state, _) = update(state, Msg::FilesDropped(paths(&["x.pdf"])));
    assert!(!state.view().drag_active);
}

#[test]
fn click_opens_picker_only_when_idle() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::UploadAreaClicked);
    assert_eq!(effects, vec![Effect::OpenFilePicker]);

    let (state, _) = update(state, Msg::FilesDropped(paths(&["x.pdf"])));
    let (_state, effects) = update(state, Msg::UploadAreaClicked);
    assert!(effects.is_empty());
}

#[test]
fn second_file_ignored_while_attempt_in_flight() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::FilesDropped(paths(&["first.pdf"])));

    let (state, effects) = update(state, Msg::FilesDropped(paths(&["second.pdf"])));
    assert!(effects.is_empty());
    assert_eq!(state.active_attempt(), Some(1));

    let (state, _) = update(state, Msg::UploadAccepted { attempt: 1 });
    let (state, effects) = update(state, Msg::FilesPicked(paths(&["third.pdf"])));
    assert!(effects.is_empty());
    assert_eq!(state.view().file_name.as_deref(), Some("first.pdf"));
    assert_eq!(state.picker_value(), None);
}

#[test]
fn hover_ignored_while_attempt_in_flight() {
    init_logging();
    let state = AppState::new();
    let (state, _) = update(state, Msg::FilesDropped(paths(&["first.pdf"])));

    let (state, _) = update(state, Msg::DragHovered);
    assert!(!state.view().drag_active);
}
