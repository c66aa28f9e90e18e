use std::collections::VecDeque;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Context;
use eframe::egui;
use engine_logging::{engine_info, engine_warn};
use summarizer_core::{update, AppState, AppViewModel, Msg};

use super::effects::EffectRunner;
use super::{logging, settings, ui};

/// How often the UI polls the engine while an attempt is in flight.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> anyhow::Result<()> {
    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let loaded = settings::read_settings(&work_dir);
    let config = match &loaded {
        Ok(Some(found)) => found.clone(),
        Ok(None) | Err(_) => settings::Settings::default(),
    };

    logging::initialize(config.log_destination);
    match loaded {
        Ok(Some(_)) => engine_info!(
            "Loaded settings from {:?}",
            settings::settings_path(&work_dir)
        ),
        Ok(None) => engine_info!("No {} found; using defaults", settings::SETTINGS_FILENAME),
        Err(err) => engine_warn!("Ignoring settings: {:#}", err),
    }

    let runner =
        EffectRunner::new(config.upload_settings()).context("starting upload engine")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 560.0])
            .with_min_inner_size([420.0, 360.0])
            .with_title(ui::constants::WINDOW_TITLE)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        ui::constants::WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(SummarizerApp::new(runner)))),
    )
    .map_err(|err| anyhow::anyhow!("window error: {err}"))
}

struct SummarizerApp {
    state: AppState,
    view: AppViewModel,
    runner: EffectRunner,
    /// Whether files were hovering over the window last frame.
    drag_hovering: bool,
}

impl SummarizerApp {
    fn new(runner: EffectRunner) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            runner,
            drag_hovering: false,
        }
    }

    /// Applies `msg` and any messages its effects produce, then refreshes the view.
    fn dispatch(&mut self, ctx: &egui::Context, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            inbox.extend(self.runner.run(ctx, effects));
        }

        if self.state.consume_dirty() {
            self.view = self.state.view();
        }
    }

    fn file_drag_messages(&mut self, ctx: &egui::Context) -> Vec<Msg> {
        let (hovering, dropped) = ctx.input(|i| {
            let dropped: Vec<PathBuf> = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|file| file.path.clone())
                .collect();
            (!i.raw.hovered_files.is_empty(), dropped)
        });

        let mut msgs = Vec::new();
        if hovering && !self.drag_hovering {
            msgs.push(Msg::DragHovered);
        }
        if !dropped.is_empty() {
            msgs.push(Msg::FilesDropped(dropped));
        } else if !hovering && self.drag_hovering {
            msgs.push(Msg::DragLeft);
        }
        self.drag_hovering = hovering;
        msgs
    }
}

impl eframe::App for SummarizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for msg in self.file_drag_messages(ctx) {
            self.dispatch(ctx, msg);
        }
        for msg in self.runner.poll(Instant::now()) {
            self.dispatch(ctx, msg);
        }

        for msg in ui::render::render(ctx, &self.view) {
            self.dispatch(ctx, msg);
        }

        if self.state.active_attempt().is_some() {
            ctx.request_repaint_after(POLL_INTERVAL);
        } else if let Some(deadline) = self.runner.next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}
