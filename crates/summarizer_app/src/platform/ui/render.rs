use eframe::egui::{
    self, Align2, CursorIcon, FontId, RichText, Sense, Stroke, StrokeKind, Vec2,
};
use summarizer_core::{AppViewModel, Msg, Panel, StreamStatus};

use super::constants::*;

/// Draws the frame for `view` and returns the messages raised by user input.
pub fn render(ctx: &egui::Context, view: &AppViewModel) -> Vec<Msg> {
    let mut msgs = Vec::new();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(HEADING);
            ui.label(RichText::new(SUBHEADING).color(MUTED_TEXT));
        });
        ui.add_space(16.0);

        match view.panel {
            Panel::Upload => {
                upload_surface(ui, view, &mut msgs);
                if view.stream_status == Some(StreamStatus::Interrupted) {
                    interrupted_summary(ui, view, &mut msgs);
                }
            }
            Panel::Loading => loading_indicator(ui),
            Panel::Result => result_panel(ui, view, &mut msgs),
        }
    });

    if let Some(message) = &view.notification {
        notification(ctx, message, &mut msgs);
    }

    msgs
}

fn upload_surface(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    let size = Vec2::new(ui.available_width(), UPLOAD_AREA_HEIGHT);
    let sense = if view.upload_enabled {
        Sense::click()
    } else {
        Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(size, sense);

    let border = if view.drag_active || (view.upload_enabled && response.hovered()) {
        PRIMARY_COLOR
    } else {
        BORDER_COLOR
    };
    let hint = if view.upload_enabled {
        UPLOAD_HINT
    } else {
        UPLOAD_BUSY_HINT
    };

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect(
            rect,
            CORNER_RADIUS,
            ui.visuals().extreme_bg_color,
            Stroke::new(2.0, border),
            StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            hint,
            FontId::proportional(16.0),
            ui.visuals().text_color(),
        );
    }

    if view.upload_enabled {
        let response = response.on_hover_cursor(CursorIcon::PointingHand);
        if response.clicked() {
            msgs.push(Msg::UploadAreaClicked);
        }
    }
}

fn loading_indicator(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.spinner();
        ui.label(LOADING_TEXT);
    });
}

fn result_panel(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    if let Some(name) = &view.file_name {
        ui.label(RichText::new(name).strong());
    }
    ui.add_space(8.0);

    let summary_height = (ui.available_height() - 72.0).max(120.0);
    summary_text(ui, &view.summary_text, summary_height);

    ui.add_space(8.0);
    ui.horizontal(|ui| match view.stream_status {
        Some(StreamStatus::Streaming) => {
            ui.spinner();
            ui.label(RichText::new(STREAMING_TEXT).color(MUTED_TEXT));
        }
        _ => {
            if let Some(label) = &view.summary_chars_label {
                ui.label(RichText::new(label).color(MUTED_TEXT));
            }
            if let Some(label) = view.stream_status_label {
                ui.separator();
                ui.label(RichText::new(label).color(MUTED_TEXT));
            }
        }
    });

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        if ui.button(view.copy_label).clicked() {
            msgs.push(Msg::CopyClicked);
        }
        if ui
            .add_enabled(view.reset_enabled, egui::Button::new(RESET_LABEL))
            .clicked()
        {
            msgs.push(Msg::ResetClicked);
        }
    });
}

/// Text kept from a stream that failed part way, shown under the upload surface.
fn interrupted_summary(ui: &mut egui::Ui, view: &AppViewModel, msgs: &mut Vec<Msg>) {
    ui.add_space(16.0);
    ui.horizontal(|ui| {
        ui.label(RichText::new(INTERRUPTED_TEXT).color(MUTED_TEXT));
        if ui.button(view.copy_label).clicked() {
            msgs.push(Msg::CopyClicked);
        }
    });
    ui.add_space(8.0);
    summary_text(ui, &view.summary_text, PARTIAL_SUMMARY_HEIGHT);
}

fn summary_text(ui: &mut egui::Ui, text: &str, max_height: f32) {
    egui::ScrollArea::vertical()
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .max_height(max_height)
        .show(ui, |ui| {
            ui.add(egui::Label::new(text).wrap().selectable(true));
        });
}

fn notification(ctx: &egui::Context, message: &str, msgs: &mut Vec<Msg>) {
    let response = egui::Modal::new(egui::Id::new("error_notification")).show(ctx, |ui| {
        ui.set_min_width(280.0);
        ui.heading(NOTIFICATION_TITLE);
        ui.add_space(8.0);
        ui.label(message);
        ui.add_space(12.0);
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    });

    if response.inner || response.should_close() {
        msgs.push(Msg::NotificationDismissed);
    }
}
