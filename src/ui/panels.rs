use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Left side panel – series list
// ---------------------------------------------------------------------------

/// Render the left series panel.
pub fn side_panel(ui: &mut Ui, state: &mut ViewerState) {
    ui.heading("Series");
    ui.separator();

    if state.series.is_empty() {
        ui.label("No series loaded.");
        return;
    }

    let mut clicked = None;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, rendered) in state.series.iter().enumerate() {
                let text = RichText::new(rendered.series.to_string()).color(rendered.color);
                if ui.selectable_label(i == state.selected, text).clicked() {
                    clicked = Some(i);
                }
            }
        });

    if let Some(i) = clicked {
        state.select(i);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut ViewerState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(r) = state.selected_series() {
            ui.label(format!("{}: {} values", r.series.name, r.series.len()));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_image, "Saved image")
            .clicked()
        {
            state.show_image = !state.show_image;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut ViewerState) {
    let file = rfd::FileDialog::new()
        .set_title("Open series")
        .add_filter("Series text files", &["txt"])
        .pick_file();

    if let Some(path) = file {
        match state.add_series_file(&path) {
            Ok(()) => {
                if let Some(r) = state.selected_series() {
                    log::info!("Loaded {} from {}", r.series, path.display());
                }
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
