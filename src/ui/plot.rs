use eframe::egui::{self, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::ViewerState;

// ---------------------------------------------------------------------------
// Series plot (central panel)
// ---------------------------------------------------------------------------

/// Render the selected series in the central panel.
pub fn series_plot(ui: &mut Ui, state: &ViewerState) {
    let rendered = match state.selected_series() {
        Some(r) => r,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a series file to plot it  (File → Open…)");
            });
            return;
        }
    };

    if state.show_image {
        let uri = format!("file://{}", rendered.image_path.display());
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.add(egui::Image::new(uri).shrink_to_fit());
        });
        return;
    }

    // Keyed by name so each series keeps its own zoom.
    Plot::new(("series_plot", rendered.series.name.as_str()))
        .legend(egui_plot::Legend::default())
        .x_axis_label("Value")
        .y_axis_label("Rank")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            // One line per finite run; lines sharing a name share a legend entry.
            for run in rendered.series.finite_runs() {
                let line = Line::new(PlotPoints::from(run))
                    .name(&rendered.series.name)
                    .color(rendered.color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
