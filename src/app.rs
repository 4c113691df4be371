use eframe::egui;

use crate::error::{Result, SeriesError};
use crate::render::RenderedSeries;
use crate::state::ViewerState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SeriesViewerApp {
    pub state: ViewerState,
}

impl SeriesViewerApp {
    pub fn new(series: Vec<RenderedSeries>, image_size: (u32, u32)) -> Self {
        Self {
            state: ViewerState::new(series, image_size),
        }
    }
}

impl eframe::App for SeriesViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: series list ----
        egui::SidePanel::left("series_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::series_plot(ui, &self.state);
        });
    }
}

/// Open the viewer on `series` and block until the window is closed.
pub fn show(series: Vec<RenderedSeries>, image_size: (u32, u32)) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "seriesviz",
        options,
        Box::new(move |cc| {
            // Install image loaders so the saved PNGs can be displayed.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(SeriesViewerApp::new(series, image_size)))
        }),
    )
    .map_err(|e| SeriesError::Viewer(e.to_string()))
}
