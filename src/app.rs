use eframe::egui;

use crate::data::model::StudentDataset;
use crate::eda::EdaReport;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct StudEdaApp {
    pub state: AppState,
}

impl StudEdaApp {
    /// Start the viewer with an already-analysed dataset.
    pub fn with_analysis(dataset: StudentDataset, report: EdaReport) -> Self {
        let mut state = AppState::default();
        state.set_analysis(dataset, report);
        Self { state }
    }
}

impl eframe::App for StudEdaApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and plot selector ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: structural summary ----
        egui::SidePanel::left("info_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state);
            });

        // ---- Central panel: active plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::eda_plot(ui, &self.state);
        });
    }
}
